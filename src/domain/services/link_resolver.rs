// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ResolverSettings;
use crate::domain::models::wallpaper::ResolvedLink;
use crate::utils::url_utils::resolve_url;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid anchor selector"));
static IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img[src]").expect("valid image selector"));

/// 链接解析策略
///
/// 纯函数：同一文档和基准地址总是得到同一结果
pub trait LinkStrategy: Send + Sync {
    /// 策略名称，用于日志
    fn name(&self) -> &'static str;

    /// 在文档中按出现顺序查找第一个候选地址
    fn resolve(&self, document: &Html, base_url: &Url) -> Option<Url>;
}

/// 第一优先级：文字含下载关键词且 href 指向壁纸存储的链接
pub struct KeywordAnchorStrategy {
    keywords: Vec<String>,
    marker: String,
}

impl KeywordAnchorStrategy {
    pub fn new(keywords: &[String], marker: impl Into<String>) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            marker: marker.into(),
        }
    }

    fn matches_keyword(&self, element: &ElementRef<'_>) -> bool {
        let text = element.text().collect::<String>().trim().to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

impl LinkStrategy for KeywordAnchorStrategy {
    fn name(&self) -> &'static str {
        "keyword-anchor"
    }

    fn resolve(&self, document: &Html, base_url: &Url) -> Option<Url> {
        document
            .select(&ANCHOR_SELECTOR)
            .filter(|a| self.matches_keyword(a))
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| href.contains(&self.marker))
            .find_map(|href| join(base_url, href))
    }
}

/// 第二优先级：任何 href 指向壁纸存储的链接
pub struct MarkerAnchorStrategy {
    marker: String,
}

impl MarkerAnchorStrategy {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl LinkStrategy for MarkerAnchorStrategy {
    fn name(&self) -> &'static str {
        "marker-anchor"
    }

    fn resolve(&self, document: &Html, base_url: &Url) -> Option<Url> {
        document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| href.contains(&self.marker))
            .find_map(|href| join(base_url, href))
    }
}

/// 第三优先级：src 指向壁纸存储的图片
pub struct ImageSourceStrategy {
    marker: String,
}

impl ImageSourceStrategy {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl LinkStrategy for ImageSourceStrategy {
    fn name(&self) -> &'static str {
        "image-source"
    }

    fn resolve(&self, document: &Html, base_url: &Url) -> Option<Url> {
        document
            .select(&IMAGE_SELECTOR)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| src.contains(&self.marker))
            .find_map(|src| join(base_url, src))
    }
}

fn join(base_url: &Url, reference: &str) -> Option<Url> {
    match resolve_url(base_url, reference.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            debug!(reference, error = %e, "Skipping unresolvable link");
            None
        }
    }
}

/// 链接解析器
///
/// 按顺序尝试各策略，第一个给出结果的策略胜出，其后的策略不再执行
pub struct LinkResolver {
    strategies: Vec<Box<dyn LinkStrategy>>,
}

impl LinkResolver {
    pub fn new(strategies: Vec<Box<dyn LinkStrategy>>) -> Self {
        Self { strategies }
    }

    /// 按配置构造三级策略链
    pub fn from_settings(settings: &ResolverSettings) -> Self {
        Self::new(vec![
            Box::new(KeywordAnchorStrategy::new(
                &settings.keywords,
                settings.anchor_marker.clone(),
            )),
            Box::new(MarkerAnchorStrategy::new(settings.anchor_marker.clone())),
            Box::new(ImageSourceStrategy::new(settings.image_marker.clone())),
        ])
    }

    /// 解析 HTML 文档，返回壁纸地址
    ///
    /// 没有任何策略命中时返回 `None`，这是正常的否定结果而不是解析错误
    pub fn resolve(&self, html: &str, base_url: &Url) -> Option<ResolvedLink> {
        let document = Html::parse_document(html);
        self.resolve_document(&document, base_url)
    }

    pub fn resolve_document(&self, document: &Html, base_url: &Url) -> Option<ResolvedLink> {
        self.strategies
            .iter()
            .enumerate()
            .find_map(|(index, strategy)| {
                let url = strategy.resolve(document, base_url)?;
                debug!(strategy = strategy.name(), %url, "Strategy matched");
                Some(ResolvedLink {
                    url,
                    tier: index + 1,
                    strategy: strategy.name(),
                })
            })
    }
}

#[cfg(test)]
#[path = "link_resolver_test.rs"]
mod tests;
