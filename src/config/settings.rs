// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::date_service::{self, ClockSource};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// 桌面版 Chrome 的 User-Agent，站点会拦截非浏览器请求
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 应用程序配置设置
///
/// 每个组件只接收自己需要的那一部分
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 壁纸页面来源
    pub source: SourceSettings,
    /// HTTP 请求策略
    pub http: HttpSettings,
    /// 链接解析规则
    pub resolver: ResolverSettings,
    /// 输出文件
    pub output: OutputSettings,
}

/// 壁纸页面来源配置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 站点根地址
    pub base_url: String,
    /// 地区路径段
    pub locale: String,
    /// 日期格式（strftime）
    pub date_format: String,
    /// 计算“昨天”所用的时钟
    pub clock: ClockSource,
}

/// HTTP 请求配置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: Option<String>,
    /// 页面请求超时（秒）
    pub page_timeout_secs: u64,
    /// 图片请求超时（秒）
    pub image_timeout_secs: u64,
    /// 写盘缓冲大小（字节）
    pub chunk_size: usize,
}

impl HttpSettings {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs)
    }
}

/// 链接解析配置
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    /// 下载按钮文字中的关键词
    pub keywords: Vec<String>,
    /// `<a href>` 中标识壁纸存储位置的片段
    pub anchor_marker: String,
    /// `<img src>` 中标识壁纸存储位置的片段
    pub image_marker: String,
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 输出文件路径，每次运行覆盖
    pub path: PathBuf,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 默认值之上依次叠加 `config/default`、`config/{BINGWALLS_ENVIRONMENT}`
    /// 和 `BINGWALLS__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载并校验的配置
    /// * `Err(ConfigError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("BINGWALLS_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::builder_with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("BINGWALLS").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 仅由默认值构成的配置，不读取文件和环境变量
    pub fn defaults() -> Result<Self, ConfigError> {
        let settings: Settings = Self::builder_with_defaults()?.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Source page
            .set_default("source.base_url", "https://bingwalls.com")?
            .set_default("source.locale", "china")?
            .set_default("source.date_format", "%Y%m%d")?
            .set_default("source.clock", "local")?
            // Request policy
            .set_default("http.user_agent", DEFAULT_USER_AGENT)?
            .set_default(
                "http.accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )?
            .set_default("http.accept_language", "zh-CN,zh;q=0.9,en;q=0.8")?
            .set_default("http.page_timeout_secs", 15)?
            .set_default("http.image_timeout_secs", 30)?
            .set_default("http.chunk_size", 8192)?
            // Link resolution
            .set_default("resolver.keywords", vec!["4k", "download", "uhd", "下载"])?
            .set_default("resolver.anchor_marker", "storage/bing-wallpapers/")?
            .set_default("resolver.image_marker", "storage/bing-wallpapers/")?
            // Output
            .set_default("output.path", "daily-wallpaper.jpg")
    }

    /// 校验配置
    ///
    /// 在启动时拒绝会导致错误 URL 或无效请求的配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = Url::parse(&self.source.base_url).map_err(|e| {
            ConfigError::Message(format!(
                "source.base_url '{}' is not a valid URL: {}",
                self.source.base_url, e
            ))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::Message(format!(
                "source.base_url must be http or https, got '{}'",
                base.scheme()
            )));
        }

        date_service::validate_date_format(&self.source.date_format)
            .map_err(|e| ConfigError::Message(format!("source.date_format: {}", e)))?;

        if self.http.chunk_size == 0 {
            return Err(ConfigError::Message("http.chunk_size must be non-zero".into()));
        }
        if self.http.page_timeout_secs == 0 || self.http.image_timeout_secs == 0 {
            return Err(ConfigError::Message("http timeouts must be non-zero".into()));
        }
        if self.resolver.anchor_marker.trim().is_empty()
            || self.resolver.image_marker.trim().is_empty()
        {
            return Err(ConfigError::Message("resolver markers must not be empty".into()));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::Message("output.path must not be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
