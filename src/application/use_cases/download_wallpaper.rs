// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::wallpaper::RunReport;
use crate::domain::services::date_service;
use crate::domain::services::link_resolver::LinkResolver;
use crate::engines::download_engine::ImageDownloader;
use crate::engines::fetch_engine::PageFetcher;
use crate::engines::http_client::build_client;
use crate::engines::types::FetchError;
use crate::utils::errors::{PipelineError, ResolutionFailure};
use crate::utils::text_encoding::decode_html;
use chrono::NaiveDate;
use tracing::info;

/// 每日壁纸下载用例
///
/// 抓取页面 → 解析链接 → 下载图片，严格顺序执行，任何一步失败即终止
pub struct WallpaperPipeline {
    settings: Settings,
    fetcher: PageFetcher,
    resolver: LinkResolver,
    downloader: ImageDownloader,
}

impl WallpaperPipeline {
    /// 校验配置并构造流水线
    ///
    /// 配置无效时返回 `PipelineError::Config`
    pub fn new(settings: Settings) -> Result<Self, PipelineError> {
        settings.validate()?;
        let client = build_client(&settings.http).map_err(PipelineError::Client)?;
        let fetcher = PageFetcher::new(client.clone(), settings.http.page_timeout());
        let downloader = ImageDownloader::new(
            client,
            settings.http.image_timeout(),
            settings.http.chunk_size,
        );
        let resolver = LinkResolver::from_settings(&settings.resolver);

        Ok(Self {
            settings,
            fetcher,
            resolver,
            downloader,
        })
    }

    /// 按配置的时钟取昨天的壁纸
    pub async fn run(&self) -> Result<RunReport, PipelineError> {
        let today = date_service::today(self.settings.source.clock);
        self.run_for(date_service::previous_day(today)).await
    }

    /// 下载指定日期的壁纸
    pub async fn run_for(&self, date: NaiveDate) -> Result<RunReport, PipelineError> {
        let page_url = date_service::page_url(&self.settings.source, date).map_err(|e| {
            FetchError::InvalidUrl {
                url: format!("{}/{}", self.settings.source.base_url, self.settings.source.locale),
                reason: e.to_string(),
            }
        })?;
        info!(%date, %page_url, "Fetching wallpaper page");

        let page = self.fetcher.fetch(&page_url).await?;
        let html = decode_html(&page.body, page.content_type.as_deref());

        let link = self
            .resolver
            .resolve(&html, &page.url)
            .ok_or_else(|| ResolutionFailure {
                page_url: page_url.to_string(),
            })?;
        info!(
            image_url = %link.url,
            tier = link.tier,
            strategy = link.strategy,
            "Found wallpaper link"
        );

        let output = &self.settings.output.path;
        let outcome = self.downloader.download(&link.url, output).await?;
        info!(
            path = %outcome.path.display(),
            bytes = outcome.bytes_written,
            "Wallpaper saved"
        );

        Ok(RunReport {
            date,
            page_url,
            image_url: link.url,
            tier: link.tier,
            output_path: outcome.path,
            bytes_written: outcome.bytes_written,
        })
    }
}
