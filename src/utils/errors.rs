// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::types::{DownloadError, FetchError};
use thiserror::Error;

/// 进程退出码
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// 配置或启动失败
    pub const SETUP: i32 = 1;
    pub const FETCH: i32 = 2;
    pub const RESOLUTION: i32 = 3;
    pub const DOWNLOAD: i32 = 4;
}

/// 页面中没有任何候选壁纸链接
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No wallpaper link found on {page_url}")]
pub struct ResolutionFailure {
    pub page_url: String,
}

/// 流水线错误，每种都会终止本次运行
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Page fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Resolution(#[from] ResolutionFailure),

    #[error("Image download failed: {0}")]
    Download(#[from] DownloadError),
}

impl PipelineError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Config(_) | PipelineError::Client(_) => exit_code::SETUP,
            PipelineError::Fetch(_) => exit_code::FETCH,
            PipelineError::Resolution(_) => exit_code::RESOLUTION,
            PipelineError::Download(_) => exit_code::DOWNLOAD,
        }
    }
}
