// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bytes::Bytes;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// 页面抓取错误
#[derive(Error, Debug)]
pub enum FetchError {
    /// 页面地址无法构造
    #[error("Invalid page URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// 网络错误或超时
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 非 2xx 状态码
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::Request { url, .. }
            | FetchError::Status { url, .. } => url,
        }
    }

    /// 服务器返回的状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request { source, .. } => source.status().map(|s| s.as_u16()),
            FetchError::InvalidUrl { .. } => None,
        }
    }
}

/// 图片下载错误
#[derive(Error, Debug)]
pub enum DownloadError {
    /// 请求未能得到响应
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 非 2xx 状态码
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// 读取响应体中途失败
    #[error("Body stream from {url} failed: {source}")]
    Stream {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 写盘失败
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 抓取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 请求的地址，用作相对链接的基准
    pub url: Url,
    pub status: u16,
    pub content_type: Option<String>,
    /// 原始响应体
    pub body: Bytes,
}

/// 下载结果
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub path: PathBuf,
    pub bytes_written: u64,
}
