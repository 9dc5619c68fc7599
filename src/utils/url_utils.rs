// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use url::{ParseError, Url};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("cannot join with base: {0}")]
    Parse(#[from] ParseError),
    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),
}

/// 将可能为相对路径的链接转换为可下载的绝对地址
///
/// 只接受 http/https 结果，`javascript:`、`data:` 等链接视为无效
pub fn resolve_url(base_url: &Url, reference: &str) -> Result<Url, ResolveError> {
    let url = base_url.join(reference)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ResolveError::UnsupportedScheme(other.to_string())),
    }
}
