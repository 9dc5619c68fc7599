// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::warn;

/// 按请求策略构造共享的 HTTP 客户端
///
/// 页面和图片使用同一组请求头；超时按请求单独设置
pub fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    match HeaderValue::from_str(&settings.accept) {
        Ok(v) => {
            headers.insert(ACCEPT, v);
        }
        Err(e) => warn!(error = %e, "Ignoring invalid Accept header"),
    }
    if let Some(lang) = &settings.accept_language {
        match HeaderValue::from_str(lang) {
            Ok(v) => {
                headers.insert(ACCEPT_LANGUAGE, v);
            }
            Err(e) => warn!(error = %e, "Ignoring invalid Accept-Language header"),
        }
    }

    reqwest::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .default_headers(headers)
        .cookie_store(true)
        .build()
}
