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

use crate::engines::types::{FetchError, FetchedPage};
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// 页面抓取器
///
/// 单次 GET，不重试
pub struct PageFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// 抓取页面原始内容
    ///
    /// # 参数
    ///
    /// * `url` - 页面地址
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchedPage)` - 2xx 响应及其原始字节
    /// * `Err(FetchError)` - 网络错误、超时或非 2xx 状态
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        debug!(
            %url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Page fetched"
        );

        Ok(FetchedPage {
            url: url.clone(),
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
