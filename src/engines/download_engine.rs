// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::types::{DownloadError, DownloadOutcome};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, warn};
use url::Url;

/// 图片下载器
///
/// 响应体分块写入同目录下的 `<name>.part`，完整收到后再改名覆盖目标文件，
/// 失败时目标文件保持原样
pub struct ImageDownloader {
    client: reqwest::Client,
    timeout: Duration,
    chunk_size: usize,
}

impl ImageDownloader {
    pub fn new(client: reqwest::Client, timeout: Duration, chunk_size: usize) -> Self {
        Self {
            client,
            timeout,
            chunk_size: chunk_size.max(1),
        }
    }

    /// 下载图片到指定路径
    ///
    /// # 参数
    ///
    /// * `url` - 图片地址
    /// * `output` - 输出路径，已存在时被覆盖
    ///
    /// # 返回值
    ///
    /// * `Ok(DownloadOutcome)` - 文件已包含完整响应体
    /// * `Err(DownloadError)` - 网络、状态码或写盘错误
    pub async fn download(&self, url: &Url, output: &Path) -> Result<DownloadOutcome, DownloadError> {
        let mut response = self
            .client
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| DownloadError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| DownloadError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let part_path = partial_path(output);
        let bytes_written = match self.write_body(&mut response, url, &part_path).await {
            Ok(n) => n,
            Err(e) => {
                discard(&part_path).await;
                return Err(e);
            }
        };

        if let Err(source) = fs::rename(&part_path, output).await {
            discard(&part_path).await;
            return Err(DownloadError::Io {
                path: output.to_path_buf(),
                source,
            });
        }

        debug!(%url, path = %output.display(), bytes_written, "Image saved");

        Ok(DownloadOutcome {
            path: output.to_path_buf(),
            bytes_written,
        })
    }

    async fn write_body(
        &self,
        response: &mut reqwest::Response,
        url: &Url,
        part_path: &Path,
    ) -> Result<u64, DownloadError> {
        let io_err = |source| DownloadError::Io {
            path: part_path.to_path_buf(),
            source,
        };

        let file = fs::File::create(part_path).await.map_err(io_err)?;
        let mut writer = BufWriter::with_capacity(self.chunk_size, file);
        let mut written: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|source| DownloadError::Stream {
                url: url.to_string(),
                source,
            })?
        {
            writer.write_all(&chunk).await.map_err(io_err)?;
            written += chunk.len() as u64;
        }

        writer.flush().await.map_err(io_err)?;
        writer.get_ref().sync_all().await.map_err(io_err)?;

        Ok(written)
    }
}

/// `<output>.part`
pub fn partial_path(output: &Path) -> PathBuf {
    let mut name: OsString = output.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

async fn discard(part_path: &Path) {
    match fs::remove_file(part_path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %part_path.display(), error = %e, "Failed to remove partial file"),
    }
}
