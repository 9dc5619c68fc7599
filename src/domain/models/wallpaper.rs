// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use std::path::PathBuf;
use url::Url;

/// 解析出的壁纸地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// 绝对地址
    pub url: Url,
    /// 命中的优先级（从 1 开始）
    pub tier: usize,
    /// 命中的策略名称
    pub strategy: &'static str,
}

/// 一次成功运行的结果
#[derive(Debug, Clone)]
pub struct RunReport {
    pub date: NaiveDate,
    pub page_url: Url,
    pub image_url: Url,
    pub tier: usize,
    pub output_path: PathBuf,
    pub bytes_written: u64,
}
