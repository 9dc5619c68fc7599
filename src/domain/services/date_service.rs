// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SourceSettings;
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate, Utc};
use serde::Deserialize;
use std::fmt::{self, Write};
use thiserror::Error;
use url::{ParseError, Url};

/// 计算日期所用的时钟
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    Local,
    Utc,
}

/// 按指定时钟取当天日期
pub fn today(clock: ClockSource) -> NaiveDate {
    match clock {
        ClockSource::Local => Local::now().date_naive(),
        ClockSource::Utc => Utc::now().date_naive(),
    }
}

/// 前一天；站点的壁纸页比当天晚一天发布
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

/// 页面地址构造错误
#[derive(Error, Debug)]
pub enum PageUrlError {
    #[error("date format '{0}' cannot be applied to a date")]
    Format(String),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// 格式化日期
///
/// 无效或需要时间字段的格式返回 `fmt::Error`
pub fn format_date(date: NaiveDate, format: &str) -> Result<String, fmt::Error> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(format))?;
    Ok(rendered)
}

/// 校验 strftime 格式串
///
/// 除语法错误外，还拒绝日期无法提供的字段（如 `%H`）
pub fn validate_date_format(format: &str) -> Result<(), String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.is_empty() {
        return Err("format is empty".to_string());
    }
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(format!("'{}' is not a valid strftime pattern", format));
    }

    let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    format_date(sample, format)
        .map(|_| ())
        .map_err(|_| format!("'{}' cannot be applied to a date", format))
}

/// 构造壁纸页面地址 `<base_url>/<locale>/<date>`
pub fn page_url(source: &SourceSettings, date: NaiveDate) -> Result<Url, PageUrlError> {
    let formatted = format_date(date, &source.date_format)
        .map_err(|_| PageUrlError::Format(source.date_format.clone()))?;
    let raw = format!(
        "{}/{}/{}",
        source.base_url.trim_end_matches('/'),
        source.locale.trim_matches('/'),
        formatted
    );
    Ok(Url::parse(&raw)?)
}
