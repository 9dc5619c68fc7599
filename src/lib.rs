// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 串联抓取、解析和下载的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 日期推导、链接解析规则和结果模型
pub mod domain;

/// 引擎模块
///
/// 基于 reqwest 的页面抓取和图片下载
pub mod engines;

/// 工具模块
///
/// 错误类型、日志、URL 与文本编码处理
pub mod utils;
