// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理壁纸来源、HTTP 请求策略、链接解析规则和输出路径的配置
pub mod settings;
