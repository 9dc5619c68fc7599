// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供错误类型、日志初始化、URL 与文本编码处理
pub mod errors;
pub mod telemetry;
pub mod text_encoding;
pub mod url_utils;
