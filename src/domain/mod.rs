// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：解析结果与运行报告
/// - 服务（services）：日期推导与链接解析，均为纯函数，不做 I/O
pub mod models;
pub mod services;
