// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 日期服务（date_service）：计算“昨天”并拼出页面地址
/// - 链接解析（link_resolver）：按优先级从页面中找出壁纸地址
pub mod date_service;
pub mod link_resolver;
