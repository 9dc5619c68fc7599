// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志级别，可用 `RUST_LOG` 覆盖
pub const DEFAULT_FILTER: &str = "info,bingwalls=debug";

/// 初始化日志
///
/// 重复调用不会 panic，已有全局 subscriber 时直接返回
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
