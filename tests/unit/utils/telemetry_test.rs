// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use bingwalls::utils::telemetry;

    #[test]
    fn test_telemetry_initialization_is_repeatable() {
        telemetry::init_telemetry();
        assert!(tracing::dispatcher::has_been_set());

        // 第二次调用不替换已安装的全局 subscriber
        telemetry::init_telemetry();
        assert!(tracing::dispatcher::has_been_set());
        let installed = tracing::dispatcher::get_default(|d| {
            !d.is::<tracing::subscriber::NoSubscriber>()
        });
        assert!(installed);

        tracing::debug!("This is a debug message");
        tracing::info!(
            page_url = "https://bingwalls.com/china/20250101",
            tier = 1,
            "Found wallpaper link"
        );

        let error_result: Result<(), &str> = Err("Test error");
        if let Err(e) = error_result {
            tracing::error!(error = e, "Run failed");
        }
    }
}
