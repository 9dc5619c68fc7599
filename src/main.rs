// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bingwalls::application::use_cases::download_wallpaper::WallpaperPipeline;
use bingwalls::config::settings::Settings;
use bingwalls::utils::errors::exit_code;
use bingwalls::utils::telemetry;
use tracing::{error, info};

/// 主函数
///
/// 单线程运行一次流水线，由退出码告知调用方结果
#[tokio::main(flavor = "current_thread")]
async fn main() {
    telemetry::init_telemetry();
    info!("Starting bingwalls...");

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(exit_code::SETUP);
        }
    };

    let pipeline = match WallpaperPipeline::new(settings) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!(error = %e, "Failed to initialise");
            std::process::exit(e.exit_code());
        }
    };

    match pipeline.run().await {
        Ok(report) => {
            info!(
                date = %report.date,
                image_url = %report.image_url,
                path = %report.output_path.display(),
                "Done"
            );
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            std::process::exit(e.exit_code());
        }
    }
}
