// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::integration::helpers::{start_site, SiteFixture};
    use axum::http::StatusCode;
    use bingwalls::config::settings::Settings;
    use bingwalls::engines::download_engine::ImageDownloader;
    use bingwalls::engines::fetch_engine::PageFetcher;
    use bingwalls::engines::http_client::build_client;
    use bingwalls::engines::types::{DownloadError, FetchError};
    use std::time::Duration;
    use url::Url;

    fn client() -> reqwest::Client {
        build_client(&Settings::defaults().unwrap().http).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_raw_body_and_content_type() {
        let site = start_site(SiteFixture::with_page("<html><body>Test content</body></html>")).await;
        let fetcher = PageFetcher::new(client(), Duration::from_secs(10));
        let url = Url::parse(&format!("{}/china/20250101", site.base_url)).unwrap();

        let page = fetcher.fetch(&url).await.unwrap();

        assert_eq!(page.status, 200);
        assert_eq!(page.url, url);
        assert_eq!(&page.body[..], b"<html><body>Test content</body></html>");
        assert!(page.content_type.unwrap().contains("text/html"));
    }

    #[tokio::test]
    async fn test_fetch_unknown_route_is_status_error() {
        let site = start_site(SiteFixture::with_page("")).await;
        let fetcher = PageFetcher::new(client(), Duration::from_secs(10));
        let url = Url::parse(&format!("{}/missing", site.base_url)).unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        assert_eq!(err.url(), url.as_str());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_request_error() {
        // 绑定后立即释放端口，保证没有服务在监听
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = PageFetcher::new(client(), Duration::from_secs(5));
        let url = Url::parse(&format!("http://{}/china/20250101", addr)).unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_download_creates_missing_parent_directories() {
        let fixture = SiteFixture::with_page("");
        let expected = fixture.image_body.clone();
        let site = start_site(fixture).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("assets").join("daily-wallpaper.jpg");
        let engine = ImageDownloader::new(client(), Duration::from_secs(10), 4);
        let url = Url::parse(&format!("{}/storage/bing-wallpapers/a.jpg", site.base_url)).unwrap();

        let outcome = engine.download(&url, &output).await.unwrap();

        assert_eq!(outcome.path, output);
        assert_eq!(outcome.bytes_written, expected.len() as u64);
        assert_eq!(std::fs::read(&output).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_download_status_error_creates_no_file() {
        let mut fixture = SiteFixture::with_page("");
        fixture.image_status = StatusCode::FORBIDDEN;
        let site = start_site(fixture).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("daily-wallpaper.jpg");
        let engine = ImageDownloader::new(client(), Duration::from_secs(10), 8192);
        let url = Url::parse(&format!("{}/storage/bing-wallpapers/a.jpg", site.base_url)).unwrap();

        let err = engine.download(&url, &output).await.unwrap_err();

        assert!(matches!(err, DownloadError::Status { status: 403, .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
