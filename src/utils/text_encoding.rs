// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

/// 将页面字节解码为文本，确保输出为 UTF-8
///
/// 顺序：合法 UTF-8 直接返回；否则使用 `Content-Type` 声明的字符集；
/// 都没有时用 chardetng 猜测。无法解码的字节替换为 U+FFFD
pub fn decode_html(body: &[u8], content_type: Option<&str>) -> String {
    if let Ok(text) = std::str::from_utf8(body) {
        return text.to_string();
    }

    let encoding = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or_else(|| detect_encoding(body));

    debug!(encoding = encoding.name(), "Decoding non UTF-8 page");

    let (text, _, had_errors) = encoding.decode(body);
    if had_errors {
        debug!(encoding = encoding.name(), "Page contained malformed sequences");
    }
    text.into_owned()
}

fn detect_encoding(body: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(None, true)
}

/// 从 `Content-Type` 取 `charset` 参数
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
}
