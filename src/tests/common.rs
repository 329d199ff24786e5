// src/tests/common.rs

//! Common sample access-log records and line-source helpers for tests.

use std::io::Result;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// sample access-log records
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// a Googlebot crawl; hour 0
pub const LINE_GOOGLEBOT: &str = r#"66.249.66.35 - - [15/Sep/2023:00:18:46 +0200] "GET /~luis/sw05-06/libre_m2_baja.pdf HTTP/1.1" 200 5940849 "-" "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)""#;

/// a YandexBot crawl; hour 0
pub const LINE_YANDEXBOT: &str = r#"213.180.203.109 - - [15/Sep/2023:00:12:18 +0200] "GET /robots.txt HTTP/1.1" 302 567 "-" "Mozilla/5.0 (compatible; YandexBot/3.0; +http://yandex.com/bots)""#;

/// a browser access with a referrer; hour 12
pub const LINE_FIREFOX: &str = r#"147.96.46.52 - - [10/Oct/2023:12:55:47 +0200] "GET /favicon.ico HTTP/1.1" 404 519 "https://antares.sip.ucm.es/" "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/117.0""#;

pub const UA_GOOGLEBOT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
pub const UA_FIREFOX: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/117.0";

/// missing the closing `]` of the bracketed timestamp
pub const LINE_BAD_NO_BRACKET: &str = r#"66.249.66.35 - - [15/Sep/2023:00:18:46 +0200 "GET / HTTP/1.1" 200 5940849 "-" "curl/7.88.1""#;

/// only one trailing quoted field
pub const LINE_BAD_ONE_QUOTED: &str = r#"66.249.66.35 - - [15/Sep/2023:00:18:46 +0200] "GET / HTTP/1.1" 200 5940849 "curl/7.88.1""#;

/// status code is not numeric
pub const LINE_BAD_STATUS: &str = r#"66.249.66.35 - - [15/Sep/2023:00:18:46 +0200] "GET / HTTP/1.1" OK 5940849 "-" "curl/7.88.1""#;

/// month abbreviation `Foo` is not a month
pub const LINE_BAD_MONTH: &str = r#"66.249.66.35 - - [15/Foo/2023:00:18:46 +0200] "GET / HTTP/1.1" 200 5940849 "-" "curl/7.88.1""#;

/// hour `25` is out of range
pub const LINE_BAD_HOUR: &str = r#"66.249.66.35 - - [15/Sep/2023:25:18:46 +0200] "GET / HTTP/1.1" 200 5940849 "-" "curl/7.88.1""#;

/// timezone offset is missing
pub const LINE_BAD_NO_OFFSET: &str = r#"66.249.66.35 - - [15/Sep/2023:00:18:46] "GET / HTTP/1.1" 200 5940849 "-" "curl/7.88.1""#;

/// six records; hours `[5, 5, 5, 7, 7, 23]`, two distinct non-bot
/// addresses `34.105.93.183` and `39.103.168.88`, two bot-only addresses
pub const LINES_SHORT: &[&str] = &[
    r#"34.105.93.183 - - [15/Sep/2023:05:03:59 +0200] "GET /index.html HTTP/1.1" 200 1793 "-" "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36""#,
    r#"39.103.168.88 - - [15/Sep/2023:05:23:27 +0200] "GET / HTTP/1.1" 200 1793 "-" "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36""#,
    r#"66.249.66.35 - - [15/Sep/2023:05:48:51 +0200] "GET /robots.txt HTTP/1.1" 302 567 "-" "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)""#,
    r#"34.105.93.183 - - [15/Sep/2023:07:11:04 +0200] "GET /favicon.ico HTTP/1.1" 404 519 "-" "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36""#,
    r#"213.180.203.109 - - [15/Sep/2023:07:40:00 +0200] "GET /robots.txt HTTP/1.1" 302 567 "-" "Mozilla/5.0 (compatible; YandexBot/3.0; +http://yandex.com/bots)""#,
    r#"39.103.168.88 - - [15/Sep/2023:23:59:59 +0200] "GET /index.html HTTP/1.1" 200 1793 "-" "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36""#,
];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// line-source helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// an in-memory line source; what a `LineReader` would yield for a file
/// holding `lines`
pub fn source_of(lines: &[&str]) -> Vec<Result<String>> {
    lines
        .iter()
        .map(|line| Ok((*line).to_string()))
        .collect()
}

/// `lines` joined for writing to a temporary file, trailing newline
/// included
pub fn file_data_of(lines: &[&str]) -> String {
    let mut data = lines.join("\n");
    data.push('\n');

    data
}
