//! モデル応答テキストから JSON を取り出す
//!
//! モデルは JSON を Markdown のコードフェンスで包んで返すことが多いので、
//! フェンスがあれば中身だけを取り出してから解析する。

use crate::error::Error;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```")
            .expect("fence regex is valid")
    })
}

/// 最初のコードフェンスの中身を返す。フェンスが無ければ前後の空白を落とした全体。
///
/// 先頭が `{` / `[` ならフェンス探索はしない（値の中の ``` を誤検出しないため）。
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }
    fence_re()
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(trimmed)
}

/// 応答テキストを JSON として解析する
///
/// 空テキストは `Error::Unavailable`、解析失敗は `Error::Json`。
pub fn parse_json_text(text: &str) -> Result<Value, Error> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(Error::unavailable("Model returned empty text"));
    }
    serde_json::from_str(body)
        .map_err(|e| Error::json(format!("Model text is not valid JSON: {}", e)))
}
