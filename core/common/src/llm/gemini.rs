//! Gemini 2.5 Pro / Flash プロバイダの実装
//!
//! リクエストは `{"contents":[{"parts":[{"text": ...}]}]}` の 1 ターンのみ。
//! 検索グラウンディング時は `tools: [{"googleSearch": {}}]` を付ける。

use crate::error::Error;
use crate::llm::model::ModelAlias;
use crate::llm::provider::LlmProvider;
use crate::ports::outbound::{
    log_quietly, EnvResolver, HttpRequest, HttpTransport, Log, LogLevel, LogRecord,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// リクエストボディを生成する
pub fn request_payload(prompt: &str, search: bool) -> Value {
    let mut payload = json!({
        "contents": [{"parts": [{"text": prompt}]}]
    });
    if search {
        payload["tools"] = json!([{ "googleSearch": {} }]);
    }
    payload
}

/// 送信する HTTP リクエストを組み立てる
///
/// API キーは呼び出しごとに環境から読む。未設定なら送信前に `Error::Env`。
pub fn build_request(
    env: &dyn EnvResolver,
    alias: ModelAlias,
    payload: Value,
) -> Result<HttpRequest, Error> {
    let key = env.api_key()?;
    let url = format!("{}{}?key={}", env.api_base(), alias.endpoint(), key.expose());
    Ok(HttpRequest {
        url,
        headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        body: payload,
    })
}

/// 非 2xx レスポンスからメッセージを取り出す
fn api_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

/// Gemini プロバイダ
pub struct GeminiProvider {
    alias: ModelAlias,
    env: Arc<dyn EnvResolver>,
    transport: Arc<dyn HttpTransport>,
    log: Arc<dyn Log>,
}

impl GeminiProvider {
    /// 新しいGeminiプロバイダを作成
    ///
    /// API キーはここでは読まない（呼び出しのたびに読む）。
    pub fn new(
        alias: ModelAlias,
        env: Arc<dyn EnvResolver>,
        transport: Arc<dyn HttpTransport>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            alias,
            env,
            transport,
            log,
        }
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn make_request_payload(&self, prompt: &str, search: bool) -> Value {
        request_payload(prompt, search)
    }

    fn make_http_request(&self, payload: &Value) -> Result<String, Error> {
        let request = build_request(self.env.as_ref(), self.alias, payload.clone())?;
        let search = payload.get("tools").is_some();

        log_quietly(
            self.log.as_ref(),
            LogRecord::new(LogLevel::Debug, "model request")
                .layer("adapter")
                .kind("request")
                .field("model", self.alias.as_str())
                .field("endpoint", self.alias.endpoint())
                .field("search", search),
        );

        let response = self.transport.post_json(&request)?;

        log_quietly(
            self.log.as_ref(),
            LogRecord::new(LogLevel::Info, "model response")
                .layer("adapter")
                .kind("request")
                .field("model", self.alias.as_str())
                .field("search", search)
                .field("status", response.status)
                .field("bytes", response.body.len()),
        );

        if !response.is_success() {
            return Err(Error::http(format!(
                "Gemini API error: {}",
                api_error_message(response.status, &response.body)
            )));
        }

        Ok(response.body)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        // 検索グラウンディング時はテキストが複数 part に分かれることがあるので連結する
        let text: Option<String> = v["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .filter(|s| !s.is_empty());

        if text.is_none() {
            if let Some(reason) = v["promptFeedback"]["blockReason"].as_str() {
                return Err(Error::unavailable(format!("Prompt blocked: {}", reason)));
            }
        }

        Ok(text)
    }
}
