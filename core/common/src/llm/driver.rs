//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::json_text::parse_json_text;
use crate::llm::provider::LlmProvider;
use serde_json::Value;

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// プロンプトを送り、レスポンス JSON をそのまま返す
    ///
    /// # Returns
    /// * `Ok(Value)` - プロバイダが返した JSON（未加工）
    /// * `Err(Error)` - 設定不足・通信失敗・JSON でない本文
    pub fn generate(&self, prompt: &str) -> Result<Value, Error> {
        let payload = self.provider.make_request_payload(prompt, false);
        let response_json = self.provider.make_http_request(&payload)?;
        serde_json::from_str(&response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))
    }

    /// LLMにクエリを送信して応答テキストを取得
    ///
    /// # Arguments
    /// * `prompt` - プロンプト
    /// * `search` - 検索グラウンディングを使うか
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト
    /// * `Err(Error)` - テキストが無い場合は `Error::Unavailable`
    pub fn query(&self, prompt: &str, search: bool) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt, search);
        let response_json = self.provider.make_http_request(&payload)?;
        self.provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::unavailable("No text in response"))
    }

    /// 応答テキストをさらに JSON として解釈する
    pub fn query_json(&self, prompt: &str, search: bool) -> Result<Value, Error> {
        let text = self.query(prompt, search)?;
        parse_json_text(&text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
