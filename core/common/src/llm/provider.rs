//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダはリクエスト形式・送信・テキスト抽出を実装する。
/// 呼び出し手順（ペイロード生成 → 送信 → 抽出）は LlmDriver が持つ。
pub trait LlmProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - 送信するプロンプト（1 ターンのみ）
    /// * `search` - true なら検索グラウンディング付き
    fn make_request_payload(&self, prompt: &str, search: bool) -> Value;

    /// HTTPリクエストを実行してレスポンス本文を取得
    ///
    /// # Returns
    /// * `Ok(String)` - 2xx のレスポンス本文（未解析）
    /// * `Err(Error)` - 設定不足・通信失敗・非 2xx
    fn make_http_request(&self, payload: &Value) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Some(String))` - 抽出したテキスト
    /// * `Ok(None)` - テキストが無い
    /// * `Err(Error)` - JSON でない・API エラー・ブロック
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
