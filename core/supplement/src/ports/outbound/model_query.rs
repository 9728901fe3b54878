//! モデル問い合わせ Outbound ポート

use common::error::Error;
use serde_json::Value;

/// プロンプトを 1 回送り、応答テキストを JSON として返す
///
/// 実装は `LlmDriver`（adapter::llm_model_query）やテスト用のスタブ。
pub trait ModelQuery {
    /// # Arguments
    /// * `prompt` - プロンプト
    /// * `search` - 検索グラウンディング付きで呼ぶか
    fn query_json(&self, prompt: &str, search: bool) -> Result<Value, Error>;
}
