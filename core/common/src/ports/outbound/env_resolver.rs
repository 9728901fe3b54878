//! 環境変数解決 Outbound ポート
//!
//! API キー・API ベース URL・状態ディレクトリを環境変数から解決する。
//! usecase / adapter はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{ApiKey, StateDir};
use crate::error::Error;

/// API キーを読む環境変数名
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// API ベース URL を上書きする環境変数名
pub const API_BASE_ENV: &str = "GEMINI_API_BASE";

/// 既定の API ベース URL（末尾スラッシュ付き）
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// GEMINI_API_KEY を読む。未設定・空文字なら Error::Env。
    ///
    /// 呼び出しのたびに読み直す（キャッシュしない）。
    fn api_key(&self) -> Result<ApiKey, Error>;

    /// API ベース URL。GEMINI_API_BASE が無ければ DEFAULT_API_BASE。
    /// 戻り値は常に '/' で終わる。
    fn api_base(&self) -> String;

    /// 状態ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. GCLI_HOME（設定されていれば）
    /// 2. $XDG_STATE_HOME/gcli
    /// 3. $HOME/.local/state/gcli
    fn resolve_state_dir(&self) -> Result<StateDir, Error>;
}

/// ベース URL の末尾に '/' を補う
pub fn normalize_api_base(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}
