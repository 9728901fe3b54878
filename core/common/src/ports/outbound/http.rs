//! HTTP Outbound ポート
//!
//! 送信内容（URL・ヘッダ・JSON ボディ）は純粋な値として組み立て、
//! 実際の送信だけをこの trait に任せる。テストでは送信を記録するモックを注入する。

use crate::error::Error;
use serde_json::Value;

/// 送信前の HTTP リクエスト（POST 固定）
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl HttpRequest {
    /// ヘッダ値を名前で引く（大文字小文字は区別しない）
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// 受信したレスポンス（本文は全量読み込み済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP 送信抽象
///
/// 非 2xx でも Err にはせず HttpResponse を返す。Err は接続失敗などの輸送エラーのみ。
pub trait HttpTransport: Send + Sync {
    fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, Error>;
}
