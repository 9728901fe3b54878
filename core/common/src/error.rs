//! エラーハンドリング
//!
//! 全クレート共通のエラー型。終了コードは sysexits に合わせる。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（未知のモデル別名・CLI の使い方誤り）
    #[error("{0}")]
    InvalidArgument(String),
    /// 設定不足（API キー未設定など）
    #[error("{0}")]
    Env(String),
    /// 通信失敗・非 2xx レスポンス
    #[error("{0}")]
    Http(String),
    /// JSON の解析・レコード構築の失敗
    #[error("{0}")]
    Json(String),
    #[error("{0}")]
    Io(String),
    /// モデル出力が得られなかった（候補なし・ブロックなど）
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::Unavailable(_) | Self::Http(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
            Self::Env(_) => 78,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// バッチ処理で空結果に置き換えて続行してよいエラーか
    ///
    /// 設定不足とモデル出力なしのみ。通信・解析エラーは含まない。
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::Env(_) | Self::Unavailable(_))
    }

    /// ログ用の短い種別名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Env(_) => "env",
            Self::Http(_) => "http",
            Self::Json(_) => "json",
            Self::Io(_) => "io",
            Self::Unavailable(_) => "unavailable",
            Self::System(_) => "system",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
