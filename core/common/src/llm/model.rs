//! モデル別名（pro / flash）とエンドポイントの対応表

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// 呼び出すモデルの別名
///
/// 閉じた集合。未知の別名は通信前に `Error::InvalidArgument` で弾く。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelAlias {
    #[default]
    Pro,
    Flash,
}

impl ModelAlias {
    /// 全別名（ヘルプ・エラーメッセージ・補完用、表示順）
    pub const ALL: [ModelAlias; 2] = [ModelAlias::Pro, ModelAlias::Flash];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Flash => "flash",
        }
    }

    /// API ベースからの相対パス
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Pro => "models/gemini-2.5-pro-preview-05-06:generateContent",
            Self::Flash => "models/gemini-2.5-flash-preview-04-17:generateContent",
        }
    }

    /// "pro, flash"
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ModelAlias {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pro" => Ok(Self::Pro),
            "flash" => Ok(Self::Flash),
            _ => Err(Error::invalid_argument(format!(
                "Unknown model '{}'. Available: {}",
                s,
                Self::available()
            ))),
        }
    }
}

impl fmt::Display for ModelAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
