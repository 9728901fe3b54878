//! gcli コマンドの enum（Command Pattern）

use common::domain::Prompt;

/// gcli の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum GcliCommand {
    /// ヘルプ表示
    Help,
    /// プロンプトを送ってレスポンス JSON を表示（モデルは配線時に Config から決まる）
    Prompt { prompt: Prompt },
}

impl GcliCommand {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Prompt { .. } => "prompt",
        }
    }
}
