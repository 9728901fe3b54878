//! 評価結果の保存 Outbound ポート

use crate::domain::SupplementResult;
use common::error::Error;

/// 全レコードをまとめて保存する（部分書き込みはしない）
pub trait ResultStore {
    fn save(&self, results: &[SupplementResult]) -> Result<(), Error>;
}
