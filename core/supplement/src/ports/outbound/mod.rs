//! Outbound ポート: 評価ユースケースが外界（モデル・保存先）を使うための trait

pub mod model_query;
pub mod result_store;

pub use model_query::ModelQuery;
pub use result_store::ResultStore;
