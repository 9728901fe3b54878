//! アダプター（ポートの標準実装）

pub mod json_result_store;
pub mod llm_model_query;

pub use json_result_store::JsonResultStore;
