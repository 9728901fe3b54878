//! ユースケース層

pub mod analyze;
pub mod batch;

pub use analyze::{build_prompt, AnalyzeUseCase};
pub use batch::BatchUseCase;
