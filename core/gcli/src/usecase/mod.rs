//! ユースケース層

pub mod prompt;

pub use prompt::PromptUseCase;
