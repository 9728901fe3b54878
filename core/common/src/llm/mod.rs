//! LLMドライバーとプロバイダの実装
//!
//! プロバイダ（Gemini）が送受信の形式を持ち、ドライバーが共通の呼び出し手順を持つ。

pub mod driver;
pub mod gemini;
pub mod json_text;
pub mod model;
pub mod provider;

pub use driver::LlmDriver;
pub use gemini::GeminiProvider;
pub use model::ModelAlias;
pub use provider::LlmProvider;
