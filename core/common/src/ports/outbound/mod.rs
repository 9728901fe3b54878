//! Outbound ポート: アプリが外界（環境変数・FS・HTTP・ログ・LLM）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod http;
pub mod llm_provider;
pub mod log;

pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use http::{HttpRequest, HttpResponse, HttpTransport};
pub use llm_provider::LlmProvider;
pub use log::{log_quietly, now_iso8601, Log, LogLevel, LogRecord};
