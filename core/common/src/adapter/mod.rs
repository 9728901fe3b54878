//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase は ports の trait 経由でのみ環境変数・ファイル・HTTP・ログに触れる。
//! 実装は標準実装（Std* / Reqwest*）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod reqwest_http;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;

pub use file_json_log::{FileJsonLog, MultiLog, NoopLog};
pub use reqwest_http::ReqwestTransport;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use stderr_log::StderrLog;
