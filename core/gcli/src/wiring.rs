//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{StdEnvResolver, StdFileSystem};
use common::llm::GeminiProvider;
use common::ports::outbound::{EnvResolver, FileSystem, Log};
use common::wiring::{wire_gemini, wire_log};

use crate::cli::Config;
use crate::usecase::PromptUseCase;

pub struct App {
    pub log: Arc<dyn Log>,
    pub prompt_use_case: PromptUseCase<GeminiProvider>,
}

/// 配線: 標準アダプタで App を組み立てる（モデルは config.model で固定）
pub fn wire_gcli(config: &Config) -> App {
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let log = wire_log("gcli", env.as_ref(), fs, config.verbose);
    let driver = wire_gemini(config.model, Arc::clone(&env), Arc::clone(&log));
    App {
        prompt_use_case: PromptUseCase::new(driver, Arc::clone(&log)),
        log,
    }
}
