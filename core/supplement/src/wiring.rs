//! 配線: 標準アダプタで BatchUseCase を組み立てる

use std::sync::Arc;

use common::adapter::{StdEnvResolver, StdFileSystem};
use common::llm::{GeminiProvider, LlmDriver};
use common::ports::outbound::{EnvResolver, FileSystem, Log};
use common::wiring::{wire_gemini, wire_log};

use crate::adapter::JsonResultStore;
use crate::cli::Config;
use crate::usecase::{AnalyzeUseCase, BatchUseCase};

pub struct App {
    pub log: Arc<dyn Log>,
    pub batch: BatchUseCase<LlmDriver<GeminiProvider>>,
}

pub fn wire_supplement(config: &Config) -> App {
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let log = wire_log("supplement", env.as_ref(), Arc::clone(&fs), config.verbose);
    let driver = wire_gemini(config.model, env, Arc::clone(&log));
    let analyze = AnalyzeUseCase::new(driver, Arc::clone(&log));
    let store = Box::new(JsonResultStore::new(fs, &config.output));
    App {
        batch: BatchUseCase::new(analyze, store, Arc::clone(&log)),
        log,
    }
}
