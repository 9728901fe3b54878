//! 配線ヘルパー: 両コマンドで同じ組み立てをする部分

use std::sync::Arc;

use crate::adapter::{FileJsonLog, MultiLog, NoopLog, ReqwestTransport, StderrLog};
use crate::llm::{GeminiProvider, LlmDriver, ModelAlias};
use crate::ports::outbound::{EnvResolver, FileSystem, Log};

/// ロガーを組み立てる
///
/// 状態ディレクトリが解決できればファイルへ JSONL、verbose なら stderr にも出す。
/// どちらも無ければ NoopLog。
pub fn wire_log(
    prog: &str,
    env: &dyn EnvResolver,
    fs: Arc<dyn FileSystem>,
    verbose: bool,
) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if let Ok(state_dir) = env.resolve_state_dir() {
        logs.push(Arc::new(FileJsonLog::new(fs, state_dir.log_file(prog))));
    }
    if verbose {
        logs.push(Arc::new(StderrLog::new(prog)));
    }
    if logs.is_empty() {
        return Arc::new(NoopLog);
    }
    if logs.len() == 1 {
        return logs.remove(0);
    }
    Arc::new(MultiLog::new(logs))
}

/// reqwest で送信する Gemini ドライバーを組み立てる
pub fn wire_gemini(
    alias: ModelAlias,
    env: Arc<dyn EnvResolver>,
    log: Arc<dyn Log>,
) -> LlmDriver<GeminiProvider> {
    let transport = Arc::new(ReqwestTransport::new());
    LlmDriver::new(GeminiProvider::new(alias, env, transport, log))
}
