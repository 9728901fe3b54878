//! プロンプト送信ユースケース
//!
//! 1 回送ってレスポンス JSON を整形して返す。リトライはしない。

use std::sync::Arc;

use common::domain::Prompt;
use common::error::Error;
use common::llm::{LlmDriver, LlmProvider};
use common::ports::outbound::{log_quietly, Log, LogLevel, LogRecord};

pub struct PromptUseCase<P: LlmProvider> {
    driver: LlmDriver<P>,
    log: Arc<dyn Log>,
}

impl<P: LlmProvider> PromptUseCase<P> {
    pub fn new(driver: LlmDriver<P>, log: Arc<dyn Log>) -> Self {
        Self { driver, log }
    }

    /// プロンプトを送り、レスポンス JSON を 2 スペースインデントの文字列で返す
    pub fn run(&self, prompt: &Prompt) -> Result<String, Error> {
        log_quietly(
            self.log.as_ref(),
            LogRecord::new(LogLevel::Debug, "sending prompt")
                .layer("usecase")
                .field("provider", self.driver.provider().name())
                .field("prompt_chars", prompt.chars().count()),
        );
        let response = self.driver.generate(prompt)?;
        Ok(serde_json::to_string_pretty(&response)?)
    }
}
