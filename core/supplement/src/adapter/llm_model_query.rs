//! LlmDriver を ModelQuery として使う

use crate::ports::outbound::ModelQuery;
use common::error::Error;
use common::llm::{LlmDriver, LlmProvider};
use serde_json::Value;

impl<P: LlmProvider> ModelQuery for LlmDriver<P> {
    fn query_json(&self, prompt: &str, search: bool) -> Result<Value, Error> {
        LlmDriver::query_json(self, prompt, search)
    }
}
