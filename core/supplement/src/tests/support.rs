//! テスト用のスタブ

use crate::domain::SupplementResult;
use crate::ports::outbound::{ModelQuery, ResultStore};
use common::error::Error;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// 呼び出しごとの応答を (search フラグ) で決めるスタブ
pub struct StubModel {
    pub base: Box<dyn Fn(&str) -> Result<Value, Error>>,
    pub search: Box<dyn Fn(&str) -> Result<Value, Error>>,
    pub calls: Arc<Mutex<Vec<(String, bool)>>>,
}

impl StubModel {
    pub fn new(
        base: impl Fn(&str) -> Result<Value, Error> + 'static,
        search: impl Fn(&str) -> Result<Value, Error> + 'static,
    ) -> Self {
        Self {
            base: Box::new(base),
            search: Box::new(search),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ModelQuery for StubModel {
    fn query_json(&self, prompt: &str, search: bool) -> Result<Value, Error> {
        self.calls.lock().unwrap().push((prompt.to_string(), search));
        if search {
            (self.search)(prompt)
        } else {
            (self.base)(prompt)
        }
    }
}

/// 保存内容を共有メモリに残すストア
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub saved: Arc<Mutex<Option<Vec<SupplementResult>>>>,
}

impl ResultStore for MemoryStore {
    fn save(&self, results: &[SupplementResult]) -> Result<(), Error> {
        *self.saved.lock().unwrap() = Some(results.to_vec());
        Ok(())
    }
}

pub fn unavailable(_: &str) -> Result<Value, Error> {
    Err(Error::unavailable("Gemini API call not implemented"))
}

pub fn missing_key(_: &str) -> Result<Value, Error> {
    Err(Error::env("GEMINI_API_KEY environment variable not set"))
}
