//! 1 対象の評価: 通常呼び出しと検索付き呼び出しを順に行い、レコードを組み立てる

use std::sync::Arc;

use crate::domain::record::FIELD_NAMES;
use crate::domain::{SubjectName, SupplementResult};
use crate::ports::outbound::ModelQuery;
use common::error::Error;
use common::ports::outbound::{log_quietly, Log, LogLevel, LogRecord};
use serde_json::{json, Value};

const SYSTEM_PROMPT: &str = "You are a transdisciplinary biohacking evidence-engine.";

/// 評価用プロンプト（システム文 + 依頼文 + 期待するキー一覧）
pub fn build_prompt(name: &str) -> String {
    format!(
        "{}Evaluate {} and return JSON\nKeys: {}",
        SYSTEM_PROMPT,
        name,
        FIELD_NAMES.join(", ")
    )
}

pub struct AnalyzeUseCase<Q: ModelQuery> {
    model: Q,
    log: Arc<dyn Log>,
}

impl<Q: ModelQuery> AnalyzeUseCase<Q> {
    pub fn new(model: Q, log: Arc<dyn Log>) -> Self {
        Self { model, log }
    }

    /// 通常 → 検索付きの順に 2 回問い合わせ、検索付きを優先してレコードにする
    ///
    /// 設定不足・出力なしの失敗は None 扱いで続行する。両方 None なら名前だけのレコード。
    /// それ以外のエラーはそのまま返す。
    pub fn analyze(&self, name: &SubjectName) -> Result<SupplementResult, Error> {
        let prompt = build_prompt(name);
        let base = self.call(name, &prompt, false)?;
        let search = self.call(name, &prompt, true)?;
        let source = match (&search, &base) {
            (Some(_), _) => "search",
            (None, Some(_)) => "base",
            (None, None) => "none",
        };
        let data = search.or(base).unwrap_or_else(|| json!({}));

        log_quietly(
            self.log.as_ref(),
            LogRecord::new(LogLevel::Debug, "assembling result")
                .layer("usecase")
                .field("subject", name.to_string())
                .field("source", source),
        );
        SupplementResult::from_json(data, name)
    }

    fn call(&self, name: &SubjectName, prompt: &str, search: bool) -> Result<Option<Value>, Error> {
        match self.model.query_json(prompt, search) {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.is_soft() => {
                log_quietly(
                    self.log.as_ref(),
                    LogRecord::new(LogLevel::Warn, format!("model call skipped: {}", e))
                        .layer("usecase")
                        .kind("fallback")
                        .field("subject", name.to_string())
                        .field("search", search)
                        .field("error_kind", e.kind()),
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
