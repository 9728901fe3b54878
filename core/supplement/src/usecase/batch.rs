//! 対象一覧を順に評価し、全件をまとめて保存する

use std::sync::Arc;

use crate::domain::{SubjectName, SupplementResult};
use crate::ports::outbound::{ModelQuery, ResultStore};
use crate::usecase::AnalyzeUseCase;
use common::error::Error;
use common::ports::outbound::{log_quietly, Log, LogLevel, LogRecord};

pub struct BatchUseCase<Q: ModelQuery> {
    analyze: AnalyzeUseCase<Q>,
    store: Box<dyn ResultStore>,
    log: Arc<dyn Log>,
}

impl<Q: ModelQuery> BatchUseCase<Q> {
    pub fn new(analyze: AnalyzeUseCase<Q>, store: Box<dyn ResultStore>, log: Arc<dyn Log>) -> Self {
        Self { analyze, store, log }
    }

    /// 入力順に 1 件ずつ評価し、最後に一括保存する
    ///
    /// 途中で失敗した場合は何も保存しない。
    pub fn run(&self, subjects: &[SubjectName]) -> Result<Vec<SupplementResult>, Error> {
        let mut results = Vec::with_capacity(subjects.len());
        for name in subjects {
            log_quietly(
                self.log.as_ref(),
                LogRecord::new(LogLevel::Info, "evaluating")
                    .layer("usecase")
                    .field("subject", name.to_string()),
            );
            results.push(self.analyze.analyze(name)?);
        }
        self.store.save(&results)?;
        log_quietly(
            self.log.as_ref(),
            LogRecord::new(LogLevel::Info, "results saved")
                .layer("usecase")
                .field("count", results.len()),
        );
        Ok(results)
    }
}
