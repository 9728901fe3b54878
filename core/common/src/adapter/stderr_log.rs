//! 人間向けログ（LogRecord → stderr に要点のみ出力）
//!
//! -v / --verbose 指定時にファイルログと並べて使う。fields の全量は出さず要点のみ。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields を 1 行の短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = record.fields.as_ref().filter(|f| !f.is_empty()) else {
        return String::new();
    };
    let s = serde_json::Value::Object(fields.clone().into_iter().collect()).to_string();
    if s.len() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// stderr 用の 1 行を作る
pub fn format_line(prog: &str, record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", prog, record.level.as_str());
    if let Some(layer) = &record.layer {
        line.push_str(&format!(" {}", layer));
    }
    line.push_str(&format!(": {}", record.message));
    let summary = fields_summary(record);
    if !summary.is_empty() {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// stderr に整形して出力する Log 実装（全レベルを出す）
pub struct StderrLog {
    prog: String,
}

impl StderrLog {
    pub fn new(prog: impl Into<String>) -> Self {
        Self { prog: prog.into() }
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(&self.prog, record));
        Ok(())
    }
}
