mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{parse_args, Config};
use common::error::Error;
use common::ports::outbound::{log_quietly, LogLevel, LogRecord};
use domain::SubjectName;
use wiring::{wire_supplement, App};

/// 1 回分のバッチ実行（ライフサイクルログ付き）
fn run_batch(app: &App, config: &Config, subjects: &[SubjectName]) -> Result<i32, Error> {
    log_quietly(
        app.log.as_ref(),
        LogRecord::new(LogLevel::Info, "command started")
            .layer("cli")
            .kind("lifecycle")
            .field("model", config.model.as_str())
            .field("output", config.output.display().to_string())
            .field("subjects", subjects.len()),
    );
    let result = app.batch.run(subjects).map(|_| 0);
    let code = match &result {
        Ok(code) => *code,
        Err(e) => e.exit_code(),
    };
    log_quietly(
        app.log.as_ref(),
        LogRecord::new(LogLevel::Info, "command finished")
            .layer("cli")
            .kind("lifecycle")
            .field("exit_code", code),
    );
    if let Err(ref e) = result {
        log_quietly(
            app.log.as_ref(),
            LogRecord::new(LogLevel::Error, e.to_string())
                .layer("cli")
                .kind("error")
                .field("error_kind", e.kind()),
        );
    }
    result
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("supplement: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    if config.help {
        print_help();
        return Ok(0);
    }
    let app = wire_supplement(&config);
    run_batch(&app, &config, &SubjectName::defaults())
}

fn print_usage() {
    eprintln!("Usage: supplement [options]");
}

fn print_help() {
    println!("Usage: supplement [options]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -m, --model <model>           Model to use: 'pro' or 'flash'. Default is 'pro'.");
    println!("  -o, --output <path>           Output file. Default is supplement_results.json.");
    println!("  -v, --verbose                 Mirror log records to stderr");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY   API key. If unset, every call is skipped and records stay empty.");
    println!("  GEMINI_API_BASE  Override the API base URL.");
    println!("  GCLI_HOME        State directory; logs go to $GCLI_HOME/log/supplement.jsonl.");
    println!();
    println!("Description:");
    println!("  Evaluates each supplement twice (plain and search-grounded), prefers the");
    println!("  search-grounded answer, and writes all records as one JSON array.");
    println!();
    println!("Supplements:");
    for name in domain::DEFAULT_SUBJECTS {
        println!("  {}", name);
    }
}
