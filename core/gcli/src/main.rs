mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{log_quietly, LogLevel, LogRecord};
use domain::GcliCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_gcli, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config)?;
        let command_name = cmd.name();
        log_quietly(
            self.app.log.as_ref(),
            LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            GcliCommand::Help => {
                print_help();
                Ok(0)
            }
            GcliCommand::Prompt { prompt } => {
                self.app.prompt_use_case.run(&prompt).map(|json| {
                    println!("{}", json);
                    0
                })
            }
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        log_quietly(
            self.app.log.as_ref(),
            LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            log_quietly(
                self.app.log.as_ref(),
                LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error")
                    .field("error_kind", e.kind()),
            );
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("gcli: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_gcli(&config);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: gcli [options] <prompt>");
}

fn print_help() {
    println!("Usage: gcli [options] <prompt>");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -m, --model <model>           Model to use: 'pro' or 'flash'. Default is 'pro'.");
    println!("  -v, --verbose                 Mirror log records to stderr");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY   API key sent as the ?key= query parameter (required).");
    println!("  GEMINI_API_BASE  Override the API base URL.");
    println!("                   Default: https://generativelanguage.googleapis.com/v1beta/");
    println!("  GCLI_HOME        State directory; logs go to $GCLI_HOME/log/gcli.jsonl.");
    println!("                   If unset, $XDG_STATE_HOME/gcli or ~/.local/state/gcli is used.");
    println!();
    println!("Description:");
    println!("  Send a single prompt to the Gemini API and print the raw response JSON.");
    println!();
    println!("Examples:");
    println!("  gcli \"Explain quantum computing\"");
    println!("  gcli --model flash hello");
}
