use crate::adapter::json_result_store::DEFAULT_OUTPUT;
use clap::builder::ArgAction;
use clap::value_parser;
use common::error::Error;
use common::llm::ModelAlias;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// 2 回の呼び出しで使うモデル
    pub model: ModelAlias,
    /// -o / --output（未指定時は supplement_results.json）
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            model: ModelAlias::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("supplement")
        .about("Evaluate a fixed list of supplements with Gemini and save the results as JSON")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror log records to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model to use: 'pro' or 'flash'. Default is 'pro'.")
                .value_parser(|s: &str| s.parse::<ModelAlias>())
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Output file (default: supplement_results.json)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let defaults = Config::default();
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        model: matches
            .get_one::<ModelAlias>("model")
            .copied()
            .unwrap_or(defaults.model),
        output: matches
            .get_one::<PathBuf>("output")
            .cloned()
            .unwrap_or(defaults.output),
    }
}

pub fn parse_args() -> Result<Config, Error> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> Result<Config, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string().trim_end()))?;
    Ok(matches_to_config(&matches))
}
