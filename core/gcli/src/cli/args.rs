use crate::domain::GcliCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::Prompt;
use common::error::Error;
use common::llm::ModelAlias;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// -m / --model（未指定時は pro）
    pub model: ModelAlias,
    pub prompt: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            model: ModelAlias::default(),
            prompt: None,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

pub fn build_clap_command() -> clap::Command {
    clap::Command::new("gcli")
        .about("Send a prompt to the Gemini API")
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
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("prompt")
                .index(1)
                .value_name("prompt")
                .help("Prompt text to send to the model")
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        model: matches
            .get_one::<ModelAlias>("model")
            .copied()
            .unwrap_or_default(),
        prompt: matches.get_one::<String>("prompt").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_outcome(build_clap_command().try_get_matches())
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<ParseOutcome, Error> {
    parse_outcome(build_clap_command().try_get_matches_from(args))
}

fn parse_outcome(matches: Result<clap::ArgMatches, clap::Error>) -> Result<ParseOutcome, Error> {
    let matches = matches.map_err(|e| Error::invalid_argument(e.to_string().trim_end()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// Config をコマンドに変換する。プロンプトが空なら引数不正。
pub fn config_to_command(config: Config) -> Result<GcliCommand, Error> {
    if config.help {
        return Ok(GcliCommand::Help);
    }
    match config.prompt {
        Some(p) if !p.trim().is_empty() => Ok(GcliCommand::Prompt {
            prompt: Prompt::new(p),
        }),
        _ => Err(Error::invalid_argument("No prompt provided.")),
    }
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "gcli", &mut std::io::stdout());
}
