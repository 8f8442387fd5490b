use crate::domain::{PacePreset, StrategyPreference};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: debug レベルのログもコンソールに出す
    pub verbose: bool,
    /// --dry-run: 有効な設定を表示して終了（API には触れない）
    pub dry_run: bool,
    /// -n / --lessons: 完了させるセッション数
    pub lessons: Option<u32>,
    /// --pace: 待ち時間と回数のプリセット
    pub pace: Option<PacePreset>,
    pub min_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub strategy: Option<StrategyPreference>,
    /// --skill-id: コース情報を取得せずこのスキルでユニットテストする
    pub skill_id: Option<String>,
    pub unit_index: Option<u32>,
    pub base_url: Option<String>,
    /// --config: JSON 設定ファイル
    pub config_path: Option<PathBuf>,
    /// --log-file: JSONL ログの追記先
    pub log_file: Option<PathBuf>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new("xp")
        .about("Create and complete practice sessions in a loop")
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
                .help("Also print debug logs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Print the effective configuration and exit without calling the API")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("lessons")
                .short('n')
                .long("lessons")
                .value_name("count")
                .help("Number of sessions to complete (default 5, or 20 with --pace patient)")
                .value_parser(value_parser!(u32).range(1..))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("pace")
                .long("pace")
                .value_name("preset")
                .help("Delay preset: normal (1-3 s) or patient (70-90 s)")
                .value_parser(|s: &str| s.parse::<PacePreset>())
                .num_args(1),
        )
        .arg(
            clap::Arg::new("min-delay-ms")
                .long("min-delay-ms")
                .value_name("ms")
                .help("Lower bound of the delay between sessions (inclusive)")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("max-delay-ms")
                .long("max-delay-ms")
                .value_name("ms")
                .help("Upper bound of the delay between sessions (exclusive)")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("strategy")
                .long("strategy")
                .value_name("strategy")
                .help("auto, practice or unit-test")
                .value_parser(|s: &str| s.parse::<StrategyPreference>())
                .num_args(1),
        )
        .arg(
            clap::Arg::new("skill-id")
                .long("skill-id")
                .value_name("id")
                .help("Use this skill for unit tests instead of looking it up")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("unit-index")
                .long("unit-index")
                .value_name("index")
                .help("Unit index sent when completing a unit test")
                .value_parser(value_parser!(u32))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("API base URL")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("config")
                .long("config")
                .value_name("path")
                .help("JSON config file (also XP_CONFIG)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("path")
                .help("Append structured JSONL logs to this file")
                .value_parser(value_parser!(PathBuf))
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
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        dry_run: matches.get_flag("dry-run"),
        lessons: matches.get_one::<u32>("lessons").copied(),
        pace: matches.get_one::<PacePreset>("pace").copied(),
        min_delay_ms: matches.get_one::<u64>("min-delay-ms").copied(),
        max_delay_ms: matches.get_one::<u64>("max-delay-ms").copied(),
        strategy: matches.get_one::<StrategyPreference>("strategy").copied(),
        skill_id: matches.get_one::<String>("skill-id").cloned(),
        unit_index: matches.get_one::<u32>("unit-index").copied(),
        base_url: matches.get_one::<String>("base-url").cloned(),
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        log_file: matches.get_one::<PathBuf>("log-file").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "xp", &mut std::io::stdout());
}
