//! CLI: 引数解析と Command への変換

pub mod args;
pub mod run_config;

pub use args::{parse_args, print_completion, Config, ParseOutcome};
pub use run_config::{build_run_config, ResolvedConfig};

use crate::domain::XpCommand;
use common::error::Error;
use common::ports::outbound::EnvResolver;

/// Config を XpCommand に変換する。実行系コマンドでは RunConfig を組み立てる。
pub fn config_to_command(config: &Config, env: &dyn EnvResolver) -> Result<(XpCommand, Vec<String>), Error> {
    if config.help {
        return Ok((XpCommand::Help, Vec::new()));
    }
    let ResolvedConfig { run, notes } = build_run_config(config, env)?;
    let cmd = if config.dry_run {
        XpCommand::DryRun(run)
    } else {
        XpCommand::Run(run)
    };
    Ok((cmd, notes))
}
