//! CLI 引数・環境変数・設定ファイルから RunConfig を組み立てる
//!
//! 優先順位（低 → 高）: 既定値 → --pace プリセット → 設定ファイル → `lessonsToComplete` → CLI 引数

use crate::adapter::load_config_file;
use crate::cli::args::Config;
use crate::domain::{DelayWindow, RunConfig, SkillId};
use common::error::Error;
use common::ports::outbound::EnvResolver;
use std::path::PathBuf;

pub const LESSONS_ENV: &str = "lessonsToComplete";
pub const CONFIG_ENV: &str = "XP_CONFIG";

/// 組み立て結果と、無視した値についての注意書き
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub run: RunConfig,
    pub notes: Vec<String>,
}

pub fn build_run_config(cli: &Config, env: &dyn EnvResolver) -> Result<ResolvedConfig, Error> {
    let mut notes = Vec::new();
    let mut run = RunConfig::with_pace(cli.pace.unwrap_or_default());

    let config_path = cli
        .config_path
        .clone()
        .or_else(|| env.var(CONFIG_ENV).map(PathBuf::from));
    if let Some(path) = config_path {
        let file = load_config_file(&path).map_err(|e| Error::invalid_argument(format!("{:#}", e)))?;
        file.apply_to(&mut run)?;
    }

    if let Some(raw) = env.var(LESSONS_ENV) {
        match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => run.lessons = n,
            _ => notes.push(format!(
                "Ignoring {}='{}' (expected a positive integer)",
                LESSONS_ENV, raw
            )),
        }
    }

    if let Some(lessons) = cli.lessons {
        run.lessons = lessons;
    }
    if cli.min_delay_ms.is_some() || cli.max_delay_ms.is_some() {
        run.delay = DelayWindow::new(
            cli.min_delay_ms.unwrap_or(run.delay.min_ms()),
            cli.max_delay_ms.unwrap_or(run.delay.max_ms()),
        )?;
    }
    if let Some(strategy) = cli.strategy {
        run.strategy = strategy;
    }
    if let Some(skill_id) = cli.skill_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        run.skill_id_override = Some(SkillId::new(skill_id));
    }
    if let Some(unit_index) = cli.unit_index {
        run.unit_index = unit_index;
    }
    if let Some(base_url) = &cli.base_url {
        run.api.base_url = base_url.clone();
    }

    run.validate()?;
    Ok(ResolvedConfig { run, notes })
}
