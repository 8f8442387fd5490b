//! JSON 設定ファイルの読み込み（adapter 層）
//!
//! すべてのキーは省略可能。指定されたキーだけ RunConfig を上書きする。

use crate::domain::{DelayWindow, RewardTarget, RunConfig, SkillId, StrategyPreference};
use anyhow::Context;
use common::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RewardsFile {
    pub practice: Option<RewardTarget>,
    pub unit_test: Option<RewardTarget>,
}

/// 設定ファイルの内容
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub lessons: Option<u32>,
    pub min_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub strategy: Option<StrategyPreference>,
    pub skill_id: Option<String>,
    pub unit_index: Option<u32>,
    pub session_duration_secs: Option<u64>,
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    #[serde(default)]
    pub rewards: RewardsFile,
}

/// ファイルを読み、JSON として解析する
pub fn load_config_file(path: &Path) -> anyhow::Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let parsed = serde_json::from_str(&content)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(parsed)
}

impl ConfigFile {
    /// 指定されたキーだけ上書きする
    pub fn apply_to(&self, config: &mut RunConfig) -> Result<(), Error> {
        if let Some(lessons) = self.lessons {
            config.lessons = lessons;
        }
        if self.min_delay_ms.is_some() || self.max_delay_ms.is_some() {
            config.delay = DelayWindow::new(
                self.min_delay_ms.unwrap_or(config.delay.min_ms()),
                self.max_delay_ms.unwrap_or(config.delay.max_ms()),
            )?;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(skill_id) = self.skill_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            config.skill_id_override = Some(SkillId::new(skill_id));
        }
        if let Some(unit_index) = self.unit_index {
            config.unit_index = unit_index;
        }
        if let Some(secs) = self.session_duration_secs {
            config.session_duration_secs = secs;
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            config.api.user_agent = user_agent.clone();
        }
        if let Some(practice) = self.rewards.practice {
            config.rewards.practice = practice;
        }
        if let Some(unit_test) = self.rewards.unit_test {
            config.rewards.unit_test = unit_test;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_and_apply() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("xp.json");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{
                "lessons": 12,
                "maxDelayMs": 5000,
                "strategy": "practice",
                "skillId": " fixed ",
                "rewards": {{"unitTest": {{"xpPromised": 100, "happyHourBonusXp": 10}}}}
            }}"#
        )
        .unwrap();

        let file = load_config_file(&path).unwrap();
        let mut config = RunConfig::default();
        file.apply_to(&mut config).unwrap();
        assert_eq!(config.lessons, 12);
        assert_eq!(config.delay.min_ms(), 1_000);
        assert_eq!(config.delay.max_ms(), 5_000);
        assert_eq!(config.strategy, StrategyPreference::Practice);
        assert_eq!(config.skill_id_override, Some(SkillId::new("fixed")));
        assert_eq!(config.rewards.unit_test.xp_promised, 100);
        assert_eq!(config.rewards.practice.happy_hour_bonus_xp, 449);
    }

    #[test]
    fn test_empty_object_changes_nothing() {
        let file: ConfigFile = serde_json::from_str("{}").unwrap();
        let mut config = RunConfig::default();
        file.apply_to(&mut config).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_inverted_delay_is_rejected() {
        let file: ConfigFile = serde_json::from_str(r#"{"minDelayMs": 4000}"#).unwrap();
        let mut config = RunConfig::default();
        let err = file.apply_to(&mut config).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"lesons": 3}"#).unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid config file"));
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_config_file(Path::new("/nonexistent/xp.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
