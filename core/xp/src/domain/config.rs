//! 実行設定（型と不変条件）
//!
//! 挙動を決める値はすべてここに集め、usecase の構築時に渡す。

use crate::domain::course::SkillId;
use crate::domain::session::RewardTarget;
use crate::domain::strategy::{SessionStrategy, StrategyPreference};
use common::error::Error;
use std::str::FromStr;

pub const DEFAULT_LESSONS: u32 = 5;
pub const PATIENT_LESSONS: u32 = 20;
pub const DEFAULT_BASE_URL: &str = "https://www.duolingo.com/2017-06-30";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// イテレーション間の待ち時間の範囲（ミリ秒、`[min_ms, max_ms)`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    min_ms: u64,
    max_ms: u64,
}

impl DelayWindow {
    pub const NORMAL: DelayWindow = DelayWindow {
        min_ms: 1_000,
        max_ms: 3_000,
    };
    pub const PATIENT: DelayWindow = DelayWindow {
        min_ms: 70_000,
        max_ms: 90_000,
    };

    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, Error> {
        if min_ms >= max_ms {
            return Err(Error::invalid_argument(format!(
                "delay window must satisfy min < max (got {}..{} ms)",
                min_ms, max_ms
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// 下限を含み上限を含まない
    pub fn contains(&self, ms: u64) -> bool {
        (self.min_ms..self.max_ms).contains(&ms)
    }
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// 待ち時間と回数のプリセット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PacePreset {
    /// 1〜3 秒、5 回
    #[default]
    Normal,
    /// 70〜90 秒、20 回
    Patient,
}

impl PacePreset {
    pub fn delay(&self) -> DelayWindow {
        match self {
            PacePreset::Normal => DelayWindow::NORMAL,
            PacePreset::Patient => DelayWindow::PATIENT,
        }
    }

    pub fn lessons(&self) -> u32 {
        match self {
            PacePreset::Normal => DEFAULT_LESSONS,
            PacePreset::Patient => PATIENT_LESSONS,
        }
    }
}

impl FromStr for PacePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(PacePreset::Normal),
            "patient" => Ok(PacePreset::Patient),
            other => Err(format!("unknown pace '{}' (expected normal or patient)", other)),
        }
    }
}

/// 戦略ごとの報酬リクエスト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardTargets {
    pub practice: RewardTarget,
    pub unit_test: RewardTarget,
}

impl RewardTargets {
    pub fn for_strategy(&self, strategy: &SessionStrategy) -> RewardTarget {
        match strategy {
            SessionStrategy::GenericPractice => self.practice,
            SessionStrategy::TargetedUnitTest(_) => self.unit_test,
        }
    }
}

impl Default for RewardTargets {
    fn default() -> Self {
        Self {
            practice: RewardTarget {
                xp_promised: 50,
                happy_hour_bonus_xp: 449,
            },
            unit_test: RewardTarget {
                xp_promised: 50,
                happy_hour_bonus_xp: 0,
            },
        }
    }
}

/// API の接続先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// 1 回の実行の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// 完了させるセッション数（1 以上）
    pub lessons: u32,
    pub delay: DelayWindow,
    pub rewards: RewardTargets,
    pub strategy: StrategyPreference,
    /// 指定時はコース情報を取得せずこのスキルを使う
    pub skill_id_override: Option<SkillId>,
    /// ユニットテスト完了時に送る unitIndex
    pub unit_index: u32,
    /// 合成テレメトリ上のセッション所要時間
    pub session_duration_secs: u64,
    pub api: ApiSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lessons: DEFAULT_LESSONS,
            delay: DelayWindow::NORMAL,
            rewards: RewardTargets::default(),
            strategy: StrategyPreference::Auto,
            skill_id_override: None,
            unit_index: 0,
            session_duration_secs: 60,
            api: ApiSettings::default(),
        }
    }
}

impl RunConfig {
    /// プリセットを適用した既定値
    pub fn with_pace(pace: PacePreset) -> Self {
        Self {
            lessons: pace.lessons(),
            delay: pace.delay(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.lessons == 0 {
            return Err(Error::invalid_argument("lessons must be a positive integer"));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::invalid_argument("API base URL must not be empty"));
        }
        DelayWindow::new(self.delay.min_ms, self.delay.max_ms)?;
        Ok(())
    }
}
