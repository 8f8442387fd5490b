//! セッション戦略の選択
//!
//! 実行開始時に一度だけ決め、全イテレーションで同じ戦略を使う。

use crate::domain::course::SkillId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// セッションの形
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStrategy {
    /// スキル指定なしの総合練習
    GenericPractice,
    /// 指定スキルのユニットテスト
    TargetedUnitTest(SkillId),
}

impl SessionStrategy {
    /// API に送る `type` の値
    pub fn wire_type(&self) -> &'static str {
        match self {
            SessionStrategy::GenericPractice => "GLOBAL_PRACTICE",
            SessionStrategy::TargetedUnitTest(_) => "UNIT_TEST",
        }
    }

    pub fn skill_id(&self) -> Option<&SkillId> {
        match self {
            SessionStrategy::GenericPractice => None,
            SessionStrategy::TargetedUnitTest(id) => Some(id),
        }
    }
}

impl std::fmt::Display for SessionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStrategy::GenericPractice => f.write_str("generic practice"),
            SessionStrategy::TargetedUnitTest(id) => write!(f, "unit test (skill {})", id),
        }
    }
}

/// 戦略の希望（設定値）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyPreference {
    /// スキルが見つかればユニットテスト、無ければ総合練習
    #[default]
    Auto,
    /// 常に総合練習（コース情報を取得しない）
    Practice,
    /// ユニットテストを希望。スキルが無ければ警告して総合練習
    UnitTest,
}

impl StrategyPreference {
    /// コース情報の取得が必要か
    pub fn needs_course(&self) -> bool {
        !matches!(self, StrategyPreference::Practice)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyPreference::Auto => "auto",
            StrategyPreference::Practice => "practice",
            StrategyPreference::UnitTest => "unit-test",
        }
    }
}

impl FromStr for StrategyPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(StrategyPreference::Auto),
            "practice" => Ok(StrategyPreference::Practice),
            "unit-test" => Ok(StrategyPreference::UnitTest),
            other => Err(format!(
                "unknown strategy '{}' (expected auto, practice or unit-test)",
                other
            )),
        }
    }
}

/// スキル ID の有無と希望から戦略を決める（純粋関数）
pub fn resolve_strategy(preference: StrategyPreference, skill_id: Option<SkillId>) -> SessionStrategy {
    match (preference, skill_id) {
        (StrategyPreference::Practice, _) => SessionStrategy::GenericPractice,
        (_, Some(id)) => SessionStrategy::TargetedUnitTest(id),
        (_, None) => SessionStrategy::GenericPractice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_present_selects_unit_test() {
        let s = resolve_strategy(StrategyPreference::Auto, Some(SkillId::new("abc")));
        assert_eq!(s, SessionStrategy::TargetedUnitTest(SkillId::new("abc")));
        assert_eq!(s.wire_type(), "UNIT_TEST");
        assert_eq!(s.skill_id().map(|id| &**id), Some("abc"));
    }

    #[test]
    fn test_skill_absent_falls_back_to_practice() {
        for pref in [StrategyPreference::Auto, StrategyPreference::UnitTest] {
            let s = resolve_strategy(pref, None);
            assert_eq!(s, SessionStrategy::GenericPractice);
            assert_eq!(s.wire_type(), "GLOBAL_PRACTICE");
        }
    }

    #[test]
    fn test_practice_preference_ignores_skill() {
        let s = resolve_strategy(StrategyPreference::Practice, Some(SkillId::new("abc")));
        assert_eq!(s, SessionStrategy::GenericPractice);
        assert!(!StrategyPreference::Practice.needs_course());
    }

    #[test]
    fn test_selection_is_deterministic() {
        let inputs = [None, Some(SkillId::new("x"))];
        for input in inputs {
            let a = resolve_strategy(StrategyPreference::Auto, input.clone());
            let b = resolve_strategy(StrategyPreference::Auto, input.clone());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_preference_from_str() {
        assert_eq!("unit-test".parse::<StrategyPreference>(), Ok(StrategyPreference::UnitTest));
        assert_eq!("practice".parse::<StrategyPreference>(), Ok(StrategyPreference::Practice));
        assert!("safe".parse::<StrategyPreference>().is_err());
    }
}
