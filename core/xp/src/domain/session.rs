//! セッションの作成・完了で送受信するレコード
//!
//! 完了時は作成レスポンスの全フィールドをそのまま送り返し、その上に合成フィールドを重ねる。
//! 同じキーがあれば合成フィールドが勝つ。

use crate::domain::course::SkillId;
use crate::domain::language::LanguagePair;
use crate::domain::strategy::SessionStrategy;
use common::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `POST /sessions` の本文
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub challenge_types: Vec<String>,
    pub from_language: String,
    pub learning_language: String,
    #[serde(rename = "type")]
    pub session_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_ids: Option<Vec<SkillId>>,
}

impl SessionRequest {
    pub fn for_strategy(strategy: &SessionStrategy, languages: &LanguagePair) -> Self {
        Self {
            challenge_types: Vec::new(),
            from_language: languages.from_language.clone(),
            learning_language: languages.learning_language.clone(),
            session_type: strategy.wire_type(),
            skill_ids: strategy.skill_id().map(|id| vec![id.clone()]),
        }
    }
}

/// セッション ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for SessionId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// サーバーが作成したセッション。`id` 以外は解釈せず保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedSession {
    pub id: SessionId,
    #[serde(flatten)]
    pub echoed: Map<String, Value>,
}

/// 完了時に付ける合成テレメトリ
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticTelemetry {
    /// 開始時刻（epoch 秒、小数）
    pub start_time: f64,
    /// 終了時刻（epoch 秒、小数）
    pub end_time: f64,
    pub hearts_left: u32,
    pub has_boost: bool,
    pub beginner: bool,
    pub failed: bool,
    pub enable_bonus_points: bool,
    pub challenge_time_taken_cutoff: u32,
    pub max_in_lesson_streak: u32,
    pub should_learn_things: bool,
    pub show_best_translation_in_grading_ribbon: bool,
    pub progress_updates: Vec<Value>,
    pub session_experiment_record: Vec<Value>,
    pub session_start_experiments: Vec<Value>,
}

impl SyntheticTelemetry {
    /// `now_ms` に終わり、`duration_secs` 秒かかったことにする
    pub fn ending_at(now_ms: u64, duration_secs: u64) -> Self {
        let end_ms = now_ms;
        let start_ms = now_ms.saturating_sub(duration_secs.saturating_mul(1000));
        Self {
            start_time: start_ms as f64 / 1000.0,
            end_time: end_ms as f64 / 1000.0,
            hearts_left: 0,
            has_boost: true,
            beginner: false,
            failed: false,
            enable_bonus_points: true,
            challenge_time_taken_cutoff: 6000,
            max_in_lesson_streak: 15,
            should_learn_things: true,
            show_best_translation_in_grading_ribbon: true,
            progress_updates: Vec::new(),
            session_experiment_record: Vec::new(),
            session_start_experiments: Vec::new(),
        }
    }
}

/// 報酬リクエスト（サーバーが従う保証はない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTarget {
    pub xp_promised: u32,
    pub happy_hour_bonus_xp: u32,
}

/// ユニットテストの完了時に付ける位置情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLevelSpecifics {
    pub unit_index: u32,
}

/// `PUT /sessions/{id}` の本文
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSubmission {
    pub session: CreatedSession,
    pub telemetry: SyntheticTelemetry,
    pub reward: RewardTarget,
    pub path_level_specifics: Option<PathLevelSpecifics>,
}

impl CompletionSubmission {
    pub fn new(
        session: CreatedSession,
        telemetry: SyntheticTelemetry,
        reward: RewardTarget,
        path_level_specifics: Option<PathLevelSpecifics>,
    ) -> Self {
        Self {
            session,
            telemetry,
            reward,
            path_level_specifics,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session.id
    }

    /// 送信用 JSON。作成レスポンスの上に合成フィールドを上書きで重ねる。
    pub fn to_body(&self) -> Result<Value, Error> {
        let mut body = self.session.echoed.clone();
        body.insert("id".to_string(), Value::String(self.session.id.to_string()));
        overlay(&mut body, serde_json::to_value(&self.telemetry)?);
        overlay(&mut body, serde_json::to_value(self.reward)?);
        if let Some(specifics) = self.path_level_specifics {
            body.insert(
                "pathLevelSpecifics".to_string(),
                serde_json::to_value(specifics)?,
            );
        }
        Ok(Value::Object(body))
    }
}

fn overlay(base: &mut Map<String, Value>, top: Value) {
    if let Value::Object(fields) = top {
        base.extend(fields);
    }
}

/// 完了レスポンス（成功時のみ）。付与 XP はサーバーが決める。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardResult {
    #[serde(default)]
    pub xp_gain: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn created() -> CreatedSession {
        serde_json::from_value(json!({
            "id": "sess-1",
            "challenges": [{"type": "translate"}],
            "failed": true,
            "heartsLeft": 3
        }))
        .unwrap()
    }

    #[test]
    fn test_practice_request_shape() {
        let req = SessionRequest::for_strategy(
            &SessionStrategy::GenericPractice,
            &LanguagePair::new("en", "es"),
        );
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "challengeTypes": [],
                "fromLanguage": "en",
                "learningLanguage": "es",
                "type": "GLOBAL_PRACTICE"
            })
        );
    }

    #[test]
    fn test_unit_test_request_carries_one_skill() {
        let req = SessionRequest::for_strategy(
            &SessionStrategy::TargetedUnitTest(SkillId::new("skill-9")),
            &LanguagePair::new("en", "de"),
        );
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["type"], "UNIT_TEST");
        assert_eq!(v["skillIds"], json!(["skill-9"]));
    }

    #[test]
    fn test_created_session_keeps_unknown_fields() {
        let s = created();
        assert_eq!(&*s.id, "sess-1");
        assert!(s.echoed.contains_key("challenges"));
        assert!(!s.echoed.contains_key("id"));
    }

    #[test]
    fn test_submission_overlays_synthetic_fields() {
        let sub = CompletionSubmission::new(
            created(),
            SyntheticTelemetry::ending_at(1_700_000_060_000, 60),
            RewardTarget {
                xp_promised: 50,
                happy_hour_bonus_xp: 449,
            },
            None,
        );
        let body = sub.to_body().unwrap();
        assert_eq!(body["id"], "sess-1");
        assert_eq!(body["challenges"], json!([{"type": "translate"}]));
        assert_eq!(body["failed"], false);
        assert_eq!(body["heartsLeft"], 0);
        assert_eq!(body["hasBoost"], true);
        assert_eq!(body["xpPromised"], 50);
        assert_eq!(body["happyHourBonusXp"], 449);
        assert_eq!(body["startTime"], json!(1_700_000_000.0));
        assert_eq!(body["endTime"], json!(1_700_000_060.0));
        assert!(body.get("pathLevelSpecifics").is_none());
    }

    #[test]
    fn test_submission_adds_unit_marker_for_unit_test() {
        let sub = CompletionSubmission::new(
            created(),
            SyntheticTelemetry::ending_at(10_000, 60),
            RewardTarget {
                xp_promised: 50,
                happy_hour_bonus_xp: 0,
            },
            Some(PathLevelSpecifics { unit_index: 2 }),
        );
        let body = sub.to_body().unwrap();
        assert_eq!(body["pathLevelSpecifics"], json!({"unitIndex": 2}));
        // 開始時刻は 0 未満にならない
        assert_eq!(body["startTime"], json!(0.0));
    }

    #[test]
    fn test_reward_result_without_xp() {
        let r: RewardResult = serde_json::from_str("{}").unwrap();
        assert_eq!(r.xp_gain, None);
        let r: RewardResult = serde_json::from_str(r#"{"xpGain": 40, "other": 1}"#).unwrap();
        assert_eq!(r.xp_gain, Some(40));
    }
}
