//! セッション作成 → 完了を繰り返すユースケース
//!
//! 二段構成: `prepare` で認証情報・言語ペア・戦略を一度だけ決め、
//! その後のループは戦略をパラメータとして同じ本体を回す。
//! 各イテレーションの失敗はそのイテレーション内で閉じ、必ず待機してから次へ進む。

use crate::domain::{
    extract_skill_id, resolve_strategy, CompletionSubmission, CreatedSession, Credentials,
    InitializationError, IterationOutcome, LanguagePair, PathLevelSpecifics,
    RewardRejectionError, RunConfig, RunSummary, SessionCreationError, SessionRequest,
    SessionStrategy, SkillId, StrategyPreference, SyntheticTelemetry,
};
use crate::ports::outbound::{CredentialsProvider, JitterSource, LearnerProfile, Pacer, SessionApi};
use crate::usecase::pacing::Pacing;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// 依存（usecase が定義を所有し、wiring は組み立てるだけ）
pub struct FarmDeps {
    pub credentials: Arc<dyn CredentialsProvider>,
    pub profile: Arc<dyn LearnerProfile>,
    pub sessions: Arc<dyn SessionApi>,
    pub pacer: Arc<dyn Pacer>,
    pub jitter: Arc<dyn JitterSource>,
    pub clock: Arc<dyn Clock>,
    pub log: Arc<dyn Log>,
}

/// 実行開始時に一度だけ決まる値
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub credentials: Credentials,
    pub languages: LanguagePair,
    pub strategy: SessionStrategy,
}

pub struct XpFarmUseCase {
    deps: FarmDeps,
    config: RunConfig,
    pacing: Pacing,
}

impl XpFarmUseCase {
    pub fn new(deps: FarmDeps, config: RunConfig) -> Self {
        let pacing = Pacing::new(Arc::clone(&deps.pacer), Arc::clone(&deps.jitter), config.delay);
        Self {
            deps,
            config,
            pacing,
        }
    }

    fn emit(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record.layer("usecase"));
    }

    /// 初期化してから `lessons` 回繰り返す。初期化に失敗した場合のみ Err。
    pub fn run(&self) -> Result<RunSummary, InitializationError> {
        let plan = match self.prepare() {
            Ok(plan) => plan,
            Err(e) => {
                self.emit(
                    LogRecord::new(LogLevel::Error, format!("Initialization failed: {}", e))
                        .kind("init"),
                );
                return Err(e);
            }
        };

        let total = self.config.lessons;
        let mut summary = RunSummary::default();
        for index in 1..=total {
            self.emit(
                LogRecord::new(LogLevel::Info, format!("Running: {}/{}", index, total))
                    .kind("iteration")
                    .field("iteration", index),
            );
            let outcome = self.run_iteration(&plan, index);
            summary.record(&outcome);

            // 最後のイテレーションの後も待つ
            let delay = self.pacing.next_delay();
            self.emit(
                LogRecord::new(
                    LogLevel::Info,
                    format!(
                        "Waiting for {:.3} seconds before next lesson...",
                        delay.as_secs_f64()
                    ),
                )
                .kind("pacing")
                .field("delay_ms", delay.as_millis() as u64),
            );
            self.pacing.wait(delay);
        }

        self.emit(
            LogRecord::new(
                LogLevel::Info,
                format!(
                    "Finished {} lessons: {} rewarded, {} rejected, {} failed to start",
                    summary.total(),
                    summary.rewarded,
                    summary.reward_rejected,
                    summary.creation_failed
                ),
            )
            .kind("lifecycle"),
        );
        Ok(summary)
    }

    /// 認証情報 → 言語ペア → スキル ID → 戦略の順に解決する。ネットワークに触れる前に認証情報を検査する。
    pub fn prepare(&self) -> Result<RunPlan, InitializationError> {
        let credentials = self.deps.credentials.load()?;

        let languages = self
            .deps
            .profile
            .user_languages(&credentials)
            .map_err(InitializationError::Languages)?;
        if !languages.is_resolved() {
            return Err(InitializationError::IncompleteLanguages {
                from: languages.from_language,
                learning: languages.learning_language,
            });
        }
        self.emit(
            LogRecord::new(LogLevel::Info, format!("Fetched user languages: {}", languages))
                .kind("init")
                .field("fromLanguage", languages.from_language.as_str())
                .field("learningLanguage", languages.learning_language.as_str()),
        );

        let skill_id = self.resolve_skill_id(&credentials)?;
        let strategy = resolve_strategy(self.config.strategy, skill_id);
        if self.config.strategy == StrategyPreference::UnitTest
            && strategy == SessionStrategy::GenericPractice
        {
            self.emit(
                LogRecord::new(
                    LogLevel::Warn,
                    "No skill id found for a unit test; falling back to generic practice",
                )
                .kind("init"),
            );
        }
        self.emit(
            LogRecord::new(LogLevel::Info, format!("Session strategy: {}", strategy))
                .kind("init")
                .field("type", strategy.wire_type()),
        );

        Ok(RunPlan {
            credentials,
            languages,
            strategy,
        })
    }

    fn resolve_skill_id(&self, credentials: &Credentials) -> Result<Option<SkillId>, InitializationError> {
        if !self.config.strategy.needs_course() {
            return Ok(None);
        }
        if let Some(id) = &self.config.skill_id_override {
            self.emit(
                LogRecord::new(LogLevel::Debug, format!("Using configured skill id {}", id))
                    .kind("init"),
            );
            return Ok(Some(id.clone()));
        }
        let tree = self
            .deps
            .profile
            .course_tree(credentials)
            .map_err(InitializationError::Course)?;
        let skill_id = extract_skill_id(tree.as_ref());
        match &skill_id {
            Some(id) => self.emit(
                LogRecord::new(LogLevel::Debug, format!("Extracted skill id {}", id)).kind("init"),
            ),
            None => self.emit(
                LogRecord::new(LogLevel::Info, "No skill id found in the current course").kind("init"),
            ),
        }
        Ok(skill_id)
    }

    /// 1 イテレーション: 作成 → 完了 → 報告。失敗は記録して終端状態を返す（再試行しない）。
    pub fn run_iteration(&self, plan: &RunPlan, index: u32) -> IterationOutcome {
        let request = SessionRequest::for_strategy(&plan.strategy, &plan.languages);
        let created = match self.deps.sessions.create_session(&plan.credentials, &request) {
            Ok(created) => created,
            Err(e) => {
                self.log_creation_error(index, &e);
                return IterationOutcome::CreationFailed;
            }
        };
        let session_id = created.id.clone();
        self.emit(
            LogRecord::new(LogLevel::Info, format!("Created practice session: {}", session_id))
                .kind("iteration")
                .field("session_id", session_id.to_string()),
        );

        let submission = self.build_submission(plan, created);
        match self.deps.sessions.complete_session(&plan.credentials, &submission) {
            Ok(Some(reward)) => {
                let message = match reward.xp_gain {
                    Some(xp) => format!("Submitted session {}: earned {} XP", session_id, xp),
                    None => format!("Submitted session {}: XP amount not reported", session_id),
                };
                let mut record = LogRecord::new(LogLevel::Info, message).kind("iteration");
                if let Some(xp) = reward.xp_gain {
                    record = record.field("xp_gain", xp);
                }
                self.emit(record);
                IterationOutcome::Rewarded {
                    xp_gain: reward.xp_gain,
                }
            }
            Ok(None) => {
                self.emit(
                    LogRecord::new(
                        LogLevel::Info,
                        format!("Submitted session {}: XP amount not reported", session_id),
                    )
                    .kind("iteration"),
                );
                IterationOutcome::Rewarded { xp_gain: None }
            }
            Err(e) => {
                self.log_rejection(index, &e);
                IterationOutcome::RewardRejected
            }
        }
    }

    /// 作成レスポンスに合成テレメトリと戦略ごとの報酬リクエストを重ねる
    pub fn build_submission(&self, plan: &RunPlan, created: CreatedSession) -> CompletionSubmission {
        let telemetry =
            SyntheticTelemetry::ending_at(self.deps.clock.now_ms(), self.config.session_duration_secs);
        let reward = self.config.rewards.for_strategy(&plan.strategy);
        let specifics = match plan.strategy {
            SessionStrategy::TargetedUnitTest(_) => Some(PathLevelSpecifics {
                unit_index: self.config.unit_index,
            }),
            SessionStrategy::GenericPractice => None,
        };
        CompletionSubmission::new(created, telemetry, reward, specifics)
    }

    fn log_creation_error(&self, index: u32, error: &SessionCreationError) {
        let mut record = LogRecord::new(
            LogLevel::Error,
            format!("Error in lesson {}/{}: {}", index, self.config.lessons, error),
        )
        .kind("error")
        .field("stage", "create");
        if let SessionCreationError::Rejected { status, .. } = error {
            record = record.field("status", *status);
        }
        self.emit(record);
    }

    fn log_rejection(&self, index: u32, error: &RewardRejectionError) {
        let mut record = LogRecord::new(
            LogLevel::Error,
            format!("Error in lesson {}/{}: {}", index, self.config.lessons, error),
        )
        .kind("error")
        .field("stage", "complete");
        if let RewardRejectionError::Rejected { status, .. } = error {
            record = record.field("status", *status);
        }
        self.emit(record);
    }
}
