//! セッションの作成・完了を行う Outbound ポート

use crate::domain::{
    CompletionSubmission, CreatedSession, Credentials, RewardRejectionError, RewardResult,
    SessionCreationError, SessionRequest,
};

/// セッション API（`POST /sessions` と `PUT /sessions/{id}`）
pub trait SessionApi: Send + Sync {
    fn create_session(
        &self,
        credentials: &Credentials,
        request: &SessionRequest,
    ) -> Result<CreatedSession, SessionCreationError>;

    /// 成功レスポンスなら `Ok(Some(_))`。非 2xx は `RewardRejectionError::Rejected`。
    fn complete_session(
        &self,
        credentials: &Credentials,
        submission: &CompletionSubmission,
    ) -> Result<Option<RewardResult>, RewardRejectionError>;
}
