//! HTTP によるセッション API 実装
//!
//! 非 2xx は通信エラーと区別し、ステータスと本文を持つ Rejected に分類する。

use crate::adapter::api_client::ApiClient;
use crate::domain::{
    CompletionSubmission, CreatedSession, Credentials, RewardRejectionError, RewardResult,
    SessionCreationError, SessionRequest,
};
use crate::ports::outbound::SessionApi;
use common::error::Error;
use common::ports::outbound::HttpMethod;
use std::sync::Arc;

/// `POST /sessions` と `PUT /sessions/{id}` を呼ぶ SessionApi 実装
pub struct HttpSessionApi {
    client: Arc<ApiClient>,
}

impl HttpSessionApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl SessionApi for HttpSessionApi {
    fn create_session(
        &self,
        credentials: &Credentials,
        request: &SessionRequest,
    ) -> Result<CreatedSession, SessionCreationError> {
        let body = serde_json::to_value(request)
            .map_err(|e| SessionCreationError::Encode(Error::from(e)))?;
        let response = self
            .client
            .send_json(credentials, HttpMethod::Post, "sessions", &body)
            .map_err(SessionCreationError::Transport)?;
        if !response.is_success() {
            return Err(SessionCreationError::Rejected {
                status: response.status,
                body: response.body,
            });
        }
        response.json::<CreatedSession>().map_err(SessionCreationError::Decode)
    }

    fn complete_session(
        &self,
        credentials: &Credentials,
        submission: &CompletionSubmission,
    ) -> Result<Option<RewardResult>, RewardRejectionError> {
        let body = submission.to_body().map_err(RewardRejectionError::Encode)?;
        let path = format!("sessions/{}", urlencoding::encode(submission.session_id()));
        let response = self
            .client
            .send_json(credentials, HttpMethod::Put, &path, &body)
            .map_err(RewardRejectionError::Transport)?;
        if !response.is_success() {
            return Err(RewardRejectionError::Rejected {
                status: response.status,
                body: response.body,
            });
        }
        if response.text().trim().is_empty() {
            return Ok(None);
        }
        response
            .json::<RewardResult>()
            .map(Some)
            .map_err(RewardRejectionError::Decode)
    }
}
