//! 実行時エラーの分類
//!
//! 初期化エラーだけが実行全体を止める。作成・完了のエラーはそのイテレーション内で閉じる。

use common::error::Error;

/// ループ開始前の失敗（致命的）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("User ID and token must be specified (missing: {})", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
    #[error("Failed to resolve user languages: {0}")]
    Languages(Error),
    #[error("User languages are incomplete: from='{from}' learning='{learning}'")]
    IncompleteLanguages { from: String, learning: String },
    #[error("Failed to fetch course info: {0}")]
    Course(Error),
}

impl From<InitializationError> for Error {
    fn from(e: InitializationError) -> Self {
        Error::system(format!("Initialization failed: {}", e))
    }
}

/// セッション作成の失敗
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionCreationError {
    #[error("Failed to create session. Status: {status}. Response: {body}")]
    Rejected { status: u16, body: String },
    #[error("Failed to create session: {0}")]
    Transport(Error),
    #[error("Failed to build session request: {0}")]
    Encode(Error),
    #[error("Failed to read created session: {0}")]
    Decode(Error),
}

/// セッション完了（報酬受け取り）の失敗。呼び出し側では「報酬なし」として扱う。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewardRejectionError {
    #[error("Error receiving rewards: Status: {status}. Response: {body}")]
    Rejected { status: u16, body: String },
    #[error("Error receiving rewards: {0}")]
    Transport(Error),
    #[error("Failed to build completion payload: {0}")]
    Encode(Error),
    #[error("Failed to read reward response: {0}")]
    Decode(Error),
}
