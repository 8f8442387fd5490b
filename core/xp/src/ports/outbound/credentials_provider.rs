//! 認証情報を取得する Outbound ポート

use crate::domain::{Credentials, InitializationError};

/// token と userId を供給する能力
///
/// どちらかが欠けていれば `InitializationError::MissingCredentials`。ネットワークには触れない。
pub trait CredentialsProvider: Send + Sync {
    fn load(&self) -> Result<Credentials, InitializationError>;
}
