//! 環境変数から認証情報を読む CredentialsProvider 実装
//!
//! `token` / `userId`（別名 `XP_TOKEN` / `XP_USER_ID`）。値を囲む引用符は取り除く。

use crate::domain::credentials::strip_quotes;
use crate::domain::{Credentials, InitializationError};
use crate::ports::outbound::CredentialsProvider;
use common::ports::outbound::EnvResolver;
use std::sync::Arc;

const TOKEN_KEYS: &[&str] = &["token", "XP_TOKEN"];
const USER_ID_KEYS: &[&str] = &["userId", "XP_USER_ID"];

pub struct EnvCredentials {
    env: Arc<dyn EnvResolver>,
}

impl EnvCredentials {
    pub fn new(env: Arc<dyn EnvResolver>) -> Self {
        Self { env }
    }

    /// 引用符を除いて空でない最初の値（`token=""` なら別名を見る）
    fn first_present(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|k| self.env.var(k))
            .map(|v| strip_quotes(&v))
            .find(|v| !v.is_empty())
    }
}

impl CredentialsProvider for EnvCredentials {
    fn load(&self) -> Result<Credentials, InitializationError> {
        let (token, user_id) = Credentials::from_raw(
            self.first_present(TOKEN_KEYS).as_deref(),
            self.first_present(USER_ID_KEYS).as_deref(),
        );
        match (token, user_id) {
            (Some(token), Some(user_id)) => Ok(Credentials { token, user_id }),
            (token, user_id) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push("token");
                }
                if user_id.is_none() {
                    missing.push("userId");
                }
                Err(InitializationError::MissingCredentials(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::MapEnvResolver;

    #[test]
    fn test_loads_and_strips_quotes() {
        let env = MapEnvResolver::new()
            .with("token", "\"abc.def\"")
            .with("userId", "'12345'");
        let creds = EnvCredentials::new(Arc::new(env)).load().unwrap();
        assert_eq!(creds.token.expose(), "abc.def");
        assert_eq!(&*creds.user_id, "12345");
    }

    #[test]
    fn test_alias_keys() {
        let env = MapEnvResolver::new()
            .with("XP_TOKEN", "t")
            .with("XP_USER_ID", "u");
        assert!(EnvCredentials::new(Arc::new(env)).load().is_ok());
    }

    #[test]
    fn test_missing_values_are_reported() {
        let env = MapEnvResolver::new().with("token", "\"\"");
        let err = EnvCredentials::new(Arc::new(env)).load().unwrap_err();
        assert_eq!(err, InitializationError::MissingCredentials(vec!["token", "userId"]));

        let env = MapEnvResolver::new().with("token", "t");
        let err = EnvCredentials::new(Arc::new(env)).load().unwrap_err();
        assert_eq!(err, InitializationError::MissingCredentials(vec!["userId"]));
    }

    #[test]
    fn test_quoted_empty_primary_key_falls_through_to_alias() {
        let env = MapEnvResolver::new()
            .with("token", "\"\"")
            .with("XP_TOKEN", "from-alias")
            .with("userId", "''")
            .with("XP_USER_ID", "77");
        let creds = EnvCredentials::new(Arc::new(env)).load().unwrap();
        assert_eq!(creds.token.expose(), "from-alias");
        assert_eq!(&*creds.user_id, "77");
    }
}
