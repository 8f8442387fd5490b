//! 認証情報のドメイン型

use std::fmt;

/// API トークン（Debug / Display では値を出さない）
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// ユーザー ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for UserId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 実行に必要な認証情報の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: AuthToken,
    pub user_id: UserId,
}

impl Credentials {
    /// 生の値から作る。引用符と前後の空白を除いた結果が空なら None。
    pub fn from_raw(token: Option<&str>, user_id: Option<&str>) -> (Option<AuthToken>, Option<UserId>) {
        let token = token.map(strip_quotes).filter(|s| !s.is_empty()).map(AuthToken::new);
        let user_id = user_id.map(strip_quotes).filter(|s| !s.is_empty()).map(UserId::new);
        (token, user_id)
    }
}

/// 前後の空白と、値を囲む ' / " を取り除く（.env に引用符付きで書かれた値への対策）
pub fn strip_quotes(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("'abc'"), "abc");
        assert_eq!(strip_quotes("  abc  "), "abc");
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes("a\"b"), "a\"b");
    }

    #[test]
    fn test_from_raw_rejects_empty_after_stripping() {
        let (token, user) = Credentials::from_raw(Some("\"\""), Some("'42'"));
        assert!(token.is_none());
        assert_eq!(user.as_deref(), Some("42"));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let t = AuthToken::new("secret-value");
        assert_eq!(format!("{:?}", t), "AuthToken(***)");
        assert_eq!(t.expose(), "secret-value");
    }
}
