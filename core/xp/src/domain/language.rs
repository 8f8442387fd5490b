//! 学習言語ペア

use serde::{Deserialize, Serialize};

/// ユーザーの母語と学習言語（実行中は不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePair {
    pub from_language: String,
    pub learning_language: String,
}

impl LanguagePair {
    pub fn new(from_language: impl Into<String>, learning_language: impl Into<String>) -> Self {
        Self {
            from_language: from_language.into(),
            learning_language: learning_language.into(),
        }
    }

    /// 両方の言語コードが空でなければ true
    pub fn is_resolved(&self) -> bool {
        !self.from_language.trim().is_empty() && !self.learning_language.trim().is_empty()
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from_language, self.learning_language)
    }
}
