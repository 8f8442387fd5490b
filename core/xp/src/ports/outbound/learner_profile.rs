//! 学習者の言語設定とコース情報を取得する Outbound ポート

use crate::domain::{CourseTree, Credentials, LanguagePair};
use common::error::Error;

/// 学習者情報の取得
pub trait LearnerProfile: Send + Sync {
    /// 母語と学習言語
    fn user_languages(&self, credentials: &Credentials) -> Result<LanguagePair, Error>;

    /// 現在のコース。ユーザーにコースが無ければ None。
    fn course_tree(&self, credentials: &Credentials) -> Result<Option<CourseTree>, Error>;
}
