//! Outbound ポート: アプリが外界（認証情報・学習者情報・セッション API・待機・乱数）を使うための trait

pub mod credentials_provider;
pub mod jitter;
pub mod learner_profile;
pub mod pacer;
pub mod session_api;

pub use credentials_provider::CredentialsProvider;
pub use jitter::JitterSource;
pub use learner_profile::LearnerProfile;
pub use pacer::Pacer;
pub use session_api::SessionApi;
