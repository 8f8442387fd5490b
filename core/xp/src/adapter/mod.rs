//! アダプター（Outbound ポートの実装）
//!
//! usecase はポートの trait 経由でのみ API・環境変数・待機・乱数に触れる。

pub mod api_client;
pub mod config_file;
pub mod env_credentials;
pub mod http_learner_profile;
pub mod http_session_api;
pub mod rand_jitter;
pub mod thread_pacer;

#[cfg(test)]
pub mod stubs;

pub use api_client::ApiClient;
pub use config_file::{load_config_file, ConfigFile};
pub use env_credentials::EnvCredentials;
pub use http_learner_profile::HttpLearnerProfile;
pub use http_session_api::HttpSessionApi;
pub use rand_jitter::RandJitter;
pub use thread_pacer::ThreadPacer;
