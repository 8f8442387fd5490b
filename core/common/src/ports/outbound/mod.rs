//! Outbound ポート: アプリが外界（ログ・時刻・環境変数・HTTP）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod http_transport;
pub mod log;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use http_transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
