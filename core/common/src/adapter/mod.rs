//! アダプター（Outbound ポートの標準実装）
//!
//! usecase はポートの trait 経由でのみログ・時刻・環境変数・HTTP に触れる。
//! ここには標準実装（Std* / Reqwest*）とテスト用の軽量実装を置く。

pub mod console_log;
pub mod file_json_log;
pub mod reqwest_transport;
pub mod std_clock;
pub mod std_env_resolver;

pub use console_log::{ConsoleLog, FanoutLog};
pub use file_json_log::{FileJsonLog, MemoryLog};
pub use reqwest_transport::ReqwestTransport;
pub use std_clock::{FixedClock, StdClock};
pub use std_env_resolver::{MapEnvResolver, StdEnvResolver};
