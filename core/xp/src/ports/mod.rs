//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出す入口
//! - outbound: アプリが外界（学習プラットフォーム API・待機・乱数）に依頼するための trait

pub mod inbound;
pub mod outbound;
