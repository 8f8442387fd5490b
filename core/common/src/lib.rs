//! xp 共通ライブラリ
//!
//! エラー型と、外界（ログ・時刻・環境変数・HTTP）に触れるための Outbound ポートおよび標準アダプターを提供します。

/// エラーハンドリング
pub mod error;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
