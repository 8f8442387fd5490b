//! 環境変数解決 Outbound ポート
//!
//! usecase / adapter はこの trait 経由でのみ環境変数にアクセスする。

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の `MapEnvResolver` など。
pub trait EnvResolver: Send + Sync {
    /// 環境変数の値を返す。未設定・空文字列は None。
    fn var(&self, key: &str) -> Option<String>;
}
