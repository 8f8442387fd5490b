//! イテレーション間で待機する Outbound ポート

use std::time::Duration;

/// 指定時間だけ処理を止める能力（テストでは記録するだけの実装に差し替える）
pub trait Pacer: Send + Sync {
    fn pause(&self, duration: Duration);
}
