//! 待ち時間の乱数を選ぶ Outbound ポート

use crate::domain::DelayWindow;

/// 範囲内の待ち時間（ミリ秒）を一様に選ぶ能力
pub trait JitterSource: Send + Sync {
    /// 戻り値は `window.min_ms() <= ms < window.max_ms()`
    fn pick_ms(&self, window: &DelayWindow) -> u64;
}
