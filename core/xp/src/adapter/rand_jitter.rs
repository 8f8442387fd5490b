//! rand による JitterSource 実装（一様分布、下限を含み上限を含まない）

use crate::domain::DelayWindow;
use crate::ports::outbound::JitterSource;
use rand::Rng;

/// 範囲から一様に 1 つ選ぶ
pub fn pick_in_window<R: Rng + ?Sized>(rng: &mut R, window: &DelayWindow) -> u64 {
    rng.gen_range(window.min_ms()..window.max_ms())
}

/// スレッドローカル乱数を使う JitterSource
#[derive(Debug, Clone, Default)]
pub struct RandJitter;

impl JitterSource for RandJitter {
    fn pick_ms(&self, window: &DelayWindow) -> u64 {
        pick_in_window(&mut rand::thread_rng(), window)
    }
}
