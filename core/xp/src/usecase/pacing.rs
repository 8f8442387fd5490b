//! イテレーション間の待機
//!
//! 毎回乱数を引き直し、Pacer に渡す。

use crate::domain::DelayWindow;
use crate::ports::outbound::{JitterSource, Pacer};
use std::sync::Arc;
use std::time::Duration;

pub struct Pacing {
    pacer: Arc<dyn Pacer>,
    jitter: Arc<dyn JitterSource>,
    window: DelayWindow,
}

impl Pacing {
    pub fn new(pacer: Arc<dyn Pacer>, jitter: Arc<dyn JitterSource>, window: DelayWindow) -> Self {
        Self {
            pacer,
            jitter,
            window,
        }
    }

    /// 次の待ち時間を選ぶ（範囲外の値は範囲内に丸める）
    pub fn next_delay(&self) -> Duration {
        let ms = self
            .jitter
            .pick_ms(&self.window)
            .clamp(self.window.min_ms(), self.window.max_ms() - 1);
        Duration::from_millis(ms)
    }

    pub fn wait(&self, delay: Duration) {
        self.pacer.pause(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::stubs::RecordingPacer;

    struct Fixed(u64);
    impl JitterSource for Fixed {
        fn pick_ms(&self, _window: &DelayWindow) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_out_of_range_jitter_is_clamped() {
        let pacer = Arc::new(RecordingPacer::new());
        let high = Pacing::new(pacer.clone(), Arc::new(Fixed(10_000)), DelayWindow::NORMAL);
        assert_eq!(high.next_delay(), Duration::from_millis(2_999));
        let low = Pacing::new(pacer.clone(), Arc::new(Fixed(0)), DelayWindow::NORMAL);
        assert_eq!(low.next_delay(), Duration::from_millis(1_000));
    }

    #[test]
    fn test_wait_delegates_to_pacer() {
        let pacer = Arc::new(RecordingPacer::new());
        let pacing = Pacing::new(pacer.clone(), Arc::new(Fixed(1_500)), DelayWindow::NORMAL);
        let d = pacing.next_delay();
        pacing.wait(d);
        assert_eq!(pacer.pauses(), vec![Duration::from_millis(1_500)]);
    }
}
