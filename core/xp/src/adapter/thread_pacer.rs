//! スレッドを止めて待機する Pacer 実装

use crate::ports::outbound::Pacer;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
