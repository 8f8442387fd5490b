//! 1 イテレーションの終端状態と、実行全体の集計

/// イテレーションの終端状態
///
/// `Idle → Creating → {Created → Completing → {Rewarded | RewardRejected} | CreationFailed}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// 完了が受理された（付与 XP はレスポンス次第で不明のこともある）
    Rewarded { xp_gain: Option<i64> },
    /// 作成は成功したが完了が拒否された
    RewardRejected,
    /// 作成に失敗した（完了は試みていない）
    CreationFailed,
}

/// 終端状態ごとの件数（XP の合計は持たない）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rewarded: u32,
    pub reward_rejected: u32,
    pub creation_failed: u32,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &IterationOutcome) {
        match outcome {
            IterationOutcome::Rewarded { .. } => self.rewarded += 1,
            IterationOutcome::RewardRejected => self.reward_rejected += 1,
            IterationOutcome::CreationFailed => self.creation_failed += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.rewarded + self.reward_rejected + self.creation_failed
    }
}
