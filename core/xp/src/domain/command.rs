//! xp コマンドの enum（Command Pattern）
//!
//! ヘルプ表示 / 設定確認 / 実行の分岐を enum で明示する。

use crate::domain::config::RunConfig;

/// xp の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum XpCommand {
    /// ヘルプ表示
    Help,
    /// 有効な設定を表示するだけで API には触れない
    DryRun(RunConfig),
    /// セッションの作成・完了を繰り返す
    Run(RunConfig),
}
