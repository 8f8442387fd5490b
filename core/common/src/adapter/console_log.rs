//! 人間向けコンソールログ（LogRecord → stdout / stderr への要点のみ出力）
//!
//! info は stdout、warn / error は stderr。debug は verbose 時のみ。
//! fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::Arc;

const FIELDS_SUMMARY_MAX: usize = 400;

/// 出力先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// fields の要点だけを短い文字列にする（巨大化防止）
fn fields_summary(fields: &BTreeMap<String, serde_json::Value>) -> String {
    let s = fields
        .iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join(" ");
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// 人間向けコンソールログ
pub struct ConsoleLog {
    verbose: bool,
}

impl ConsoleLog {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// 1 レコードを出力先と 1 行の文字列に整形する。表示しないレコードは None。
    pub fn render(&self, record: &LogRecord) -> Option<(ConsoleStream, String)> {
        let mut line = match record.level {
            LogLevel::Debug if !self.verbose => return None,
            LogLevel::Debug => format!("[debug] {}", record.message),
            LogLevel::Info => record.message.clone(),
            LogLevel::Warn => format!("warn: {}", record.message),
            LogLevel::Error => format!("error: {}", record.message),
        };
        let show_fields = self.verbose || record.level <= LogLevel::Warn;
        if show_fields {
            if let Some(fields) = record.fields.as_ref().filter(|f| !f.is_empty()) {
                line.push_str(" (");
                line.push_str(&fields_summary(fields));
                line.push(')');
            }
        }
        let stream = if record.level <= LogLevel::Warn {
            ConsoleStream::Stderr
        } else {
            ConsoleStream::Stdout
        };
        Some((stream, line))
    }
}

impl Default for ConsoleLog {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Log for ConsoleLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        match self.render(record) {
            Some((ConsoleStream::Stdout, line)) => println!("{}", line),
            Some((ConsoleStream::Stderr, line)) => eprintln!("{}", line),
            None => {}
        }
        Ok(())
    }
}

/// 複数の Log へ同じレコードを流す実装
///
/// 途中の出力先が失敗しても残りへは書き込み、最初のエラーを返す。
pub struct FanoutLog {
    logs: Vec<Arc<dyn Log>>,
}

impl FanoutLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for FanoutLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
