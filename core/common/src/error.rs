//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードはエラー種別から決まる。

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数・設定値の不正（終了コード 64）
    #[error("{0}")]
    InvalidArgument(String),
    /// ファイル等の I/O エラー（終了コード 74）
    #[error("I/O error: {0}")]
    Io(String),
    /// HTTP 通信エラー
    #[error("HTTP error: {0}")]
    Http(String),
    /// JSON の解析・生成エラー
    #[error("JSON error: {0}")]
    Json(String),
    /// 実行時の致命的エラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// 使い方の誤りか（main で usage を表示するかの判定）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// プロセス終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Io(_) => 74,
            Error::Http(_) | Error::Json(_) | Error::System(_) => 70,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
