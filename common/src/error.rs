//! エラー型定義

use thiserror::Error;

/// 入力不正・通信失敗で共通の表示メッセージ
pub const SUBMISSION_BANNER: &str =
    "Error: Invalid JSON format or failed to communicate with the server";

/// 送信中の再送信時の表示メッセージ
pub const IN_FLIGHT_BANNER: &str = "Error: A submission is already in progress";

/// レスポンス未取得でフィルタした時の警告
pub const NO_RESPONSE_WARNING: &str = "No response to filter. Please submit the form first.";

/// 送信ステージのエラー
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("invalid JSON input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("failed to communicate with the server: {0}")]
    CommunicationFailure(String),

    #[error("a submission is already in progress")]
    InFlight,
}

impl SubmissionError {
    /// 画面に出すメッセージ
    ///
    /// 入力不正と通信失敗は同じ文言（詳細はDisplay側でログに出す）
    pub fn banner(&self) -> &'static str {
        match self {
            SubmissionError::InvalidInput(_) | SubmissionError::CommunicationFailure(_) => {
                SUBMISSION_BANNER
            }
            SubmissionError::InFlight => IN_FLIGHT_BANNER,
        }
    }

    /// HTTPステータス異常
    pub fn status(code: u16) -> Self {
        SubmissionError::CommunicationFailure(format!("server responded with status {}", code))
    }
}

/// フィルタステージのエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("no server response to filter yet")]
    NoResponseYet,
}

impl FilterError {
    pub fn warning(&self) -> &'static str {
        match self {
            FilterError::NoResponseYet => NO_RESPONSE_WARNING,
        }
    }
}
