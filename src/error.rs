use bfhl_form_common::{FilterError, SubmissionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BfhlError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(String),

    #[error("送信エラー: {0}")]
    Submission(#[from] SubmissionError),

    #[error("フィルタエラー: {0}")]
    Filter(#[from] FilterError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BfhlError>;
