//! 分類サービス呼び出しの境界
//!
//! ネイティブはreqwest、Webはfetchで実装する。

use serde_json::Value;

use crate::error::SubmissionError;
use crate::request::SubmitRequest;
use crate::state::FormState;

/// /bfhl を呼び出すクライアント
///
/// 2xx以外のステータス・通信失敗・JSONでないボディは
/// `SubmissionError::CommunicationFailure` として返すこと。
#[allow(async_fn_in_trait)]
pub trait Classifier {
    async fn classify(&self, request: &SubmitRequest) -> Result<Value, SubmissionError>;
}

/// 送信ステージ一式を実行
///
/// 入力検証 → 送信 → 結果反映。JSONが不正ならクライアントは呼ばない。
pub async fn submit<C: Classifier>(state: &mut FormState, client: &C) -> Result<(), SubmissionError> {
    let request = state.begin_submission()?;
    let outcome = client.classify(&request).await;
    state.finish_submission(outcome)
}
