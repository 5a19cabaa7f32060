//! /bfhl リクエストボディの組み立て

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SubmissionError;
use crate::types::RawInput;

/// 既定の分類サービスエンドポイント
pub const DEFAULT_ENDPOINT: &str = "https://backend-1ymp.onrender.com/bfhl";

/// /bfhl へ送るリクエストボディ
///
/// `data` が入力JSONに無い場合はキーごと省略する。
/// 明示的な `null` は `null` として送る。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub file_base64: String,
}

impl SubmitRequest {
    /// 入力を検証してリクエストを作成
    ///
    /// # Returns
    /// * `Ok(SubmitRequest)` - JSONとして解釈できた場合
    /// * `Err(SubmissionError::InvalidInput)` - JSONパース失敗
    pub fn from_input(input: &RawInput) -> Result<Self, SubmissionError> {
        let parsed: Value = serde_json::from_str(&input.json_text)?;
        Ok(Self {
            data: extract_data(parsed),
            file_base64: input.file_base64.clone(),
        })
    }

    pub fn to_json(&self) -> Result<String, SubmissionError> {
        serde_json::to_string(self).map_err(|e| SubmissionError::CommunicationFailure(e.to_string()))
    }
}

/// パース済み入力から `data` メンバーを取り出す
fn extract_data(parsed: Value) -> Option<Value> {
    match parsed {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    }
}
