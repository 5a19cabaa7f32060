//! フォーム全体の状態
//!
//! 入力・トグル・エラー・レスポンス・フィルタ結果・送信中フラグを
//! 1つの構造体で所有する。送信は同時に1件だけ受け付ける。

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::{FilterError, SubmissionError};
use crate::filter::apply_filters;
use crate::request::SubmitRequest;
use crate::types::{FilterToggles, FilteredResult, RawInput, ServerResponse, Toggle};

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: RawInput,
    pub toggles: FilterToggles,
    /// エラーバナー（空ならNone）
    pub error: Option<String>,
    /// フィルタ警告（エラーとは別チャネル）
    pub warning: Option<String>,
    pub response: Option<ServerResponse>,
    /// None = フィルタ未適用
    pub filtered: Option<FilteredResult>,
    in_flight: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_json_text(&mut self, text: impl Into<String>) {
        self.input.json_text = text.into();
    }

    pub fn set_file_base64(&mut self, encoded: impl Into<String>) {
        self.input.file_base64 = encoded.into();
    }

    pub fn set_toggle(&mut self, toggle: Toggle, checked: bool) {
        self.toggles.set(toggle, checked);
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// 送信を開始する
    ///
    /// 送信スロットを確保してリクエストを返す。JSONが不正な場合や
    /// 別の送信が処理中の場合はエラーバナーを設定してErrを返す。
    /// いずれの場合も保存済みレスポンスは変更しない。
    pub fn begin_submission(&mut self) -> Result<SubmitRequest, SubmissionError> {
        if self.in_flight {
            warn!("submission rejected: another request is in flight");
            let error = SubmissionError::InFlight;
            self.error = Some(error.banner().to_string());
            return Err(error);
        }

        match SubmitRequest::from_input(&self.input) {
            Ok(request) => {
                self.in_flight = true;
                debug!(
                    "submission started (data: {}, file_base64: {} chars)",
                    request.data.is_some(),
                    request.file_base64.len()
                );
                Ok(request)
            }
            Err(e) => {
                warn!("{}", e);
                self.error = Some(e.banner().to_string());
                Err(e)
            }
        }
    }

    /// 送信結果を反映し、送信スロットを解放する
    ///
    /// 成功時はレスポンスを丸ごと置き換えてエラーを消す。
    /// 失敗時はエラーバナーのみ更新し、レスポンスは残す。
    pub fn finish_submission(&mut self, outcome: Result<Value, SubmissionError>) -> Result<(), SubmissionError> {
        self.in_flight = false;
        match outcome {
            Ok(body) => {
                self.response = ServerResponse::from_value(body);
                self.error = None;
                info!("submission succeeded");
                Ok(())
            }
            Err(e) => {
                warn!("submission failed: {}", e);
                self.error = Some(e.banner().to_string());
                Err(e)
            }
        }
    }

    /// 現在のトグルでフィルタを適用
    ///
    /// レスポンス未取得なら警告を設定し、既存のフィルタ結果は残す。
    pub fn apply_filters(&mut self) -> Result<&FilteredResult, FilterError> {
        match apply_filters(self.response.as_ref(), &self.toggles) {
            Ok(result) => {
                self.warning = None;
                Ok(&*self.filtered.insert(result))
            }
            Err(e) => {
                warn!("{}", e);
                self.warning = Some(e.warning().to_string());
                Err(e)
            }
        }
    }
}
