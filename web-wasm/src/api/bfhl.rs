//! BFHL API連携（fetch）

use bfhl_form_common::{Classifier, SubmissionError, SubmitRequest};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetchで /bfhl を呼び出すクライアント
pub struct FetchClassifier {
    endpoint: String,
}

impl FetchClassifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Classifier for FetchClassifier {
    async fn classify(&self, request: &SubmitRequest) -> Result<Value, SubmissionError> {
        let body = request.to_json()?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoint, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| SubmissionError::CommunicationFailure("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            return Err(SubmissionError::status(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        parse_body(&text.as_string().unwrap_or_default())
    }
}

/// レスポンスボディをJSONとして解釈
pub fn parse_body(text: &str) -> Result<Value, SubmissionError> {
    serde_json::from_str(text)
        .map_err(|e| SubmissionError::CommunicationFailure(format!("invalid response body: {}", e)))
}

fn js_error(value: JsValue) -> SubmissionError {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    SubmissionError::CommunicationFailure(message)
}
