//! reqwestによる /bfhl クライアント

use crate::config::Config;
use crate::error::{BfhlError, Result};
use bfhl_form_common::{Classifier, SubmissionError, SubmitRequest};
use log::debug;
use serde_json::Value;
use std::time::Duration;

pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| BfhlError::Http(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for HttpClassifier {
    async fn classify(&self, request: &SubmitRequest) -> std::result::Result<Value, SubmissionError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SubmissionError::CommunicationFailure(e.to_string()))?;

        let status = response.status();
        debug!("response status: {}", status);
        if !status.is_success() {
            return Err(SubmissionError::status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SubmissionError::CommunicationFailure(format!("invalid response body: {}", e)))
    }
}
