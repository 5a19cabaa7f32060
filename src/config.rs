use crate::error::{BfhlError, Result};
use bfhl_form_common::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "BFHL_ENDPOINT";

/// 実行設定（読み込みのみ、保存はしない）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: 60,
        }
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// 既定値 → 設定ファイル → 環境変数 の順に上書きする
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.override_endpoint(std::env::var(ENDPOINT_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BfhlError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 空でなければエンドポイントを上書き
    pub fn override_endpoint(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(BfhlError::Config(format!(
                "エンドポイントはhttp(s)のURLで指定してください: {}",
                self.endpoint
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(BfhlError::Config("timeout_secondsは1以上にしてください".into()));
        }
        Ok(())
    }
}
