//! BFHL Filter Form Common Library
//!
//! ネイティブCLIとWeb(WASM)で共有される型とパイプライン
//! （入力 → 送信 → フィルタ → 表示）

pub mod types;
pub mod error;
pub mod input;
pub mod request;
pub mod filter;
pub mod state;
pub mod client;
pub mod view;

pub use types::{RawInput, Toggle, FilterToggles, ServerResponse, FilteredResult};
pub use error::{SubmissionError, FilterError};
pub use input::{base64_from_data_url, mime_type_from_data_url};
pub use request::{SubmitRequest, DEFAULT_ENDPOINT};
pub use filter::{apply_filters, is_alpha_only, is_loose_numeric};
pub use state::FormState;
pub use client::{Classifier, submit};
pub use view::{filtered_lines, render_text, FilteredLine};
