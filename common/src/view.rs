//! 表示ステージ用ヘルパー
//!
//! CLIとWebの両方で同じ見出し・区切りを使う。

use crate::state::FormState;
use crate::types::FilteredResult;

pub const FILTERED_HEADING: &str = "Filtered Response";
pub const RESPONSE_HEADING: &str = "Server Response";

/// フィルタ結果の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredLine {
    pub label: &'static str,
    pub text: String,
}

/// フィルタ結果を表示行に変換（各フィールドは ", " 区切り）
pub fn filtered_lines(result: &FilteredResult) -> Vec<FilteredLine> {
    vec![
        FilteredLine { label: "Alphabets", text: result.alphabets.join(", ") },
        FilteredLine { label: "Numbers", text: result.numbers.join(", ") },
        FilteredLine {
            label: "Highest Lowercase Alphabet",
            text: result.highest_lowercase_alphabet.join(", "),
        },
    ]
}

/// フォーム状態をテキストで描画（CLI出力用）
///
/// フィルタ未適用ならフィルタ結果ブロックは出さない。
pub fn render_text(state: &FormState) -> String {
    let mut out = Vec::new();

    if let Some(error) = &state.error {
        out.push(error.clone());
    }
    if let Some(warning) = &state.warning {
        out.push(warning.clone());
    }

    if let Some(filtered) = &state.filtered {
        out.push(format!("=== {} ===", FILTERED_HEADING));
        for line in filtered_lines(filtered) {
            out.push(format!("{}: {}", line.label, line.text));
        }
    }

    if let Some(response) = &state.response {
        out.push(format!("=== {} ===", RESPONSE_HEADING));
        out.push(response.to_pretty());
    }

    out.join("\n")
}
