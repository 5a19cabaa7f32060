//! フィルタステージ
//!
//! 保存済みレスポンスとトグルからFilteredResultを導出する。
//! レスポンス自体は変更しない純粋関数。

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Number, Value};

use crate::error::FilterError;
use crate::types::{FilterToggles, FilteredResult, ServerResponse};

lazy_static! {
    /// 英字のみ（1文字以上）
    static ref ALPHA_ONLY: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();

    /// 10進数リテラル（符号・小数・指数・Infinity）
    static ref DECIMAL_LITERAL: Regex =
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$").unwrap();

    /// 前後のJavaScript空白（Zs, TAB, VT, FF, 改行類, BOM）。NELは含まない
    static ref JS_WHITESPACE_EDGES: Regex = Regex::new(
        r"^[\p{Zs}\t\x0B\x0C\n\r\x{2028}\x{2029}\x{FEFF}]+|[\p{Zs}\t\x0B\x0C\n\r\x{2028}\x{2029}\x{FEFF}]+$"
    ).unwrap();

    /// 16/8/2進数リテラル（符号なし）
    static ref RADIX_LITERAL: Regex =
        Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").unwrap();
}

/// フィルタを適用
///
/// # Arguments
/// * `response` - 保存済みレスポンス（未取得ならNone）
/// * `toggles` - チェックボックスの状態
///
/// # Returns
/// * `Ok(FilteredResult)` - 3キーすべてを持つ結果
/// * `Err(FilterError::NoResponseYet)` - レスポンス未取得
pub fn apply_filters(
    response: Option<&ServerResponse>,
    toggles: &FilterToggles,
) -> Result<FilteredResult, FilterError> {
    let response = response.ok_or(FilterError::NoResponseYet)?;
    let mut result = FilteredResult::default();

    if toggles.alpha {
        if let Some(items) = response.alphabets() {
            result.alphabets = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| is_alpha_only(s))
                .map(str::to_string)
                .collect();
        }
    }

    if toggles.numbers {
        if let Some(items) = response.numbers() {
            result.numbers = items.iter().filter_map(numeric_text).collect();
        }
    }

    if toggles.heigh {
        if let Some(items) = response.highest_lowercase_alphabet() {
            result.highest_lowercase_alphabet = items.iter().map(display_text).collect();
        }
    }

    Ok(result)
}

/// 英字のみで構成されているか
pub fn is_alpha_only(s: &str) -> bool {
    ALPHA_ONLY.is_match(s)
}

/// 緩い数値判定（JavaScriptの `!isNaN(s)` 相当）
///
/// 空白のみの文字列は0として扱われるので数値とみなす。
///
/// # Examples
/// ```
/// use bfhl_form_common::is_loose_numeric;
///
/// assert!(is_loose_numeric("42"));
/// assert!(is_loose_numeric(" +1.5e3 "));
/// assert!(is_loose_numeric("0x1F"));
/// assert!(!is_loose_numeric("x"));
/// ```
pub fn is_loose_numeric(s: &str) -> bool {
    let trimmed = JS_WHITESPACE_EDGES.replace_all(s, "");
    trimmed.is_empty() || DECIMAL_LITERAL.is_match(&trimmed) || RADIX_LITERAL.is_match(&trimmed)
}

/// numbers要素の判定と表示文字列化
fn numeric_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if is_loose_numeric(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// 文字列はそのまま、数値はJavaScript表記、それ以外はJSON表記
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// 数値の表示文字列（整数値のfloatは ".0" を付けない、-0は0）
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !(n.is_i64() || n.is_u64()) && f.is_finite() && f.fract() == 0.0 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}
