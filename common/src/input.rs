//! 入力ステージ
//!
//! FileReaderが返すData URLからBase64部分を取り出す処理など

/// Data URLからBase64データ部分を抽出
///
/// 最初のカンマ以降をそのまま返す。カンマがなければ空文字。
///
/// # Arguments
/// * `data_url` - "data:application/pdf;base64,JVBERi0..." 形式のData URL
///
/// # Examples
/// ```
/// use bfhl_form_common::base64_from_data_url;
///
/// assert_eq!(base64_from_data_url("data:text/plain;base64,aGk="), "aGk=");
/// assert_eq!(base64_from_data_url("garbage"), "");
/// ```
pub fn base64_from_data_url(data_url: &str) -> &str {
    data_url
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or("")
}

/// Data URLからMIMEタイプを抽出（ログ表示用）
pub fn mime_type_from_data_url(data_url: &str) -> Option<&str> {
    data_url
        .strip_prefix("data:")?
        .split([';', ','])
        .next()
        .filter(|s| !s.is_empty())
}
