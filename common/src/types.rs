//! フォームで扱う型定義
//!
//! ネイティブCLIとWeb(WASM)で共有される型:
//! - RawInput: 入力中のJSONテキストとBase64ファイル
//! - FilterToggles: フィルタのチェックボックス状態
//! - ServerResponse: /bfhl のレスポンス（生のJSONを保持）
//! - FilteredResult: フィルタ適用後の表示用データ

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 入力ステージの状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    /// ユーザーが入力したJSON（未検証）
    pub json_text: String,
    /// 選択ファイルのBase64ペイロード（未選択時は空文字）
    pub file_base64: String,
}

/// フィルタの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Alpha,
    Numbers,
    Heigh,
}

impl Toggle {
    pub const ALL: [Toggle; 3] = [Toggle::Alpha, Toggle::Numbers, Toggle::Heigh];

    /// チェックボックスのname属性
    pub fn as_str(&self) -> &'static str {
        match self {
            Toggle::Alpha => "Alpha",
            Toggle::Numbers => "Numbers",
            Toggle::Heigh => "Heigh",
        }
    }

    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Toggle::Alpha => "Alpha",
            Toggle::Numbers => "Numbers",
            Toggle::Heigh => "Highest Lowercase Alphabet",
        }
    }

    /// name属性からトグルを引く
    pub fn from_name(name: &str) -> Option<Self> {
        Toggle::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

/// フィルタのON/OFF（各フラグは独立）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FilterToggles {
    pub alpha: bool,
    pub numbers: bool,
    pub heigh: bool,
}

impl FilterToggles {
    pub fn new(alpha: bool, numbers: bool, heigh: bool) -> Self {
        Self { alpha, numbers, heigh }
    }

    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Alpha => self.alpha,
            Toggle::Numbers => self.numbers,
            Toggle::Heigh => self.heigh,
        }
    }

    pub fn set(&mut self, toggle: Toggle, checked: bool) {
        match toggle {
            Toggle::Alpha => self.alpha = checked,
            Toggle::Numbers => self.numbers = checked,
            Toggle::Heigh => self.heigh = checked,
        }
    }

    pub fn any(&self) -> bool {
        self.alpha || self.numbers || self.heigh
    }
}

/// サーバーレスポンス
///
/// 中身は不透明なJSONとして保持し、フィルタ対象のフィールドだけを
/// アクセサ経由で参照する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerResponse(Value);

impl ServerResponse {
    /// JSON値からレスポンスを作成
    ///
    /// falsyな値（null, false, 0, 空文字）は「レスポンスなし」として扱う
    pub fn from_value(value: Value) -> Option<Self> {
        let falsy = match &value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        };
        (!falsy).then_some(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// 配列フィールドを取得（存在しない・配列でない場合はNone）
    pub fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key)?.as_array()
    }

    pub fn alphabets(&self) -> Option<&Vec<Value>> {
        self.array_field("alphabets")
    }

    pub fn numbers(&self) -> Option<&Vec<Value>> {
        self.array_field("numbers")
    }

    pub fn highest_lowercase_alphabet(&self) -> Option<&Vec<Value>> {
        self.array_field("highest_lowercase_alphabet")
    }

    /// 整形済みJSON（インデント2）
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// フィルタ適用結果（3キーは常に存在）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilteredResult {
    pub alphabets: Vec<String>,
    pub numbers: Vec<String>,
    pub highest_lowercase_alphabet: Vec<String>,
}
