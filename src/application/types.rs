use serde::Deserialize;
use serde_json::Value;

/// 応募データJSON
///
/// `metadata` と `cover_letter` 以外（header, summary, experience 等）は
/// ジェネレータ側でのみ使うため、ここでは型付けしない。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default)]
    pub metadata: Metadata,

    pub cover_letter: Option<CoverLetter>,

    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// 値の型は問わない（文字列以外はトラッカー出力時に文字列化）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    pub date_applied: Option<Value>, // 応募日 (YYYY-MM-DD)
    pub target_company: Option<Value>, // 応募先
    pub target_role: Option<Value>, // 職種
    pub status: Option<Value>, // 選考状況
    pub notes: Option<Value>, // メモ
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverLetter {
    pub opening: Option<Value>,

    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

impl ApplicationRecord {
    /// カバーレターの書き出しが空でなければtrue
    pub fn has_cover_letter(&self) -> bool {
        self.cover_letter
            .as_ref()
            .and_then(|c| c.opening.as_ref())
            .is_some_and(is_truthy)
    }
}

/// 空文字・空配列・空オブジェクト・null・false・0 は偽
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// トラッカー用に文字列化。null は未指定扱い
pub fn value_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
