use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::NaiveDate;
use chrono::NaiveDateTime;

use crate::content::Content;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single field value of a row.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Normalizes this value into displayable content.
    ///
    /// `Null`, `false`, and the empty string collapse to [`Content::Empty`]. Numeric zero and
    /// `NaN` are real values and render as text. Dates render as their calendar date. Maps have no
    /// textual form and render empty.
    pub fn to_content(&self) -> Content {
        match self {
            Value::Null | Value::Bool(false) | Value::Map(_) => Content::Empty,
            Value::Str(s) if s.is_empty() => Content::Empty,
            Value::List(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item.to_content() {
                        Content::Text(s) => Some(s),
                        Content::Node(line) => Some(line.to_string()),
                        Content::Empty => None,
                    })
                    .collect();
                if parts.is_empty() {
                    Content::Empty
                } else {
                    Content::Text(parts.join(", "))
                }
            }
            other => Content::Text(other.to_key_string()),
        }
    }

    /// Stringifies this value for use as a row identity.
    ///
    /// Unlike [`Value::to_content`] nothing falsy is dropped: `false` stays `"false"`. `Null` and
    /// maps stringify to `""`.
    pub fn to_key_string(&self) -> String {
        match self {
            Value::Null | Value::Map(_) => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Str(s) => s.clone(),
            Value::Date(d) => d.format(DATE_FORMAT).to_string(),
            Value::DateTime(dt) => dt.date().format(DATE_FORMAT).to_string(),
            Value::List(items) => items
                .iter()
                .map(Value::to_key_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let s = if f > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if f == 0.0 {
        // Covers -0.0.
        "0".to_string()
    } else {
        f.to_string()
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v.min(i64::MAX as usize) as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(v: Vec<V>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// Field access for row types rendered by a data table.
///
/// Pass-through columns and field-based row keys read through this trait; compute closures get
/// the row itself and can use whatever fields they like.
pub trait Record {
    fn field(&self, key: &str) -> Option<Value>;
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// A dynamically shaped row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl Record for Row {
    fn field(&self, key: &str) -> Option<Value> {
        self.fields.get(key).cloned()
    }
}

impl From<BTreeMap<String, Value>> for Row {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Content {
        Content::Text(s.to_string())
    }

    #[test]
    fn falsy_values_normalize_to_empty() {
        assert_eq!(Value::Null.to_content(), Content::Empty);
        assert_eq!(Value::Bool(false).to_content(), Content::Empty);
        assert_eq!(Value::from("").to_content(), Content::Empty);
    }

    #[test]
    fn zero_and_nan_are_not_empty() {
        assert_eq!(Value::Int(0).to_content(), text("0"));
        assert_eq!(Value::Float(0.0).to_content(), text("0"));
        assert_eq!(Value::Float(-0.0).to_content(), text("0"));
        assert_eq!(Value::Float(f64::NAN).to_content(), text("NaN"));
        assert_eq!(Value::Float(f64::INFINITY).to_content(), text("Infinity"));
        assert_eq!(
            Value::Float(f64::NEG_INFINITY).to_content(),
            text("-Infinity")
        );
    }

    #[test]
    fn floats_use_shortest_form() {
        assert_eq!(Value::Float(2.0).to_content(), text("2"));
        assert_eq!(Value::Float(1.5).to_content(), text("1.5"));
    }

    #[test]
    fn dates_render_as_calendar_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Value::from(d).to_content(), text("2024-03-09"));
        let dt = d.and_hms_opt(23, 59, 1).unwrap();
        assert_eq!(Value::from(dt).to_content(), text("2024-03-09"));
    }

    #[test]
    fn lists_join_non_empty_items() {
        let v = Value::from(vec![Value::from("1"), Value::Null, Value::from(3)]);
        assert_eq!(v.to_content(), text("1, 3"));
        assert_eq!(Value::List(Vec::new()).to_content(), Content::Empty);
    }

    #[test]
    fn maps_render_empty() {
        let mut m = BTreeMap::new();
        m.insert("a".to_string(), Value::Int(1));
        assert_eq!(Value::Map(m).to_content(), Content::Empty);
    }

    #[test]
    fn key_string_keeps_falsy_values() {
        assert_eq!(Value::Bool(false).to_key_string(), "false");
        assert_eq!(Value::Int(0).to_key_string(), "0");
        assert_eq!(Value::Null.to_key_string(), "");
    }

    #[test]
    fn row_builder_and_record() {
        let row = Row::new().with("id", 1).with("title", Option::<&str>::None);
        assert_eq!(row.field("id"), Some(Value::Int(1)));
        assert_eq!(row.field("title"), Some(Value::Null));
        assert_eq!(row.field("missing"), None);
    }
}
