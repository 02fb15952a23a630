use chrono::NaiveDate;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::value::Value;

/// Normalized cell content, ready to hand to the cell primitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Node(Line<'static>),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        match self {
            Content::Empty => 0,
            Content::Text(s) => UnicodeWidthStr::width(s.as_str()),
            Content::Node(line) => line.width(),
        }
    }
}

/// What a compute closure returns: either a plain value (normalized like any field) or a
/// pre-styled node that is passed through untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Value(Value),
    Node(Line<'static>),
}

impl CellValue {
    pub fn normalize(self) -> Content {
        normalize(self)
    }
}

/// Normalizes a compute result into [`Content`].
///
/// Values follow [`Value::to_content`]; nodes are kept as-is, even when empty.
pub fn normalize(value: CellValue) -> Content {
    match value {
        CellValue::Value(v) => v.to_content(),
        CellValue::Node(line) => Content::Node(line),
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Value(Value::Null)
    }
}

impl From<Value> for CellValue {
    fn from(v: Value) -> Self {
        CellValue::Value(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Value(v.into())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Value(v.into())
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Value(v.clone().into())
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Value(v.into())
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Value(v.into())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Value(v.into())
    }
}

impl From<usize> for CellValue {
    fn from(v: usize) -> Self {
        CellValue::Value(v.into())
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Value(v.into())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Value(v.into())
    }
}

impl From<Line<'static>> for CellValue {
    fn from(v: Line<'static>) -> Self {
        CellValue::Node(v)
    }
}

impl From<Span<'static>> for CellValue {
    fn from(v: Span<'static>) -> Self {
        CellValue::Node(Line::from(v))
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Stylize;

    #[test]
    fn compute_results_normalize_falsy_to_empty() {
        assert_eq!(normalize(CellValue::from(false)), Content::Empty);
        assert_eq!(normalize(CellValue::from(None::<&str>)), Content::Empty);
        assert_eq!(normalize(CellValue::from("")), Content::Empty);
        assert_eq!(normalize(CellValue::default()), Content::Empty);
    }

    #[test]
    fn compute_results_keep_zero_and_nan() {
        assert_eq!(normalize(CellValue::from(0)), Content::Text("0".into()));
        assert_eq!(
            normalize(CellValue::from(f64::NAN)),
            Content::Text("NaN".into())
        );
    }

    #[test]
    fn nodes_pass_through() {
        let line = Line::from("ok".green());
        assert_eq!(
            normalize(CellValue::from(line.clone())),
            Content::Node(line)
        );
        assert_eq!(
            normalize(CellValue::from(Line::default())),
            Content::Node(Line::default())
        );
    }

    #[test]
    fn width_counts_display_columns() {
        assert_eq!(Content::Text("你好".into()).width(), 4);
        assert_eq!(Content::Empty.width(), 0);
        assert_eq!(Content::Node(Line::from("abc")).width(), 3);
    }
}
