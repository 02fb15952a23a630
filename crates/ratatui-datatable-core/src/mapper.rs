//! Per-column cell resolution.
//!
//! Every column key maps to a [`MapperEntry`] describing how to derive the cell's content from a
//! row and, optionally, how to style it:
//!
//! - [`MapperEntry::PassThrough`]: show the row's field for that key.
//! - [`MapperEntry::Compute`]: call a closure with `(row, row_index)`.
//! - [`MapperEntry::Styled`]: either of the above plus a static or computed [`StyleAttrs`].
//!
//! ```
//! use ratatui::style::{Style, Stylize};
//! use ratatui_datatable_core::mapper::{Mapper, MapperEntry};
//! use ratatui_datatable_core::value::Row;
//!
//! let mapper: Mapper<Row> = Mapper::new()
//!     .with("id", MapperEntry::pass_through())
//!     .with("double", MapperEntry::compute(|row: &Row, _| {
//!         row.get("id").map(|v| v.to_key_string().repeat(2))
//!     }))
//!     .with("title", MapperEntry::pass_through().with_style(Style::new().green()));
//! assert!(mapper.contains_key("title"));
//! ```
use std::collections::HashMap;
use std::fmt;

use crate::content::CellValue;
use crate::content::Content;
use crate::error::ConfigError;
use crate::style::StyleAttrs;
use crate::value::Record;

pub type ComputeFn<T> = Box<dyn Fn(&T, usize) -> CellValue>;
pub type StyleFn<T> = Box<dyn Fn(&T, usize) -> StyleAttrs>;

/// The value half of a styled entry.
pub enum Resolver<T> {
    PassThrough,
    Compute(ComputeFn<T>),
}

/// The style half of a styled entry.
pub enum StyleSpec<T> {
    Static(StyleAttrs),
    Computed(StyleFn<T>),
}

pub enum MapperEntry<T> {
    PassThrough,
    Compute(ComputeFn<T>),
    Styled(Resolver<T>, StyleSpec<T>),
}

/// A resolved body cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedCell {
    pub content: Content,
    pub attrs: StyleAttrs,
}

impl ResolvedCell {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl<T> MapperEntry<T> {
    pub fn pass_through() -> Self {
        MapperEntry::PassThrough
    }

    pub fn compute<F, V>(f: F) -> Self
    where
        F: Fn(&T, usize) -> V + 'static,
        V: Into<CellValue>,
    {
        MapperEntry::Compute(Box::new(move |row, index| f(row, index).into()))
    }

    /// Attaches a static style. Restyling a styled entry replaces its style.
    pub fn with_style(self, attrs: impl Into<StyleAttrs>) -> Self {
        MapperEntry::Styled(self.into_resolver(), StyleSpec::Static(attrs.into()))
    }

    /// Attaches a style computed from `(row, row_index)`.
    pub fn with_style_fn<F, S>(self, f: F) -> Self
    where
        F: Fn(&T, usize) -> S + 'static,
        S: Into<StyleAttrs>,
    {
        MapperEntry::Styled(
            self.into_resolver(),
            StyleSpec::Computed(Box::new(move |row, index| f(row, index).into())),
        )
    }

    fn into_resolver(self) -> Resolver<T> {
        match self {
            MapperEntry::PassThrough => Resolver::PassThrough,
            MapperEntry::Compute(f) => Resolver::Compute(f),
            MapperEntry::Styled(resolver, _) => resolver,
        }
    }
}

impl<T: Record> MapperEntry<T> {
    /// Resolves the content and attributes of the cell at `key` for `row`.
    pub fn resolve(&self, row: &T, key: &str, index: usize) -> ResolvedCell {
        match self {
            MapperEntry::PassThrough => ResolvedCell {
                content: pass_through(row, key),
                attrs: StyleAttrs::default(),
            },
            MapperEntry::Compute(f) => ResolvedCell {
                content: f(row, index).normalize(),
                attrs: StyleAttrs::default(),
            },
            MapperEntry::Styled(resolver, spec) => {
                let content = match resolver {
                    Resolver::PassThrough => pass_through(row, key),
                    Resolver::Compute(f) => f(row, index).normalize(),
                };
                let attrs = match spec {
                    StyleSpec::Static(attrs) => *attrs,
                    StyleSpec::Computed(f) => f(row, index),
                };
                ResolvedCell { content, attrs }
            }
        }
    }
}

fn pass_through<T: Record>(row: &T, key: &str) -> Content {
    row.field(key)
        .map(|v| v.to_content())
        .unwrap_or(Content::Empty)
}

impl<T> fmt::Debug for MapperEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperEntry::PassThrough => f.write_str("PassThrough"),
            MapperEntry::Compute(_) => f.write_str("Compute(..)"),
            MapperEntry::Styled(resolver, spec) => {
                let resolver = match resolver {
                    Resolver::PassThrough => "PassThrough",
                    Resolver::Compute(_) => "Compute(..)",
                };
                match spec {
                    StyleSpec::Static(attrs) => write!(f, "Styled({resolver}, {attrs:?})"),
                    StyleSpec::Computed(_) => write!(f, "Styled({resolver}, Computed(..))"),
                }
            }
        }
    }
}

/// Column key to [`MapperEntry`] lookup.
pub struct Mapper<T> {
    entries: HashMap<String, MapperEntry<T>>,
}

impl<T> Default for Mapper<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> Mapper<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, entry: MapperEntry<T>) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: MapperEntry<T>) {
        self.entries.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&MapperEntry<T>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<T: Record> Mapper<T> {
    /// Resolves one cell, layering the entry's attributes over the column `width`.
    ///
    /// A missing entry is a configuration error; callers decide how to report it.
    pub fn resolve_cell(
        &self,
        row: &T,
        key: &str,
        index: usize,
        width: Option<u16>,
    ) -> Result<ResolvedCell, ConfigError> {
        let entry = self.get(key).ok_or_else(|| ConfigError::MissingMapper {
            key: key.to_string(),
        })?;
        let cell = entry.resolve(row, key, index);
        let base = width.map(StyleAttrs::sized).unwrap_or_default();
        Ok(ResolvedCell {
            content: cell.content,
            attrs: base.merge(cell.attrs),
        })
    }
}

impl<T> fmt::Debug for Mapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Row;
    use crate::value::Value;
    use chrono::NaiveDate;
    use ratatui::style::Color;
    use ratatui::style::Style;
    use ratatui::text::Line;

    fn row() -> Row {
        Row::new()
            .with("id", 1)
            .with("title", "foobar")
            .with("empty", Value::Null)
            .with("date", NaiveDate::from_ymd_opt(2023, 12, 1).unwrap())
    }

    fn text(s: &str) -> Content {
        Content::Text(s.to_string())
    }

    #[test]
    fn pass_through_reads_field() {
        let cell = MapperEntry::pass_through().resolve(&row(), "title", 0);
        assert_eq!(cell.content, text("foobar"));
        assert_eq!(cell.attrs, StyleAttrs::default());
    }

    #[test]
    fn pass_through_normalizes_null_missing_and_dates() {
        let entry = MapperEntry::pass_through();
        assert_eq!(entry.resolve(&row(), "empty", 0).content, Content::Empty);
        assert_eq!(entry.resolve(&row(), "nope", 0).content, Content::Empty);
        assert_eq!(
            entry.resolve(&row(), "date", 0).content,
            text("2023-12-01")
        );
    }

    #[test]
    fn compute_receives_row_and_index() {
        let entry = MapperEntry::compute(|r: &Row, i| {
            format!("{}@{i}", r.get("title").map(Value::to_key_string).unwrap_or_default())
        });
        assert_eq!(entry.resolve(&row(), "x", 3).content, text("foobar@3"));
    }

    #[test]
    fn compute_false_is_empty() {
        let entry = MapperEntry::<Row>::compute(|_, _| false);
        assert_eq!(entry.resolve(&row(), "x", 0).content, Content::Empty);
    }

    #[test]
    fn compute_node_passes_through() {
        let entry = MapperEntry::<Row>::compute(|_, _| Line::from("node"));
        assert_eq!(
            entry.resolve(&row(), "x", 0).content,
            Content::Node(Line::from("node"))
        );
    }

    #[test]
    fn styled_pass_through_keeps_raw_value() {
        let style = Style::new().fg(Color::Green);
        let entry = MapperEntry::pass_through().with_style(style);
        let cell = entry.resolve(&row(), "title", 0);
        assert_eq!(cell.content, text("foobar"));
        assert_eq!(cell.attrs.style, style);
    }

    #[test]
    fn styled_computed_style_sees_index() {
        let entry = MapperEntry::<Row>::compute(|_, i| i).with_style_fn(|_, i| {
            if i % 2 == 0 {
                Style::new().fg(Color::Red)
            } else {
                Style::new().fg(Color::Blue)
            }
        });
        let even = entry.resolve(&row(), "x", 0);
        let odd = entry.resolve(&row(), "x", 1);
        assert_eq!(even.content, text("0"));
        assert_eq!(even.attrs.style.fg, Some(Color::Red));
        assert_eq!(odd.attrs.style.fg, Some(Color::Blue));
    }

    #[test]
    fn pass_through_with_computed_style_keeps_raw_value() {
        let entry = MapperEntry::pass_through().with_style_fn(|r: &Row, i| {
            let fg = if r.get("id") == Some(&Value::Int(1)) {
                Color::Indexed(i as u8)
            } else {
                Color::Reset
            };
            StyleAttrs::new().style(Style::new().fg(fg)).width(6)
        });
        for i in 0..3 {
            let cell = entry.resolve(&row(), "title", i);
            assert_eq!(cell.content, text("foobar"));
            assert_eq!(cell.attrs.style.fg, Some(Color::Indexed(i as u8)));
            assert_eq!(cell.attrs.width, Some(6));
        }
        let date = entry.resolve(&row(), "date", 4);
        assert_eq!(date.content, text("2023-12-01"));
        assert_eq!(date.attrs.style.fg, Some(Color::Indexed(4)));
    }

    #[test]
    fn restyling_replaces_style() {
        let entry = MapperEntry::<Row>::pass_through()
            .with_style(Style::new().fg(Color::Red))
            .with_style(Style::new().fg(Color::Blue));
        let cell = entry.resolve(&row(), "title", 0);
        assert_eq!(cell.attrs.style, Style::new().fg(Color::Blue));
    }

    #[test]
    fn missing_entry_is_config_error() {
        let mapper: Mapper<Row> = Mapper::new();
        assert_eq!(
            mapper.resolve_cell(&row(), "id", 0, None),
            Err(ConfigError::MissingMapper { key: "id".into() })
        );
    }

    #[test]
    fn width_merges_under_entry_attrs() {
        let mapper: Mapper<Row> = Mapper::new()
            .with("id", MapperEntry::pass_through())
            .with(
                "title",
                MapperEntry::pass_through().with_style(StyleAttrs::new().width(3)),
            );
        let id = mapper.resolve_cell(&row(), "id", 0, Some(8)).unwrap();
        assert_eq!(id.attrs.width, Some(8));
        let title = mapper.resolve_cell(&row(), "title", 0, Some(8)).unwrap();
        assert_eq!(title.attrs.width, Some(3));
    }

    #[test]
    fn resolution_is_idempotent() {
        let mapper: Mapper<Row> = Mapper::new().with(
            "id",
            MapperEntry::compute(|r: &Row, i| {
                format!("{}-{i}", r.get("id").map(Value::to_key_string).unwrap_or_default())
            })
            .with_style_fn(|_, i| Style::new().fg(Color::Indexed(i as u8))),
        );
        let a = mapper.resolve_cell(&row(), "id", 5, Some(4));
        let b = mapper.resolve_cell(&row(), "id", 5, Some(4));
        assert_eq!(a, b);
    }
}
