//! Declarative data table.
//!
//! A [`DataTable`] holds the column order, one [`MapperEntry`] per column, and optional per-column
//! labels, header style overrides, and widths. Rows are supplied on every render and never
//! mutated.
//!
//! Rendering is split in two:
//! - [`DataTable::build`] resolves every header, cell, footer, and row key into a [`TableModel`].
//!   It is pure and does not need a terminal.
//! - [`DataTable::render`] builds the model and paints it with ratatui's `Table`.
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use ratatui_datatable_core::mapper::MapperEntry;
//! use ratatui_datatable_core::table::DataTable;
//! use ratatui_datatable_core::theme::Theme;
//! use ratatui_datatable_core::value::Row;
//!
//! let table: DataTable<Row> = DataTable::new()
//!     .column("id", MapperEntry::pass_through())
//!     .column("title", MapperEntry::pass_through())
//!     .key_field("id");
//! let rows = vec![Row::new().with("id", 1).with("title", "foobar")];
//!
//! let model = table.build(&rows);
//! assert_eq!(model.row_keys(), vec!["1"]);
//!
//! let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
//! table.render(&rows, buf.area, &mut buf, &Theme::default());
//! ```
mod model;
mod view;

use std::collections::HashMap;
use std::fmt;

use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;

use crate::label::HeaderCase;
use crate::label::Label;
use crate::label::ResolvedLabel;
use crate::label::resolve_label;
use crate::mapper::Mapper;
use crate::mapper::MapperEntry;
use crate::mapper::ResolvedCell;
use crate::row_key::RowKey;
use crate::style::StyleAttrs;
use crate::value::Record;

pub use model::ResolvedRow;
pub use model::TableBody;
pub use model::TableModel;
pub use view::render_model;

pub type RowPropsFn<T> = Box<dyn Fn(&T, &str) -> Style>;

/// Options for [`DataTable`].
#[derive(Clone, Debug)]
pub struct DataTableOptions {
    /// Heading shown above the table.
    pub title: Option<String>,
    /// Element shown flush right on the title line.
    pub right: Option<Line<'static>>,
    /// Render the table (header and footer only) even when there are no rows.
    pub show_empty: bool,
    pub show_header: bool,
    pub show_footer: bool,
    pub header_case: HeaderCase,
    pub is_loading: bool,
    pub loading_text: String,
    /// Spinner frame counter; advance it from the app loop to animate the loading overlay.
    pub spinner_tick: usize,
    pub empty_text: Line<'static>,
    /// Alternate background on odd rows.
    pub striped: bool,
    pub column_spacing: u16,
    pub style: Style,
    pub header_style: Style,
    pub footer_style: Style,
}

impl Default for DataTableOptions {
    fn default() -> Self {
        Self {
            title: None,
            right: None,
            show_empty: false,
            show_header: true,
            show_footer: false,
            header_case: HeaderCase::Upper,
            is_loading: false,
            loading_text: "Loading".to_string(),
            spinner_tick: 0,
            empty_text: Line::from("Empty"),
            striped: false,
            column_spacing: 1,
            style: Style::default(),
            header_style: Style::default().add_modifier(Modifier::BOLD),
            footer_style: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

/// A mapper-driven table over rows of type `T`.
pub struct DataTable<T> {
    keys: Vec<String>,
    mapper: Mapper<T>,
    labels: HashMap<String, Label>,
    header_props: HashMap<String, StyleAttrs>,
    widths: HashMap<String, u16>,
    row_key: RowKey<T>,
    row_props: Option<RowPropsFn<T>>,
    options: DataTableOptions,
}

impl<T> Default for DataTable<T> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            mapper: Mapper::new(),
            labels: HashMap::new(),
            header_props: HashMap::new(),
            widths: HashMap::new(),
            row_key: RowKey::Index,
            row_props: None,
            options: DataTableOptions::default(),
        }
    }
}

impl<T> DataTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column order. Every key needs a mapper entry.
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn mapper(mut self, mapper: Mapper<T>) -> Self {
        self.mapper = mapper;
        self
    }

    /// Sets the mapper entry for `key` without touching the column order.
    pub fn map(mut self, key: impl Into<String>, entry: MapperEntry<T>) -> Self {
        self.mapper.insert(key, entry);
        self
    }

    /// Appends column `key` and sets its mapper entry.
    pub fn column(mut self, key: impl Into<String>, entry: MapperEntry<T>) -> Self {
        let key = key.into();
        self.keys.push(key.clone());
        self.mapper.insert(key, entry);
        self
    }

    pub fn label(mut self, key: impl Into<String>, label: impl Into<Label>) -> Self {
        self.labels.insert(key.into(), label.into());
        self
    }

    /// Style override applied to the header and footer labels of `key` only.
    pub fn header_props(mut self, key: impl Into<String>, attrs: impl Into<StyleAttrs>) -> Self {
        self.header_props.insert(key.into(), attrs.into());
        self
    }

    pub fn width(mut self, key: impl Into<String>, width: u16) -> Self {
        self.widths.insert(key.into(), width);
        self
    }

    pub fn row_key(mut self, row_key: RowKey<T>) -> Self {
        self.row_key = row_key;
        self
    }

    pub fn key_field(self, field: impl Into<String>) -> Self {
        self.row_key(RowKey::field(field))
    }

    pub fn key_fn<F, S>(self, f: F) -> Self
    where
        F: Fn(&T, usize) -> S + 'static,
        S: Into<String>,
    {
        self.row_key(RowKey::func(f))
    }

    /// Per-row style, given the row and its resolved key. Layered over striping.
    pub fn row_props<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &str) -> Style + 'static,
    {
        self.row_props = Some(Box::new(f));
        self
    }

    pub fn with_options(mut self, options: DataTableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DataTableOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut DataTableOptions {
        &mut self.options
    }

    /// Resolves the header/footer label for `key`, without the head/foot section style.
    pub fn resolve_header(&self, key: &str) -> ResolvedLabel {
        resolve_label(
            key,
            self.labels.get(key),
            self.header_props.get(key),
            self.options.header_case,
        )
    }
}

impl<T: Record> DataTable<T> {
    /// Resolves one body cell.
    ///
    /// A column without a mapper entry logs a warning and yields an empty cell.
    pub fn resolve_cell(&self, row: &T, key: &str, index: usize) -> ResolvedCell {
        match self
            .mapper
            .resolve_cell(row, key, index, self.widths.get(key).copied())
        {
            Ok(cell) => cell,
            Err(err) => {
                log::warn!("{err}");
                ResolvedCell::empty()
            }
        }
    }

    pub fn resolve_row_key(&self, row: &T, index: usize) -> String {
        self.row_key.resolve(row, index)
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("keys", &self.keys)
            .field("mapper", &self.mapper)
            .field("labels", &self.labels)
            .field("header_props", &self.header_props)
            .field("widths", &self.widths)
            .field("row_key", &self.row_key)
            .field("row_props", &self.row_props.as_ref().map(|_| ".."))
            .field("options", &self.options)
            .finish()
    }
}
