//! `ratatui-datatable`: declarative data tables for ratatui.
//!
//! Describe each column once (how to get a cell from a row, how to style it, what the header
//! says) and hand the table your rows on every frame:
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use ratatui::style::{Style, Stylize};
//! use ratatui_datatable::prelude::*;
//!
//! let table: DataTable<Row> = DataTable::new()
//!     .column("id", MapperEntry::pass_through())
//!     .column(
//!         "title",
//!         MapperEntry::pass_through().with_style(Style::new().green()),
//!     )
//!     .key_field("id");
//!
//! let rows = vec![Row::new().with("id", 1).with("title", "foobar")];
//! let mut buf = Buffer::empty(Rect::new(0, 0, 20, 2));
//! table.render(&rows, buf.area, &mut buf, &Theme::default());
//! ```
//!
//! The heavy lifting lives in `ratatui-datatable-core`; this crate re-exports it.
pub use ratatui_datatable_core::content;
pub use ratatui_datatable_core::error;
pub use ratatui_datatable_core::label;
pub use ratatui_datatable_core::mapper;
pub use ratatui_datatable_core::render;
pub use ratatui_datatable_core::row_key;
pub use ratatui_datatable_core::style;
pub use ratatui_datatable_core::table;
pub use ratatui_datatable_core::theme;
pub use ratatui_datatable_core::value;

pub mod prelude {
    pub use ratatui_datatable_core::content::CellValue;
    pub use ratatui_datatable_core::content::Content;
    pub use ratatui_datatable_core::error::ConfigError;
    pub use ratatui_datatable_core::label::HeaderCase;
    pub use ratatui_datatable_core::label::Label;
    pub use ratatui_datatable_core::mapper::Mapper;
    pub use ratatui_datatable_core::mapper::MapperEntry;
    pub use ratatui_datatable_core::row_key::RowKey;
    pub use ratatui_datatable_core::style::StyleAttrs;
    pub use ratatui_datatable_core::style::TextTransform;
    pub use ratatui_datatable_core::table::DataTable;
    pub use ratatui_datatable_core::table::DataTableOptions;
    pub use ratatui_datatable_core::table::TableModel;
    pub use ratatui_datatable_core::theme::ColorMode;
    pub use ratatui_datatable_core::theme::ModeSource;
    pub use ratatui_datatable_core::theme::Theme;
    pub use ratatui_datatable_core::value::Record;
    pub use ratatui_datatable_core::value::Row;
    pub use ratatui_datatable_core::value::Value;
}
