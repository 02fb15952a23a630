//! `ratatui-datatable-core` renders in-memory rows as a table from a declarative, per-column
//! configuration.
//!
//! The interesting part is resolution, not drawing: for every column key a
//! [`mapper::MapperEntry`] decides what a cell shows and how it is styled, a [`label::Label`] (or
//! the key itself, cased per [`label::HeaderCase`]) decides what the header and footer show, and a
//! [`row_key::RowKey`] decides each row's identity. All of it is pure: the same rows and
//! configuration always resolve to the same [`table::TableModel`].
//!
//! ## Design goals
//!
//! - No state across renders: configuration and rows are passed in every time.
//! - Configuration mistakes never abort a render. A column without a mapper entry renders empty,
//!   is logged through the `log` facade and shows up in [`table::TableModel::diagnostics`].
//! - Closures you pass in are not guarded; if they panic, the panic propagates.
//! - No theme detection: the color mode is injected via [`theme::ModeSource`].
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-datatable`.
//!
//! Useful entry points:
//! - [`table::DataTable`]: the builder, [`table::DataTable::build`] and
//!   [`table::DataTable::render`].
//! - [`value::Record`]: implement it for your row type to use pass-through columns.
//! - [`content::normalize`]: the exact rules for what counts as "no content".
pub mod content;
pub mod error;
pub mod label;
pub mod mapper;
pub mod render;
pub mod row_key;
pub mod style;
pub mod table;
pub mod theme;
pub mod value;
