use std::collections::HashSet;

use ratatui::style::Style;
use ratatui::text::Line;

use super::DataTable;
use crate::error::ConfigError;
use crate::label::ResolvedLabel;
use crate::mapper::ResolvedCell;
use crate::style::StyleAttrs;
use crate::value::Record;

/// A resolved body row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRow {
    /// Row identity, see [`crate::row_key::RowKey`].
    pub key: String,
    pub index: usize,
    /// Whether the stripe background applies.
    pub striped: bool,
    /// Style from `row_props`.
    pub style: Style,
    pub cells: Vec<ResolvedCell>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableBody {
    /// No rows and `show_empty` unset: only the placeholder is shown.
    Empty(Line<'static>),
    Populated {
        header: Option<Vec<ResolvedLabel>>,
        rows: Vec<ResolvedRow>,
        footer: Option<Vec<ResolvedLabel>>,
    },
}

/// The output of one render pass, before painting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableModel {
    pub title: Option<String>,
    pub right: Option<Line<'static>>,
    pub columns: Vec<String>,
    /// Configured width per column, in column order.
    pub widths: Vec<Option<u16>>,
    pub body: TableBody,
    pub loading: bool,
    pub diagnostics: Vec<ConfigError>,
}

impl TableModel {
    pub fn is_empty_state(&self) -> bool {
        matches!(self.body, TableBody::Empty(_))
    }

    pub fn rows(&self) -> &[ResolvedRow] {
        match &self.body {
            TableBody::Empty(_) => &[],
            TableBody::Populated { rows, .. } => rows,
        }
    }

    pub fn row_keys(&self) -> Vec<&str> {
        self.rows().iter().map(|r| r.key.as_str()).collect()
    }

    pub fn header(&self) -> Option<&[ResolvedLabel]> {
        match &self.body {
            TableBody::Populated {
                header: Some(header),
                ..
            } => Some(header),
            _ => None,
        }
    }

    pub fn footer(&self) -> Option<&[ResolvedLabel]> {
        match &self.body {
            TableBody::Populated {
                footer: Some(footer),
                ..
            } => Some(footer),
            _ => None,
        }
    }
}

impl<T: Record> DataTable<T> {
    /// Resolves `rows` against the current configuration.
    ///
    /// Configuration errors never abort the pass: affected cells are empty, each error is logged
    /// once and listed in [`TableModel::diagnostics`].
    pub fn build(&self, rows: &[T]) -> TableModel {
        let options = &self.options;
        let mut diagnostics = Vec::new();

        let body = if rows.is_empty() && !options.show_empty {
            TableBody::Empty(options.empty_text.clone())
        } else {
            self.check_columns(&mut diagnostics);

            let header = options
                .show_header
                .then(|| self.section_labels(options.header_style));
            let footer = options
                .show_footer
                .then(|| self.section_labels(options.footer_style));
            let rows = rows
                .iter()
                .enumerate()
                .map(|(index, row)| self.build_row(row, index))
                .collect();
            TableBody::Populated {
                header,
                rows,
                footer,
            }
        };

        TableModel {
            title: options.title.clone(),
            right: options.right.clone(),
            columns: self.keys.clone(),
            widths: self
                .keys
                .iter()
                .map(|k| self.widths.get(k).copied())
                .collect(),
            body,
            loading: options.is_loading,
            diagnostics,
        }
    }

    fn build_row(&self, row: &T, index: usize) -> ResolvedRow {
        let key = self.row_key.resolve(row, index);
        let cells = self
            .keys
            .iter()
            .map(|k| {
                // Missing entries were already reported by `check_columns`.
                self.mapper
                    .resolve_cell(row, k, index, self.widths.get(k).copied())
                    .unwrap_or_default()
            })
            .collect();
        let style = self
            .row_props
            .as_ref()
            .map(|f| f(row, &key))
            .unwrap_or_default();
        ResolvedRow {
            striped: self.options.striped && index % 2 == 1,
            key,
            index,
            style,
            cells,
        }
    }

    fn section_labels(&self, section_style: Style) -> Vec<ResolvedLabel> {
        self.keys
            .iter()
            .map(|k| {
                let label = self.resolve_header(k);
                ResolvedLabel {
                    content: label.content,
                    attrs: StyleAttrs::from(section_style).merge(label.attrs),
                }
            })
            .collect()
    }

    fn check_columns(&self, diagnostics: &mut Vec<ConfigError>) {
        let mut seen = HashSet::new();
        for key in &self.keys {
            if !seen.insert(key.as_str()) {
                report(
                    diagnostics,
                    ConfigError::DuplicateColumn { key: key.clone() },
                );
            }
            if !self.mapper.contains_key(key) {
                report(diagnostics, ConfigError::MissingMapper { key: key.clone() });
            }
        }

        let unknown = self
            .mapper
            .keys()
            .chain(self.labels.keys().map(String::as_str))
            .chain(self.header_props.keys().map(String::as_str))
            .chain(self.widths.keys().map(String::as_str))
            .filter(|k| !seen.contains(k));
        for key in unknown {
            log::debug!("column config for `{key}` ignored: not in the column list");
        }
    }
}

fn report(diagnostics: &mut Vec<ConfigError>, err: ConfigError) {
    if diagnostics.contains(&err) {
        return;
    }
    log::warn!("{err}");
    diagnostics.push(err);
}
