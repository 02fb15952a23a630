use thiserror::Error;

/// Table configuration problems.
///
/// None of these abort a render: the affected cell renders empty and the error is logged and
/// reported in [`crate::table::TableModel::diagnostics`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no mapper entry for column `{key}`")]
    MissingMapper { key: String },
    #[error("column `{key}` is listed more than once")]
    DuplicateColumn { key: String },
}
