use std::fmt;

use crate::value::Record;

pub type RowKeyFn<T> = Box<dyn Fn(&T, usize) -> String>;

/// How a row's identity is derived.
///
/// Identities must be unique within one render for stable diffing. Duplicates are the caller's
/// responsibility and are neither detected nor rejected here.
pub enum RowKey<T> {
    /// The row's position, stringified.
    Index,
    /// The stringified value of a field.
    Field(String),
    Func(RowKeyFn<T>),
}

impl<T> Default for RowKey<T> {
    fn default() -> Self {
        RowKey::Index
    }
}

impl<T> RowKey<T> {
    pub fn field(name: impl Into<String>) -> Self {
        RowKey::Field(name.into())
    }

    pub fn func<F, S>(f: F) -> Self
    where
        F: Fn(&T, usize) -> S + 'static,
        S: Into<String>,
    {
        RowKey::Func(Box::new(move |row, index| f(row, index).into()))
    }
}

impl<T: Record> RowKey<T> {
    pub fn resolve(&self, row: &T, index: usize) -> String {
        match self {
            RowKey::Index => index.to_string(),
            RowKey::Field(name) => row
                .field(name)
                .map(|v| v.to_key_string())
                .unwrap_or_default(),
            RowKey::Func(f) => f(row, index),
        }
    }
}

impl<T> fmt::Debug for RowKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Index => f.write_str("Index"),
            RowKey::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowKey::Func(_) => f.write_str("Func(..)"),
        }
    }
}
