use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

use super::column::ColumnSchema;

/// Ordered mapping from column name to its schema entry.
///
/// Columns are emitted in insertion (or document) order. Re-inserting an
/// existing name replaces the entry in place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TableSchema {
    columns: IndexMap<String, ColumnSchema>,
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, name: impl Into<String>, entry: impl Into<ColumnSchema>) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<ColumnSchema>) {
        self.columns.insert(name.into(), entry.into());
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.get(name)
    }

    pub fn iter(&self) -> Iter<'_, String, ColumnSchema> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a TableSchema {
    type Item = (&'a String, &'a ColumnSchema);
    type IntoIter = Iter<'a, String, ColumnSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for TableSchema
where
    K: Into<String>,
    V: Into<ColumnSchema>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut schema = TableSchema::new();
        for (name, entry) in iter {
            schema.insert(name, entry);
        }
        schema
    }
}
