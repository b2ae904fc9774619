use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DataTable;
use crate::error::{ChartError, ChartResult};

/// Snapshot of the tables produced by one pipeline evaluation.
///
/// `IndexMap` keeps insertion order so identifier listings in diagnostics are
/// stable across frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataCollection {
    tables: IndexMap<String, DataTable>,
}

impl DataCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a table, replacing any table with the same identifier.
    pub fn insert(&mut self, table: DataTable) -> Option<DataTable> {
        self.tables.insert(table.identifier.clone(), table)
    }

    #[must_use]
    pub fn with_table(mut self, table: DataTable) -> Self {
        self.insert(table);
        self
    }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&DataTable> {
        self.tables.get(identifier)
    }

    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Resolves a configured table reference.
    ///
    /// An empty reference means "nothing to draw" and yields `Ok(None)`.
    pub fn resolve(&self, reference: &str) -> ChartResult<Option<&DataTable>> {
        if reference.is_empty() {
            return Ok(None);
        }
        if self.tables.is_empty() {
            return Err(ChartError::NoTablesAvailable);
        }

        debug!(
            requested = reference,
            available = ?self.tables.keys().collect::<Vec<_>>(),
            "resolving data table"
        );

        self.tables
            .get(reference)
            .map(Some)
            .ok_or_else(|| ChartError::TableNotFound {
                requested: reference.to_owned(),
                available: self.identifiers(),
            })
    }
}

impl FromIterator<DataTable> for DataCollection {
    fn from_iter<T: IntoIterator<Item = DataTable>>(iter: T) -> Self {
        let mut collection = Self::new();
        for table in iter {
            collection.insert(table);
        }
        collection
    }
}
