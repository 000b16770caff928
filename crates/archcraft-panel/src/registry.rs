//! Ordered in-memory record collection shared by the project and user registries.

use crate::source::DataSource;

/// Why a registry has no rows to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyState {
    #[default]
    NoRecords,
    LoadFailed,
}

/// A record with a string lookup key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for archcraft_common::Project {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for archcraft_common::User {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct Registry<R> {
    records: Vec<R>,
    empty_state: EmptyState,
}

impl<R> Default for Registry<R> {
    fn default() -> Self {
        Self { records: Vec::new(), empty_state: EmptyState::NoRecords }
    }
}

impl<R: Keyed> Registry<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn empty_state(&self) -> EmptyState {
        self.empty_state
    }

    pub fn find(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn push(&mut self, record: R) {
        self.records.push(record);
        self.empty_state = EmptyState::NoRecords;
    }

    /// Drop every record with `key`. Returns how many were removed.
    pub fn remove_key(&mut self, key: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.key() != key);
        before - self.records.len()
    }

    /// Replace the collection from `source`. Failures are logged and leave the
    /// registry empty with [`EmptyState::LoadFailed`].
    pub async fn load_from(&mut self, kind: &str, source: &dyn DataSource<R>) -> bool {
        match source.fetch().await {
            Ok(records) => {
                tracing::info!("Loaded {} {} record(s)", records.len(), kind);
                self.records = records;
                self.empty_state = EmptyState::NoRecords;
                true
            }
            Err(e) => {
                tracing::error!("Error loading {}: {}", kind, e);
                self.records.clear();
                self.empty_state = EmptyState::LoadFailed;
                false
            }
        }
    }
}
