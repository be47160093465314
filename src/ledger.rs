// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Result, TrackerError};
use crate::models::Entry;
use crate::schema::Category;
use crate::store::Store;
use serde_json::{Map, Value};

/// List / append / delete-by-position over the record store.
///
/// Positions are only meaningful for the load they came from: a delete that
/// races a concurrent append may remove a different row.
#[derive(Debug, Clone)]
pub struct Ledger {
    store: Store,
}

impl Ledger {
    pub fn new(store: Store) -> Self {
        Ledger { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn list(&self, category: Category) -> Result<Vec<Entry>> {
        self.store.load(category)
    }

    /// Validate `fields` against the category schema and append the entry.
    /// Nothing is read or written when validation fails.
    pub fn append(&self, category: Category, fields: &Map<String, Value>) -> Result<()> {
        let entry = Entry::from_fields(category, fields)?;
        self.push(entry)
    }

    /// Append an already validated entry to its category.
    pub fn push(&self, entry: Entry) -> Result<()> {
        let category = entry.category();
        let mut entries = self.store.load(category)?;
        entries.push(entry);
        self.store.save(category, &entries)?;
        tracing::info!(%category, rows = entries.len(), "entry added");
        Ok(())
    }

    /// Remove the entry at `index`, returning it.
    pub fn delete_at(&self, category: Category, index: usize) -> Result<Entry> {
        let mut entries = self.store.load(category)?;
        if index >= entries.len() {
            return Err(TrackerError::IndexOutOfRange {
                index,
                len: entries.len(),
            });
        }
        let removed = entries.remove(index);
        self.store.save(category, &entries)?;
        tracing::info!(%category, index, "entry deleted");
        Ok(removed)
    }
}
