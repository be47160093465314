// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat-file persistence: one CSV table per category under a storage root.
//!
//! Every load reads the whole file and every save rewrites it. There is no
//! locking between writers and saves are not atomic; the last writer wins.

use crate::error::{Result, TrackerError};
use crate::models::Entry;
use crate::schema::Category;
use csv::ReaderBuilder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open the store at `root`, creating the directory and any missing
    /// category file (header only).
    pub fn open(root: impl Into<PathBuf>) -> Result<Store> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| TrackerError::Io {
            path: root.clone(),
            source,
        })?;
        let store = Store { root };
        for category in Category::ALL {
            store.ensure_file(category)?;
        }
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.root.join(category.file_name())
    }

    fn ensure_file(&self, category: Category) -> Result<()> {
        let path = self.path_for(category);
        if !path.exists() {
            self.save(category, &[])?;
            tracing::info!(%category, path = %path.display(), "initialized data file");
        }
        Ok(())
    }

    /// Load every row of a category in file order.
    pub fn load(&self, category: Category) -> Result<Vec<Entry>> {
        let path = self.path_for(category);
        if !path.exists() {
            self.ensure_file(category)?;
            return Ok(Vec::new());
        }
        let file = File::open(&path).map_err(|source| TrackerError::Io {
            path: path.clone(),
            source,
        })?;
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
        let headers = rdr.headers().map_err(|e| read_error(&path, e))?.clone();
        if headers.is_empty() {
            tracing::debug!(%category, "data file is empty");
            return Ok(Vec::new());
        }

        let positions: Vec<(&str, Option<usize>)> = category
            .columns()
            .iter()
            .map(|&column| {
                let find = |name: &str| headers.iter().position(|h| h.trim() == name);
                let pos = find(column)
                    .or_else(|| category.legacy_header(column).and_then(|legacy| find(legacy)));
                (column, pos)
            })
            .collect();
        if let Some((column, _)) = positions
            .iter()
            .find(|(column, pos)| pos.is_none() && category.required().contains(column))
        {
            return Err(TrackerError::StoreCorrupt {
                path,
                reason: format!("missing column '{}'", column),
            });
        }

        let mut entries = Vec::new();
        for result in rdr.records() {
            let rec = result.map_err(|e| read_error(&path, e))?;
            entries.push(Entry::from_cells(category, |column| {
                positions
                    .iter()
                    .find(|(c, _)| *c == column)
                    .and_then(|(_, pos)| *pos)
                    .and_then(|p| rec.get(p))
                    .map(str::to_string)
            }));
        }
        tracing::debug!(%category, rows = entries.len(), "loaded data file");
        Ok(entries)
    }

    /// Overwrite a category's file with `entries`, in order.
    pub fn save(&self, category: Category, entries: &[Entry]) -> Result<()> {
        debug_assert!(entries.iter().all(|e| e.category() == category));
        let path = self.path_for(category);
        let write = || -> std::result::Result<(), csv::Error> {
            let mut wtr = csv::Writer::from_path(&path)?;
            wtr.write_record(category.columns())?;
            for entry in entries {
                wtr.write_record(entry.cells())?;
            }
            wtr.flush()?;
            Ok(())
        };
        write().map_err(|e| TrackerError::Io {
            path: path.clone(),
            source: e.into(),
        })?;
        tracing::debug!(%category, rows = entries.len(), "saved data file");
        Ok(())
    }
}

fn read_error(path: &Path, e: csv::Error) -> TrackerError {
    let reason = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(source) => TrackerError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => TrackerError::StoreCorrupt {
            path: path.to_path_buf(),
            reason,
        },
    }
}
