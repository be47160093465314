// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed errors for the record store, ledger and aggregation layers.
//!
//! Errors fall in two classes: bad input (unknown category, empty or
//! incomplete payload, out-of-range index), detected before any file is
//! touched, and server faults (unreadable or inaccessible backing files).

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid category")]
    UnknownCategory(String),

    #[error("No data provided")]
    EmptyPayload,

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<String> },

    #[error("Invalid index")]
    InvalidIndex(String),

    #[error("Invalid index {index} (have {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Data file {} is corrupt: {reason}", .path.display())]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TrackerError {
    /// True for errors caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::StoreCorrupt { .. } | Self::Io { .. })
    }

    /// Stable machine-readable code for error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCategory(_) => "INVALID_CATEGORY",
            Self::InvalidIndex(_) => "INVALID_INDEX",
            Self::EmptyPayload | Self::InvalidPayload(_) => "INVALID_PAYLOAD",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Self::StoreCorrupt { .. } => "STORE_CORRUPT",
            Self::Io { .. } => "IO_ERROR",
        }
    }

    /// The rejected input, for errors whose message does not name it.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::UnknownCategory(name) => Some(name),
            Self::InvalidIndex(raw) => Some(raw),
            _ => None,
        }
    }
}
