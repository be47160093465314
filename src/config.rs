// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::store::Store;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Fintrack", "fintrack"));

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Platform data directory used when no `--data-dir` is given.
pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

/// Storage root from the command line (or `FINTRACK_DATA_DIR`), falling back
/// to the platform data directory.
pub fn data_dir(m: &clap::ArgMatches) -> Result<PathBuf> {
    match m.get_one::<String>("data-dir") {
        Some(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir.trim())),
        _ => default_data_dir(),
    }
}

pub fn open_store(m: &clap::ArgMatches) -> Result<Store> {
    let dir = data_dir(m)?;
    Store::open(&dir).with_context(|| format!("Open data dir {}", dir.display()))
}

pub fn bind_addr(m: &clap::ArgMatches) -> Result<SocketAddr> {
    let raw = m
        .get_one::<String>("bind")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    raw.parse::<SocketAddr>()
        .with_context(|| format!("Invalid bind address '{}', expected HOST:PORT", raw))
}
