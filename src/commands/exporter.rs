// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::category_arg;
use crate::ledger::Ledger;
use anyhow::{Context, Result, bail};

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let category = category_arg(sub)?;
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub
        .get_one::<String>("out")
        .context("--out is required")?
        .trim();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let entries = ledger
        .list(category)
        .with_context(|| format!("Load {}", category))?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(category.columns())?;
            for entry in &entries {
                wtr.write_record(entry.cells())?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&entries)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    println!("Exported {} {} entries to {}", entries.len(), category, out);
    Ok(())
}
