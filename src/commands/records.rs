// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::category_arg;
use crate::ledger::Ledger;
use crate::utils::{maybe_print_json, parse_assignments, pretty_table};
use anyhow::{Context, Result};

pub fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let category = category_arg(sub)?;
    let entries = ledger
        .list(category)
        .with_context(|| format!("Load {}", category))?;
    if !maybe_print_json(json_flag, jsonl_flag, &entries)? {
        let mut headers = vec!["#"];
        headers.extend_from_slice(category.columns());
        let rows: Vec<Vec<String>> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let mut row = vec![i.to_string()];
                row.extend(e.cells().into_iter().map(str::to_string));
                row
            })
            .collect();
        println!("{}", pretty_table(&headers, rows));
    }
    Ok(())
}

pub fn add(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let category = category_arg(sub)?;
    let fields = parse_assignments(sub.get_many::<String>("set").into_iter().flatten())?;
    ledger.append(category, &fields)?;
    println!("Added {} entry", category);
    Ok(())
}

pub fn rm(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let category = category_arg(sub)?;
    let index = *sub.get_one::<usize>("index").context("index is required")?;
    let removed = ledger.delete_at(category, index)?;
    println!(
        "Removed {} entry {}: {}",
        category,
        index,
        removed.cells().join(", ")
    );
    Ok(())
}
