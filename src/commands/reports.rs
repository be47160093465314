// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::summary;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn dashboard(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let dash = summary::dashboard(ledger.store());
    if maybe_print_json(json_flag, false, &dash)? {
        return Ok(());
    }

    let totals = vec![
        vec!["Earnings".to_string(), fmt_amount(dash.total_earnings)],
        vec!["Expenses".to_string(), fmt_amount(dash.total_expenses)],
        vec![
            "Net savings".to_string(),
            fmt_amount(dash.total_earnings - dash.total_expenses),
        ],
        vec!["Investments".to_string(), fmt_amount(dash.total_investments)],
    ];
    println!("{}", pretty_table(&["Total", "Amount"], totals));

    if !dash.expense_categories.is_empty() {
        let mut items: Vec<_> = dash.expense_categories.iter().collect();
        items.sort_by(|a, b| b.1.total_cmp(a.1));
        let data = items
            .into_iter()
            .map(|(cat, amt)| vec![cat.clone(), fmt_amount(*amt)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }

    if !dash.goals_progress.is_empty() {
        let data = dash
            .goals_progress
            .iter()
            .map(|g| vec![g.name.clone(), format!("{:.1}%", g.progress)])
            .collect();
        println!("{}", pretty_table(&["Open goal", "Progress"], data));
    }
    Ok(())
}

pub fn goals(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let statuses = summary::goals_with_progress(ledger.store()).context("Load goals")?;
    if !maybe_print_json(json_flag, jsonl_flag, &statuses)? {
        let data = statuses
            .iter()
            .map(|s| {
                vec![
                    s.goal.name.clone(),
                    s.goal.target_amount.as_str().to_string(),
                    s.goal.target_date.clone(),
                    format!("{:.1}%", s.progress),
                    s.goal.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Goal", "Target", "Target date", "Progress", "Description"],
                data
            )
        );
    }
    Ok(())
}
