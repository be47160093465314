// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Entry;
use crate::schema::Category;
use crate::store::Store;
use crate::utils::{parse_date, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

/// Problems that the dashboard would silently skip over.
pub fn check(store: &Store) -> Vec<Issue> {
    let mut issues = Vec::new();
    for category in Category::ALL {
        let entries = match store.load(category) {
            Ok(entries) => entries,
            Err(e) => {
                issues.push(Issue {
                    kind: "unreadable_file",
                    detail: e.to_string(),
                });
                continue;
            }
        };
        for (i, entry) in entries.iter().enumerate() {
            let (column, amount) = match entry {
                Entry::Goal(g) => ("target_amount", &g.target_amount),
                Entry::Expense(f) | Entry::Earning(f) => ("amount", &f.amount),
                Entry::Investment(inv) => ("amount", &inv.amount),
            };
            if amount.money().is_none() {
                issues.push(Issue {
                    kind: "non_numeric_amount",
                    detail: format!("{}[{}] {} '{}'", category, i, column, amount.as_str()),
                });
            }
            for (column, date) in entry.dates() {
                if !date.trim().is_empty() && parse_date(date.trim()).is_err() {
                    issues.push(Issue {
                        kind: "unparseable_date",
                        detail: format!("{}[{}] {} '{}'", category, i, column, date),
                    });
                }
            }
        }
    }
    issues
}

pub fn handle(store: &Store) -> Result<()> {
    let issues = check(store);
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
