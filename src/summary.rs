// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard totals and savings-goal progress.
//!
//! Progress assumes 30% of cumulative net savings (earnings minus expenses)
//! is earmarked toward each goal, so a goal is fully funded once net savings
//! reach `target_amount / 0.3`. Sums run in exact decimal and are converted
//! to `f64` only for the payload; a sum that leaves decimal range carries on
//! in `f64`.

use crate::error::Result;
use crate::models::{Entry, Goal, Money};
use crate::schema::Category;
use crate::store::Store;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// 0.3
pub const GOAL_SAVINGS_SHARE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_expenses: f64,
    pub total_earnings: f64,
    pub total_investments: f64,
    pub expense_categories: BTreeMap<String, f64>,
    /// Goals still below 100%; fully funded goals are left out.
    pub goals_progress: Vec<GoalProgress>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub name: String,
    pub progress: f64,
}

/// A goal with its raw fields and derived progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalStatus {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress: f64,
}

/// Percentage of a goal's earmarked savings covered by `current_savings`,
/// capped at 100. Zero when the target is not positive. `None` only on
/// decimal overflow.
pub fn goal_progress(target_amount: Decimal, current_savings: Decimal) -> Option<Decimal> {
    let needed = target_amount.checked_div(GOAL_SAVINGS_SHARE)?;
    if needed <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }
    let pct = current_savings.checked_div(needed)?.checked_mul(HUNDRED)?;
    Some(pct.min(HUNDRED))
}

/// `goal_progress` for amounts outside decimal range.
fn wide_goal_progress(target_amount: f64, current_savings: f64) -> Option<f64> {
    let needed = target_amount / 0.3;
    if needed <= 0.0 {
        return Some(0.0);
    }
    let pct = current_savings / needed * 100.0;
    pct.is_finite().then(|| pct.min(100.0))
}

fn progress_of(target_amount: Money, current_savings: Money) -> Option<Money> {
    if let (Money::Exact(target), Money::Exact(savings)) = (target_amount, current_savings) {
        if let Some(p) = goal_progress(target, savings) {
            return Some(Money::Exact(p));
        }
    }
    wide_goal_progress(target_amount.to_f64(), current_savings.to_f64()).map(Money::Wide)
}

fn is_funded(progress: Money) -> bool {
    match progress {
        Money::Exact(p) => p >= HUNDRED,
        Money::Wide(p) => p >= 100.0,
    }
}

/// Contents of all four categories as read for one aggregation.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub expenses: Vec<Entry>,
    pub earnings: Vec<Entry>,
    pub investments: Vec<Entry>,
    pub goals: Vec<Entry>,
}

impl Snapshot {
    /// Read every category; unreadable ones count as empty.
    pub fn load(store: &Store) -> Snapshot {
        Snapshot {
            expenses: load_or_empty(store, Category::Expenses),
            earnings: load_or_empty(store, Category::Earnings),
            investments: load_or_empty(store, Category::Investments),
            goals: load_or_empty(store, Category::Goals),
        }
    }

    pub fn current_savings(&self) -> Money {
        total(&self.earnings).minus(total(&self.expenses))
    }

    pub fn dashboard(&self) -> Dashboard {
        let mut by_label: BTreeMap<String, Money> = BTreeMap::new();
        for (label, amount) in self.expenses.iter().enumerate().filter_map(|(i, e)| match e {
            Entry::Expense(f) => amount_of(i, e).map(|a| (f.category.clone(), a)),
            _ => None,
        }) {
            let sum = by_label.entry(label).or_insert(Money::ZERO);
            *sum = sum.plus(amount);
        }

        let goals_progress = self
            .progressed_goals()
            .into_iter()
            .filter(|(_, progress)| !is_funded(*progress))
            .map(|(goal, progress)| GoalProgress {
                name: goal.name.clone(),
                progress: progress.to_f64(),
            })
            .collect();

        Dashboard {
            total_expenses: total(&self.expenses).to_f64(),
            total_earnings: total(&self.earnings).to_f64(),
            total_investments: total(&self.investments).to_f64(),
            expense_categories: by_label
                .into_iter()
                .map(|(label, sum)| (label, sum.to_f64()))
                .collect(),
            goals_progress,
        }
    }

    /// Every goal with its progress, fully funded ones included.
    pub fn goal_statuses(&self) -> Vec<GoalStatus> {
        self.progressed_goals()
            .into_iter()
            .map(|(goal, progress)| GoalStatus {
                goal: goal.clone(),
                progress: progress.to_f64(),
            })
            .collect()
    }

    fn progressed_goals(&self) -> Vec<(&Goal, Money)> {
        let savings = self.current_savings();
        self.goals
            .iter()
            .filter_map(|e| match e {
                Entry::Goal(g) => Some(g),
                _ => None,
            })
            .filter_map(|goal| {
                let progress = goal
                    .target_amount
                    .money()
                    .and_then(|target| progress_of(target, savings));
                if progress.is_none() {
                    tracing::warn!(
                        goal = %goal.name,
                        target_amount = goal.target_amount.as_str(),
                        "skipping goal with unusable target amount"
                    );
                }
                progress.map(|p| (goal, p))
            })
            .collect()
    }
}

/// Dashboard over the store's current contents. Never fails.
pub fn dashboard(store: &Store) -> Dashboard {
    let snapshot = Snapshot::load(store);
    let dash = snapshot.dashboard();
    tracing::debug!(
        expenses = snapshot.expenses.len(),
        earnings = snapshot.earnings.len(),
        investments = snapshot.investments.len(),
        goals = snapshot.goals.len(),
        "dashboard computed"
    );
    dash
}

/// All goals with progress. An unreadable goals file is an error; unreadable
/// expense or earning files count as empty.
pub fn goals_with_progress(store: &Store) -> Result<Vec<GoalStatus>> {
    let goals = store.load(Category::Goals)?;
    let snapshot = Snapshot {
        expenses: load_or_empty(store, Category::Expenses),
        earnings: load_or_empty(store, Category::Earnings),
        investments: Vec::new(),
        goals,
    };
    Ok(snapshot.goal_statuses())
}

fn load_or_empty(store: &Store, category: Category) -> Vec<Entry> {
    store.load(category).unwrap_or_else(|e| {
        tracing::warn!(%category, error = %e, "treating unreadable data file as empty");
        Vec::new()
    })
}

fn total(entries: &[Entry]) -> Money {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| amount_of(i, e))
        .fold(Money::ZERO, Money::plus)
}

fn amount_of(index: usize, entry: &Entry) -> Option<Money> {
    let amount = entry.amount()?;
    let value = amount.money();
    if value.is_none() {
        tracing::warn!(
            category = %entry.category(),
            index,
            amount = amount.as_str(),
            "skipping row with non-numeric amount"
        );
    }
    value
}
