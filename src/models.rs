// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Result, TrackerError};
use crate::schema::Category;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Amount cell exactly as stored. Parsing is left to the readers so that a
/// malformed value only affects the row it sits in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Amount(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> Option<Decimal> {
        let t = self.0.trim();
        if t.is_empty() {
            return None;
        }
        t.parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_scientific(t).ok())
    }

    /// Numeric value of the cell, including values beyond decimal range.
    pub fn money(&self) -> Option<Money> {
        if let Some(d) = self.value() {
            return Some(Money::Exact(d));
        }
        match self.0.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Some(Money::Wide(f)),
            _ => None,
        }
    }
}

/// A sum of amounts: exact while it fits a `Decimal`, `f64` once it does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Money {
    Exact(Decimal),
    Wide(f64),
}

impl Money {
    pub const ZERO: Money = Money::Exact(Decimal::ZERO);

    pub fn plus(self, other: Money) -> Money {
        match (self, other) {
            (Money::Exact(a), Money::Exact(b)) => a
                .checked_add(b)
                .map(Money::Exact)
                .unwrap_or_else(|| Money::Wide(self.to_f64() + other.to_f64())),
            _ => Money::Wide(self.to_f64() + other.to_f64()),
        }
    }

    pub fn minus(self, other: Money) -> Money {
        match (self, other) {
            (Money::Exact(a), Money::Exact(b)) => a
                .checked_sub(b)
                .map(Money::Exact)
                .unwrap_or_else(|| Money::Wide(self.to_f64() - other.to_f64())),
            _ => Money::Wide(self.to_f64() - other.to_f64()),
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Money::Exact(d) => d.to_f64().unwrap_or_default(),
            Money::Wide(f) => f,
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let t = self.0.trim();
        if t.is_empty() {
            return s.serialize_none();
        }
        if let Ok(i) = t.parse::<i64>() {
            return s.serialize_i64(i);
        }
        match t.parse::<f64>() {
            Ok(f) if f.is_finite() => s.serialize_f64(f),
            _ => s.serialize_str(&self.0),
        }
    }
}

/// Expense or earning row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flow {
    pub date: String,
    pub amount: Amount,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investment {
    pub date: String,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: Amount,
    pub description: Option<String>,
    pub target_date: String,
}

/// One row of a category table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Expense(Flow),
    Earning(Flow),
    Investment(Investment),
    Goal(Goal),
}

/// Textual form of a JSON value as written to a cell.
pub fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Entry {
    /// Build an entry from untyped request fields.
    ///
    /// Every required key of the category must be present; values of any
    /// JSON type are accepted and stored as text. Keys that are not columns
    /// of the category are ignored.
    pub fn from_fields(category: Category, fields: &Map<String, Value>) -> Result<Entry> {
        if fields.is_empty() {
            return Err(TrackerError::EmptyPayload);
        }
        let missing: Vec<String> = category
            .required()
            .iter()
            .filter(|k| !fields.contains_key(**k))
            .map(|k| k.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TrackerError::Validation { missing });
        }
        Ok(Self::from_cells(category, |column| {
            fields.get(column).map(cell_text)
        }))
    }

    /// Build an entry from a cell lookup keyed by column name.
    pub(crate) fn from_cells(category: Category, cell: impl Fn(&str) -> Option<String>) -> Entry {
        let text = |c: &str| cell(c).unwrap_or_default();
        let optional = |c: &str| cell(c).filter(|s| !s.is_empty());
        let flow = || Flow {
            date: text("date"),
            amount: Amount::new(text("amount")),
            category: text("category"),
            description: text("description"),
        };
        match category {
            Category::Expenses => Entry::Expense(flow()),
            Category::Earnings => Entry::Earning(flow()),
            Category::Investments => Entry::Investment(Investment {
                date: text("date"),
                amount: Amount::new(text("amount")),
                kind: text("type"),
                name: text("name"),
                notes: optional("notes"),
            }),
            Category::Goals => Entry::Goal(Goal {
                name: text("name"),
                target_amount: Amount::new(text("target_amount")),
                description: optional("description"),
                target_date: text("target_date"),
            }),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Entry::Expense(_) => Category::Expenses,
            Entry::Earning(_) => Category::Earnings,
            Entry::Investment(_) => Category::Investments,
            Entry::Goal(_) => Category::Goals,
        }
    }

    /// Cells in the column order of the entry's category.
    pub fn cells(&self) -> Vec<&str> {
        match self {
            Entry::Expense(f) | Entry::Earning(f) => vec![
                f.date.as_str(),
                f.amount.as_str(),
                f.category.as_str(),
                f.description.as_str(),
            ],
            Entry::Investment(i) => vec![
                i.date.as_str(),
                i.amount.as_str(),
                i.kind.as_str(),
                i.name.as_str(),
                i.notes.as_deref().unwrap_or(""),
            ],
            Entry::Goal(g) => vec![
                g.name.as_str(),
                g.target_amount.as_str(),
                g.description.as_deref().unwrap_or(""),
                g.target_date.as_str(),
            ],
        }
    }

    /// Money amount of the row; goals carry a target instead.
    pub fn amount(&self) -> Option<&Amount> {
        match self {
            Entry::Expense(f) | Entry::Earning(f) => Some(&f.amount),
            Entry::Investment(i) => Some(&i.amount),
            Entry::Goal(_) => None,
        }
    }

    /// Date-like cells of the row, keyed by column name.
    pub fn dates(&self) -> Vec<(&'static str, &str)> {
        match self {
            Entry::Expense(f) | Entry::Earning(f) => vec![("date", f.date.as_str())],
            Entry::Investment(i) => vec![("date", i.date.as_str())],
            Entry::Goal(g) => vec![("target_date", g.target_date.as_str())],
        }
    }
}
