// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Result, TrackerError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Expenses,
    Earnings,
    Investments,
    Goals,
}

const FLOW_COLUMNS: &[&str] = &["date", "amount", "category", "description"];
const INVESTMENT_COLUMNS: &[&str] = &["date", "amount", "type", "name", "notes"];
const INVESTMENT_REQUIRED: &[&str] = &["date", "amount", "type", "name"];
const GOAL_COLUMNS: &[&str] = &["name", "target_amount", "description", "target_date"];
const GOAL_REQUIRED: &[&str] = &["name", "target_amount", "target_date"];

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Expenses,
        Category::Earnings,
        Category::Investments,
        Category::Goals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Expenses => "expenses",
            Category::Earnings => "earnings",
            Category::Investments => "investments",
            Category::Goals => "goals",
        }
    }

    /// Column order of the backing file.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Category::Expenses | Category::Earnings => FLOW_COLUMNS,
            Category::Investments => INVESTMENT_COLUMNS,
            Category::Goals => GOAL_COLUMNS,
        }
    }

    /// Keys an appended entry must carry, in column order.
    pub fn required(self) -> &'static [&'static str] {
        match self {
            Category::Expenses | Category::Earnings => FLOW_COLUMNS,
            Category::Investments => INVESTMENT_REQUIRED,
            Category::Goals => GOAL_REQUIRED,
        }
    }

    /// Older header name still accepted for `column` when reading a file.
    /// Goal files written before descriptions existed carry `notes` instead.
    pub fn legacy_header(self, column: &str) -> Option<&'static str> {
        match (self, column) {
            (Category::Goals, "description") => Some("notes"),
            _ => None,
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| TrackerError::UnknownCategory(s.to_string()))
    }
}

/// Ordered field list for a category name.
pub fn fields_for(name: &str) -> Result<&'static [&'static str]> {
    Ok(name.parse::<Category>()?.columns())
}

