// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    Expense,
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxType::Income => f.write_str("income"),
            TxType::Expense => f.write_str("expense"),
        }
    }
}

impl FromStr for TxType {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxType::Income),
            "expense" => Ok(TxType::Expense),
            other => Err(crate::error::Error::InvalidData(format!(
                "unknown transaction type '{}' (use income|expense)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub r#type: TxType,
    pub date: String, // "April 1, 2025"
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    #[default]
    Salary,
    Student,
    Business,
    Housewife,
    Default,
}

impl ProfileType {
    pub const ALL: [ProfileType; 4] = [
        ProfileType::Salary,
        ProfileType::Student,
        ProfileType::Business,
        ProfileType::Housewife,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProfileType::Salary => "Salary Employee",
            ProfileType::Student => "Student",
            ProfileType::Business => "Business Owner",
            ProfileType::Housewife => "Housewife",
            ProfileType::Default => "User",
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProfileType::Salary => "salary",
            ProfileType::Student => "student",
            ProfileType::Business => "business",
            ProfileType::Housewife => "housewife",
            ProfileType::Default => "default",
        };
        f.write_str(s)
    }
}

/// Unknown names fall back to [`ProfileType::Default`], never an error.
impl FromStr for ProfileType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "salary" => ProfileType::Salary,
            "student" => ProfileType::Student,
            "business" => ProfileType::Business,
            "housewife" => ProfileType::Housewife,
            _ => ProfileType::Default,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub r#type: ProfileType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategoryEntry {
    pub category: String,
    pub spent: Decimal,
    pub budget: Decimal,
    pub color: String,
    pub icon: String,
}

impl BudgetCategoryEntry {
    pub fn new(category: &str, budget: i64, color: &str, icon: &str) -> Self {
        Self {
            category: category.to_string(),
            spent: Decimal::ZERO,
            budget: Decimal::from(budget),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Distance to the budget line, either left to spend or overshoot.
    pub fn remaining(&self) -> Decimal {
        (self.budget - self.spent).abs()
    }

    pub fn percentage(&self) -> Decimal {
        if self.budget.is_zero() {
            return Decimal::ZERO;
        }
        self.spent / self.budget * Decimal::ONE_HUNDRED
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub due_date: String, // "Apr 8, 2025"
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowPoint {
    pub name: String,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub name: String,
    pub value: Decimal,
    pub percentage: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub name: String,
    pub savings: Decimal,
}

/// Discretionary spend and what a 15% trim would save on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsOpportunity {
    pub category: String,
    pub current: Decimal,
    pub potential: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingPoint {
    pub date: String,
    pub spending: Decimal,
    pub optimal: Decimal,
}
