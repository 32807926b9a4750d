// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The dashboard's in-memory state for one session.
//!
//! `Dashboard` owns the transaction store and everything whose state
//! depends on it. Derived figures are recomputed from the store on demand.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate;
use crate::budget::BudgetTracker;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::{Profile, ProfileType, Reminder, Transaction, TxType};
use crate::utils::format_display_date;

fn seed_tx(id: &str, name: &str, amount: i64, ty: TxType, date: &str, category: &str) -> Transaction {
    Transaction {
        id: id.into(),
        name: name.into(),
        amount: Decimal::from(amount),
        r#type: ty,
        date: date.into(),
        category: category.into(),
    }
}

pub fn seed_transactions() -> Vec<Transaction> {
    use TxType::*;
    vec![
        seed_tx("tx1", "Salary", 50000, Income, "April 1, 2025", "Income"),
        seed_tx("tx2", "Grocery Shopping", 2500, Expense, "April 5, 2025", "Food"),
        seed_tx("tx3", "Electricity Bill", 1800, Expense, "April 6, 2025", "Utilities"),
        seed_tx("tx4", "Movie Tickets", 600, Expense, "April 7, 2025", "Entertainment"),
        seed_tx("tx5", "Freelance Work", 15000, Income, "April 10, 2025", "Income"),
        seed_tx("tx6", "Restaurant", 1200, Expense, "April 12, 2025", "Food"),
    ]
}

pub fn seed_reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: "rem1".into(),
            title: "Electricity Bill".into(),
            amount: Decimal::from(2000),
            due_date: "Apr 8, 2025".into(),
        },
        Reminder {
            id: "rem2".into(),
            title: "Credit Card Payment".into(),
            amount: Decimal::from(8000),
            due_date: "Apr 15, 2025".into(),
        },
    ]
}

/// One past the highest `tx<N>` id in the store, so ids are never reused.
fn next_tx_number(transactions: &[Transaction]) -> u64 {
    transactions
        .iter()
        .filter_map(|t| t.id.strip_prefix("tx")?.parse::<u64>().ok())
        .max()
        .map_or(1, |n| n.saturating_add(1))
}

/// Raw form input for a new transaction, validated on submit.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub name: String,
    pub amount: String,
    pub r#type: TxType,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    profile: Profile,
    transactions: Vec<Transaction>,
    budget: BudgetTracker,
    reminders: Vec<Reminder>,
    current_savings: Decimal,
    next_id: u64,
}

impl Dashboard {
    pub fn new(profile: Profile, transactions: Vec<Transaction>, reminders: Vec<Reminder>) -> Self {
        let mut budget = BudgetTracker::new(profile.r#type);
        budget.recompute(&transactions);
        let next_id = next_tx_number(&transactions);
        Self {
            profile,
            transactions,
            budget,
            reminders,
            current_savings: Decimal::ZERO,
            next_id,
        }
    }

    pub fn seeded(settings: &Settings) -> Self {
        let profile = Profile {
            name: settings.profile_name.clone(),
            r#type: settings.profile_type,
        };
        let mut d = Self::new(profile, seed_transactions(), seed_reminders());
        d.current_savings = settings.current_savings;
        d
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budget(&self) -> &BudgetTracker {
        &self.budget
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn current_savings(&self) -> Decimal {
        self.current_savings
    }

    pub fn summary(&self) -> Summary {
        let income = aggregate::total_by_type(&self.transactions, TxType::Income);
        let expenses = aggregate::total_by_type(&self.transactions, TxType::Expense);
        Summary {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    pub fn recent(&self, n: usize) -> &[Transaction] {
        &self.transactions[..n.min(self.transactions.len())]
    }

    /// Validates and appends. On any validation failure nothing changes.
    pub fn add_transaction(&mut self, draft: TransactionDraft, today: NaiveDate) -> Result<&Transaction> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Please enter a name".into()));
        }
        let amount = draft
            .amount
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|a| *a > Decimal::ZERO)
            .ok_or_else(|| Error::Validation("Please enter a valid amount".into()))?;
        // every derived total is a sum over a subset of one type's amounts
        if aggregate::total_by_type(&self.transactions, draft.r#type)
            .checked_add(amount)
            .is_none()
        {
            return Err(Error::Validation("Please enter a valid amount".into()));
        }
        let category = match draft.r#type {
            TxType::Income => "Income".to_string(),
            TxType::Expense => match draft.category.as_deref().map(str::trim) {
                Some(c) if !c.is_empty() => c.to_string(),
                _ => return Err(Error::Validation("Please select a category".into())),
            },
        };

        let tx = Transaction {
            id: format!("tx{}", self.next_id),
            name: name.to_string(),
            amount,
            r#type: draft.r#type,
            date: format_display_date(today),
            category,
        };
        self.next_id += 1;
        tracing::info!(id = %tx.id, amount = %tx.amount, kind = %tx.r#type, "transaction added");
        self.transactions.push(tx);
        self.budget.recompute(&self.transactions);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn change_profile(&mut self, name: &str, profile_type: ProfileType) {
        let type_changed = self.profile.r#type != profile_type;
        self.profile = Profile {
            name: name.trim().to_string(),
            r#type: profile_type,
        };
        if type_changed {
            self.budget.set_profile_type(profile_type);
        }
        self.budget.recompute(&self.transactions);
    }

    pub fn set_budget(&mut self, category: &str, amount: Decimal) -> Result<()> {
        self.budget.add_budget(category, amount)?;
        self.budget.recompute(&self.transactions);
        Ok(())
    }

    /// Budget categories followed by any other category already used.
    pub fn expense_categories(&self) -> Vec<String> {
        let mut cats = self.budget.category_names();
        for t in self.transactions.iter().filter(|t| t.r#type == TxType::Expense) {
            if !cats.contains(&t.category) {
                cats.push(t.category.clone());
            }
        }
        cats
    }
}
