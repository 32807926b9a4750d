// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Budget plan per profile type and the spent-vs-budget bookkeeping.

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{BudgetCategoryEntry, ProfileType, Transaction, TxType};

/// Fixed budget plan for a profile. `spent` is zero everywhere.
pub fn categories_for(profile_type: ProfileType) -> Vec<BudgetCategoryEntry> {
    let mut cats = vec![
        BudgetCategoryEntry::new("Food and Drinks", 10000, "yellow", "food"),
        BudgetCategoryEntry::new("Transportation", 6000, "blue", "transport"),
        BudgetCategoryEntry::new("Shopping", 5000, "red", "shopping"),
    ];
    let extra = match profile_type {
        ProfileType::Student => [
            BudgetCategoryEntry::new("Education", 20000, "purple", "home"),
            BudgetCategoryEntry::new("Entertainment", 3000, "teal", "home"),
        ],
        ProfileType::Business => [
            BudgetCategoryEntry::new("Business Expenses", 30000, "purple", "business"),
            BudgetCategoryEntry::new("Marketing", 15000, "teal", "home"),
        ],
        ProfileType::Housewife => [
            BudgetCategoryEntry::new("Household", 15000, "purple", "home"),
            BudgetCategoryEntry::new("Children", 10000, "teal", "home"),
        ],
        ProfileType::Salary | ProfileType::Default => [
            BudgetCategoryEntry::new("Housing", 18000, "purple", "home"),
            BudgetCategoryEntry::new("Entertainment", 5000, "teal", "home"),
        ],
    };
    cats.extend(extra);
    cats
}

#[derive(Debug, Clone)]
pub struct BudgetTracker {
    profile_type: ProfileType,
    entries: Vec<BudgetCategoryEntry>,
}

impl BudgetTracker {
    pub fn new(profile_type: ProfileType) -> Self {
        Self {
            profile_type,
            entries: categories_for(profile_type),
        }
    }

    pub fn profile_type(&self) -> ProfileType {
        self.profile_type
    }

    pub fn entries(&self) -> &[BudgetCategoryEntry] {
        &self.entries
    }

    pub fn category_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.category.clone()).collect()
    }

    /// Swaps in the plan for `profile_type`. The old list is dropped whole,
    /// so spend recorded against categories the new plan lacks is no longer
    /// shown anywhere in the budget view.
    pub fn set_profile_type(&mut self, profile_type: ProfileType) {
        let dropped: Vec<String> = self
            .entries
            .iter()
            .filter(|e| !e.spent.is_zero())
            .map(|e| e.category.clone())
            .collect();
        self.profile_type = profile_type;
        self.entries = categories_for(profile_type);
        tracing::debug!(profile = %profile_type, ?dropped, "budget plan replaced");
    }

    pub fn recompute(&mut self, transactions: &[Transaction]) {
        for entry in self.entries.iter_mut() {
            entry.spent = Decimal::ZERO;
        }
        for t in transactions.iter().filter(|t| t.r#type == TxType::Expense) {
            if let Some(entry) = self.entries.iter_mut().find(|e| e.category == t.category) {
                entry.spent += t.amount;
            }
        }
    }

    /// Sets the budget of an existing category or appends a new one. The
    /// caller is expected to [`recompute`](Self::recompute) afterwards.
    pub fn add_budget(&mut self, category: &str, amount: Decimal) -> Result<()> {
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::Validation("Please select a category".into()));
        }
        if amount <= Decimal::ZERO {
            return Err(Error::Validation("Please enter a valid budget amount".into()));
        }
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.budget = amount,
            None => self.entries.push(BudgetCategoryEntry {
                category: category.to_string(),
                spent: Decimal::ZERO,
                budget: amount,
                color: "purple".into(),
                icon: "home".into(),
            }),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_plan_has_five_categories_with_common_head() {
        for p in ProfileType::ALL.into_iter().chain([ProfileType::Default]) {
            let cats = categories_for(p);
            assert_eq!(cats.len(), 5);
            assert_eq!(cats[0].category, "Food and Drinks");
            assert!(cats.iter().all(|c| c.spent.is_zero()));
        }
    }

    #[test]
    fn add_budget_rejects_non_positive_amounts() {
        let mut b = BudgetTracker::new(ProfileType::Salary);
        assert!(b.add_budget("Housing", Decimal::ZERO).is_err());
        assert!(b.add_budget("  ", Decimal::ONE).is_err());
        b.add_budget("Housing", Decimal::from(20000)).unwrap();
        assert_eq!(b.entries()[3].budget, Decimal::from(20000));
        b.add_budget("Pets", Decimal::from(700)).unwrap();
        assert_eq!(b.entries().len(), 6);
    }
}
