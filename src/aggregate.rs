// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures over the transaction list.
//!
//! Everything here is a total function: empty input gives zero or an
//! empty collection, and dates that do not parse are skipped rather than
//! reported.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    CashFlowPoint, ExpenseShare, SavingsOpportunity, SpendingPoint, Transaction, TxType,
};
use crate::utils::{month_prefix, parse_display_date};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Pie slice colours, assigned in category order and cycled.
pub const PALETTE: [&str; 8] = [
    "#FFC107", "#2196F3", "#673AB7", "#009688", "#F44336", "#4CAF50", "#FF9800", "#9C27B0",
];

pub const DISCRETIONARY: [&str; 3] = ["Shopping", "Entertainment", "Food and Drinks"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Week,
    Month,
}

impl Timeframe {
    pub fn days(&self) -> i64 {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
        }
    }
}

pub fn total_by_type(transactions: &[Transaction], ty: TxType) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.r#type == ty)
        .map(|t| t.amount)
        .sum()
}

pub fn balance(transactions: &[Transaction]) -> Decimal {
    total_by_type(transactions, TxType::Income) - total_by_type(transactions, TxType::Expense)
}

pub fn expenses_by_category(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.r#type == TxType::Expense) {
        *agg.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
    }
    agg
}

/// One point per label, in label order. A transaction counts toward the
/// label matching the first three letters of its date string.
pub fn cash_flow_by_month<S: AsRef<str>>(
    transactions: &[Transaction],
    labels: &[S],
) -> Vec<CashFlowPoint> {
    let mut points: Vec<CashFlowPoint> = labels
        .iter()
        .map(|l| CashFlowPoint {
            name: l.as_ref().to_string(),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        })
        .collect();

    for t in transactions {
        let Some(prefix) = month_prefix(&t.date) else {
            tracing::debug!(id = %t.id, date = %t.date, "date has no month prefix, not bucketed");
            continue;
        };
        if let Some(p) = points.iter_mut().find(|p| p.name == prefix) {
            match t.r#type {
                TxType::Income => p.income += t.amount,
                TxType::Expense => p.expense += t.amount,
            }
        }
    }
    points
}

pub fn expense_share(transactions: &[Transaction]) -> Vec<ExpenseShare> {
    let by_cat = expenses_by_category(transactions);
    let total: Decimal = by_cat.values().copied().sum();
    if total.is_zero() {
        return Vec::new();
    }
    by_cat
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| ExpenseShare {
            percentage: (value / total * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
            color: PALETTE[i % PALETTE.len()].to_string(),
            name,
            value,
        })
        .collect()
}

/// What trimming discretionary spend by 15% would free up, in whole units.
pub fn potential_savings(transactions: &[Transaction]) -> Decimal {
    let by_cat = expenses_by_category(transactions);
    let rate = Decimal::new(15, 2);
    DISCRETIONARY
        .iter()
        .filter_map(|c| by_cat.get(*c))
        .map(|v| *v * rate)
        .sum::<Decimal>()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Per-category breakdown of [`potential_savings`], food first, skipping
/// categories with no spend.
pub fn savings_opportunities(transactions: &[Transaction]) -> Vec<SavingsOpportunity> {
    let by_cat = expenses_by_category(transactions);
    let rate = Decimal::new(15, 2);
    ["Food and Drinks", "Shopping", "Entertainment"]
        .iter()
        .filter_map(|c| {
            let current = *by_cat.get(*c)?;
            (current > Decimal::ZERO).then(|| SavingsOpportunity {
                category: c.to_string(),
                current,
                potential: (current * rate)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            })
        })
        .collect()
}

/// [`potential_savings`] as a percentage of all expenses, to one decimal.
/// Zero when there are no expenses.
pub fn savings_percentage(transactions: &[Transaction]) -> Decimal {
    let expenses = total_by_type(transactions, TxType::Expense);
    if expenses.is_zero() {
        return Decimal::ZERO;
    }
    (potential_savings(transactions) / expenses * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Day-by-day expense totals for the trailing window ending `today`, with a
/// flat target line 15% under the current daily average.
pub fn daily_spending(
    transactions: &[Transaction],
    today: NaiveDate,
    timeframe: Timeframe,
) -> Vec<SpendingPoint> {
    let periods = timeframe.days();
    let monthly_expenses = total_by_type(transactions, TxType::Expense);
    let optimal = monthly_expenses / Decimal::from(30) * Decimal::new(85, 2);

    let days: Vec<NaiveDate> = (0..periods)
        .map(|i| today - Duration::days(periods - 1 - i))
        .collect();
    let mut spending = vec![Decimal::ZERO; days.len()];

    for t in transactions.iter().filter(|t| t.r#type == TxType::Expense) {
        let Some(d) = parse_display_date(&t.date) else {
            continue;
        };
        if let Some(idx) = days.iter().position(|day| *day == d) {
            spending[idx] += t.amount;
        }
    }

    days.into_iter()
        .zip(spending)
        .map(|(d, spending)| SpendingPoint {
            date: d.format("%-d %b").to_string(),
            spending,
            optimal: optimal.round_dp(2),
        })
        .collect()
}
