// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetvision::budget::BudgetTracker;
use budgetvision::models::{Profile, ProfileType, Transaction, TxType};
use budgetvision::session::Dashboard;
use rust_decimal::Decimal;

fn tx(id: &str, amount: i64, ty: TxType, category: &str) -> Transaction {
    Transaction {
        id: id.into(),
        name: id.into(),
        amount: Decimal::from(amount),
        r#type: ty,
        date: "April 5, 2025".into(),
        category: category.into(),
    }
}

fn spent(b: &BudgetTracker, category: &str) -> Option<Decimal> {
    b.entries()
        .iter()
        .find(|e| e.category == category)
        .map(|e| e.spent)
}

#[test]
fn food_scenario_balance_and_spent() {
    let txs = vec![
        tx("a", 50000, TxType::Income, "Income"),
        tx("b", 2500, TxType::Expense, "Food"),
    ];
    let mut dash = Dashboard::new(
        Profile {
            name: "Lucy".into(),
            r#type: ProfileType::Salary,
        },
        txs,
        Vec::new(),
    );
    dash.set_budget("Food", Decimal::from(10000)).unwrap();

    let s = dash.summary();
    assert_eq!(s.income, Decimal::from(50000));
    assert_eq!(s.expenses, Decimal::from(2500));
    assert_eq!(s.balance, Decimal::from(47500));
    assert_eq!(spent(dash.budget(), "Food"), Some(Decimal::from(2500)));
}

#[test]
fn profile_switch_zeroes_then_recompute_fills() {
    let txs = vec![
        tx("a", 700, TxType::Expense, "Shopping"),
        tx("b", 300, TxType::Expense, "Housing"),
        tx("c", 900, TxType::Expense, "Education"),
        tx("d", 5000, TxType::Income, "Income"),
    ];
    let mut b = BudgetTracker::new(ProfileType::Salary);
    b.recompute(&txs);
    assert_eq!(spent(&b, "Housing"), Some(Decimal::from(300)));

    b.set_profile_type(ProfileType::Student);
    assert!(b.entries().iter().all(|e| e.spent.is_zero()));
    assert_eq!(spent(&b, "Housing"), None);

    b.recompute(&txs);
    assert_eq!(spent(&b, "Shopping"), Some(Decimal::from(700)));
    assert_eq!(spent(&b, "Education"), Some(Decimal::from(900)));
    assert_eq!(spent(&b, "Entertainment"), Some(Decimal::ZERO));
}

#[test]
fn orphaned_spend_still_counts_in_totals() {
    let mut dash = Dashboard::new(
        Profile {
            name: "Lucy".into(),
            r#type: ProfileType::Salary,
        },
        vec![tx("a", 1000, TxType::Expense, "Housing")],
        Vec::new(),
    );
    assert_eq!(spent(dash.budget(), "Housing"), Some(Decimal::from(1000)));

    dash.change_profile("Lucy", ProfileType::Business);
    let tracked: Decimal = dash.budget().entries().iter().map(|e| e.spent).sum();
    assert_eq!(tracked, Decimal::ZERO);
    assert_eq!(dash.summary().expenses, Decimal::from(1000));
    assert_eq!(dash.transactions().len(), 1);
}

#[test]
fn over_budget_entry_reports_overshoot() {
    let mut b = BudgetTracker::new(ProfileType::Salary);
    b.recompute(&[tx("a", 7000, TxType::Expense, "Shopping")]);
    let shopping = b
        .entries()
        .iter()
        .find(|e| e.category == "Shopping")
        .unwrap();
    assert!(shopping.is_over_budget());
    assert_eq!(shopping.remaining(), Decimal::from(2000));
    assert_eq!(shopping.percentage(), Decimal::from(140));
}
