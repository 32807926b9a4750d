// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetvision::config::Settings;
use budgetvision::error::Error;
use budgetvision::models::{Profile, ProfileType, Transaction, TxType};
use budgetvision::session::{Dashboard, TransactionDraft};
use budgetvision::{cli, commands::transactions};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 14).unwrap()
}

fn draft(name: &str, amount: &str, ty: TxType, category: Option<&str>) -> TransactionDraft {
    TransactionDraft {
        name: name.into(),
        amount: amount.into(),
        r#type: ty,
        category: category.map(String::from),
    }
}

#[test]
fn add_appends_without_touching_existing() {
    let mut dash = Dashboard::seeded(&Settings::default());
    let before = dash.transactions().to_vec();

    let tx = dash
        .add_transaction(draft("  Taxi ", "350.50", TxType::Expense, Some("Transportation")), today())
        .unwrap()
        .clone();
    assert_eq!(tx.name, "Taxi");
    assert_eq!(tx.date, "April 14, 2025");
    assert_eq!(tx.amount, Decimal::new(35050, 2));

    let after = dash.transactions();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap(), &tx);
    assert!(before.iter().all(|t| t.id != tx.id));

    let transport = dash
        .budget()
        .entries()
        .iter()
        .find(|e| e.category == "Transportation")
        .unwrap();
    assert_eq!(transport.spent, Decimal::new(35050, 2));
}

#[test]
fn income_is_always_filed_under_income() {
    let mut dash = Dashboard::seeded(&Settings::default());
    let tx = dash
        .add_transaction(draft("Bonus", "1000", TxType::Income, Some("Shopping")), today())
        .unwrap();
    assert_eq!(tx.category, "Income");
}

#[test]
fn invalid_drafts_are_rejected_without_mutation() {
    let mut dash = Dashboard::seeded(&Settings::default());
    let before = dash.transactions().to_vec();
    let cases = [
        (draft("   ", "10", TxType::Expense, Some("Food")), "Please enter a name"),
        (draft("x", "abc", TxType::Expense, Some("Food")), "Please enter a valid amount"),
        (draft("x", "-5", TxType::Expense, Some("Food")), "Please enter a valid amount"),
        (draft("x", "0", TxType::Income, None), "Please enter a valid amount"),
        (draft("x", "10", TxType::Expense, None), "Please select a category"),
        (draft("x", "10", TxType::Expense, Some(" ")), "Please select a category"),
    ];
    for (d, msg) in cases {
        match dash.add_transaction(d, today()) {
            Err(Error::Validation(m)) => assert_eq!(m, msg),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
    assert_eq!(dash.transactions(), &before[..]);
}

#[test]
fn income_without_category_is_fine() {
    let mut dash = Dashboard::seeded(&Settings::default());
    assert!(dash
        .add_transaction(draft("Gift", "200", TxType::Income, None), today())
        .is_ok());
}

#[test]
fn list_filters_and_limit() {
    let dash = Dashboard::seeded(&Settings::default());
    let matches = cli::build_cli().get_matches_from([
        "budgetvision", "tx", "list", "--type", "expense", "--limit", "2",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(dash.transactions(), list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].id, "tx2");
            assert_eq!(rows[1].id, "tx3");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn amounts_that_would_overflow_totals_are_rejected() {
    let mut dash = Dashboard::seeded(&Settings::default());
    let before = dash.transactions().to_vec();
    let max = "79228162514264337593543950335";

    // 6100 already spent, so the largest amount no longer fits
    match dash.add_transaction(draft("Yacht", max, TxType::Expense, Some("Shopping")), today()) {
        Err(Error::Validation(m)) => assert_eq!(m, "Please enter a valid amount"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(dash.transactions(), &before[..]);

    let big = "79228162514264337593543940335"; // max - 10000
    dash.add_transaction(draft("Yacht", big, TxType::Expense, Some("Shopping")), today())
        .unwrap();
    match dash.add_transaction(draft("Fuel", "20000", TxType::Expense, Some("Shopping")), today()) {
        Err(Error::Validation(m)) => assert_eq!(m, "Please enter a valid amount"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(dash.transactions().len(), before.len() + 1);

    // income is tracked separately and still fits
    assert!(dash
        .add_transaction(draft("Salary", "20000", TxType::Income, None), today())
        .is_ok());
    let s = dash.summary();
    assert_eq!(s.balance, s.income - s.expenses);
}

#[test]
fn new_ids_continue_past_the_highest_existing() {
    let tx = Transaction {
        id: "tx2".into(),
        name: "Salary".into(),
        amount: Decimal::from(100),
        r#type: TxType::Income,
        date: "April 1, 2025".into(),
        category: "Income".into(),
    };
    let profile = Profile {
        name: "Lucy".into(),
        r#type: ProfileType::Salary,
    };
    let mut dash = Dashboard::new(profile, vec![tx], Vec::new());
    let added = dash
        .add_transaction(draft("Bonus", "50", TxType::Income, None), today())
        .unwrap();
    assert_eq!(added.id, "tx3");
}
