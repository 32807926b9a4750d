// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::App;
use crate::models::{Reminder, Transaction, TxType};
use crate::session::Summary;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

#[derive(Serialize)]
struct Overview<'a> {
    greeting: String,
    date: String,
    summary: Summary,
    recent: &'a [Transaction],
    reminders: Vec<Reminder>,
}

pub fn handle(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let n = *sub.get_one::<usize>("recent").unwrap_or(&4);
    let reminders = app.reminders_mut().active().items().to_vec();
    let sym = app.settings.currency_symbol.as_str();

    let ov = Overview {
        greeting: format!("Hello, {}!", app.dash.profile().name),
        date: app.today.format("%A, %-d %B %Y").to_string(),
        summary: app.dash.summary(),
        recent: app.dash.recent(n),
        reminders,
    };
    if maybe_print_json(json_flag, jsonl_flag, &ov)? {
        return Ok(());
    }

    println!("{}\n{}", ov.greeting, ov.date);
    println!(
        "{}",
        pretty_table(
            &["Balance", "Income", "Expenses"],
            vec![vec![
                fmt_money(&ov.summary.balance, sym),
                fmt_money(&ov.summary.income, sym),
                fmt_money(&ov.summary.expenses, sym),
            ]],
        )
    );
    println!("Recent Transactions");
    println!("{}", recent_table(ov.recent, sym));
    if !ov.reminders.is_empty() {
        super::reminders::print_active(app);
    }
    Ok(())
}

pub fn signed_amount(t: &Transaction, sym: &str) -> String {
    let sign = match t.r#type {
        TxType::Income => '+',
        TxType::Expense => '-',
    };
    format!("{}{}", sign, fmt_money(&t.amount, sym))
}

pub fn recent_table(txs: &[Transaction], sym: &str) -> comfy_table::Table {
    let rows = txs
        .iter()
        .map(|t| vec![t.name.clone(), t.date.clone(), signed_amount(t, sym)])
        .collect();
    pretty_table(&["Name", "Date", "Amount"], rows)
}
