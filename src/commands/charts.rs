// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::App;
use crate::aggregate::{self, Timeframe, MONTH_LABELS};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("cashflow", sub)) => cashflow(app, sub)?,
        Some(("expenses", sub)) => expenses(app, sub)?,
        Some(("spending", sub)) => spending(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn cashflow(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let labels: Vec<String> = match sub.get_many::<String>("months") {
        Some(v) => v.map(|s| s.trim().to_string()).collect(),
        None => MONTH_LABELS.iter().map(|s| s.to_string()).collect(),
    };
    let series = sub.get_one::<String>("series").map(String::as_str).unwrap_or("all");
    let data = aggregate::cash_flow_by_month(app.dash.transactions(), &labels);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }

    let sym = app.settings.currency_symbol.as_str();
    let (headers, rows): (Vec<&str>, Vec<Vec<String>>) = match series {
        "income" => (
            vec!["Month", "Income"],
            data.iter()
                .map(|p| vec![p.name.clone(), fmt_money(&p.income, sym)])
                .collect(),
        ),
        "expense" => (
            vec!["Month", "Expense"],
            data.iter()
                .map(|p| vec![p.name.clone(), fmt_money(&p.expense, sym)])
                .collect(),
        ),
        _ => (
            vec!["Month", "Income", "Expense"],
            data.iter()
                .map(|p| {
                    vec![
                        p.name.clone(),
                        fmt_money(&p.income, sym),
                        fmt_money(&p.expense, sym),
                    ]
                })
                .collect(),
        ),
    };
    println!("{}", pretty_table(&headers, rows));
    Ok(())
}

fn expenses(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = aggregate::expense_share(app.dash.transactions());
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let sym = app.settings.currency_symbol.as_str();
    let rows = data
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                fmt_money(&s.value, sym),
                format!("{}%", s.percentage),
                s.color.clone(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share", "Colour"], rows));
    Ok(())
}

fn spending(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let timeframe = match sub.get_one::<String>("timeframe").map(String::as_str) {
        Some("month") => Timeframe::Month,
        _ => Timeframe::Week,
    };
    let data = aggregate::daily_spending(app.dash.transactions(), app.today, timeframe);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let sym = app.settings.currency_symbol.as_str();
    let rows = data
        .iter()
        .map(|p| {
            vec![
                p.date.clone(),
                fmt_money(&p.spending, sym),
                fmt_money(&p.optimal, sym),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Day", "Spending", "Optimal"], rows));
    let txs = app.dash.transactions();
    println!(
        "Potential savings: {} ({}% of monthly expenses)",
        fmt_money(&aggregate::potential_savings(txs), sym),
        aggregate::savings_percentage(txs)
    );
    let ops = aggregate::savings_opportunities(txs);
    if !ops.is_empty() {
        println!("{}", super::insights::opportunities_table(&ops, sym));
    }
    Ok(())
}
