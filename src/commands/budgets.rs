// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::App;
use crate::error::Error;
use crate::notify::Toast;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("set", sub)) => set(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let cat = sub.get_one::<String>("category").unwrap();
    let amount = match parse_decimal(sub.get_one::<String>("amount").unwrap()) {
        Ok(a) => a,
        Err(_) => {
            Toast::error("Please enter a valid budget amount").show();
            return Ok(());
        }
    };
    match app.dash.set_budget(cat, amount) {
        Ok(()) => Toast::success(format!("Budget set for {} = {}", cat, amount)).show(),
        Err(Error::Validation(msg)) => Toast::error(msg).show(),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn list(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = app.dash.budget().entries();
    if maybe_print_json(json_flag, jsonl_flag, &entries)? {
        return Ok(());
    }
    let sym = app.settings.currency_symbol.as_str();
    let data = entries
        .iter()
        .map(|e| {
            let status = if e.is_over_budget() {
                format!("-{} over budget", fmt_money(&e.remaining(), sym))
            } else {
                format!("{} remaining", fmt_money(&e.remaining(), sym))
            };
            vec![
                e.category.clone(),
                fmt_money(&e.budget, sym),
                fmt_money(&e.spent, sym),
                format!("{:.0}%", e.percentage().min(rust_decimal::Decimal::ONE_HUNDRED)),
                status,
            ]
        })
        .collect();
    println!(
        "Budgets ({})",
        app.dash.profile().r#type.title()
    );
    println!(
        "{}",
        pretty_table(&["Category", "Budget", "Spent", "Used", "Status"], data)
    );
    Ok(())
}
