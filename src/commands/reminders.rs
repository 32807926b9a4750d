// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::App;
use crate::notify::Toast;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("pay", sub)) => pay(app, sub)?,
        Some(("reload", _)) => {
            app.mount_reminders();
            print_active(app);
        }
        _ => {}
    }
    Ok(())
}

fn list(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let active = app.reminders_mut().active().items().to_vec();
    if !maybe_print_json(json_flag, jsonl_flag, &active)? {
        print_active(app);
    }
    Ok(())
}

fn pay(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    match app.reminders_mut().mark_paid(id) {
        Some(toast) => toast.show(),
        None => Toast::error(format!("No active reminder '{}'", id)).show(),
    }
    print_active(app);
    Ok(())
}

pub(crate) fn print_active(app: &App) {
    let Some(n) = app.notifier.as_ref() else {
        return;
    };
    if n.active().is_empty() {
        println!("No payments due.");
        return;
    }
    let sym = app.settings.currency_symbol.as_str();
    let rows = n
        .active()
        .items()
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.title.clone(),
                format!("Due: {}", r.due_date),
                fmt_money(&r.amount, sym),
            ]
        })
        .collect();
    println!("Payment Reminders");
    println!("{}", pretty_table(&["ID", "Title", "Due", "Amount"], rows));
}
