// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::App;
use crate::error::Error;
use crate::models::{Transaction, TxType};
use crate::notify::Toast;
use crate::session::TransactionDraft;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let r#type: TxType = sub.get_one::<String>("type").unwrap().parse()?;
    let draft = TransactionDraft {
        name: sub.get_one::<String>("name").unwrap().to_string(),
        amount: sub.get_one::<String>("amount").unwrap().to_string(),
        r#type,
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
    };
    let today = app.today;
    match app.dash.add_transaction(draft, today) {
        Ok(tx) => {
            Toast::success("Transaction added successfully")
                .with_description(format!("{} ({} {})", tx.name, tx.r#type, tx.amount))
                .show();
        }
        Err(Error::Validation(msg)) => Toast::error(msg).show(),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub r#type: String,
    pub date: String,
    pub category: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            amount: t.amount.to_string(),
            r#type: t.r#type.to_string(),
            date: t.date.clone(),
            category: t.category.clone(),
        }
    }
}

fn list(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(app.dash.transactions(), sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.amount.clone(),
                    r.r#type.clone(),
                    r.date.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Amount", "Type", "Date", "Category"], rows)
        );
    }
    Ok(())
}

/// Filters in store order; `--limit` keeps the first N matches.
pub fn query_rows(txs: &[Transaction], sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let ty = match sub.get_one::<String>("type") {
        Some(s) => Some(s.parse::<TxType>()?),
        None => None,
    };
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    Ok(txs
        .iter()
        .filter(|t| ty.is_none_or(|ty| t.r#type == ty))
        .filter(|t| category.is_none_or(|c| &t.category == c))
        .take(limit)
        .map(TransactionRow::from)
        .collect())
}
