// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::App;
use crate::aggregate;
use crate::insights::{project_savings, savings_insight, tips_for};
use crate::models::SavingsOpportunity;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("tips", _)) => tips(app),
        Some(("projection", sub)) => projection(app, sub)?,
        Some(("savings", sub)) => savings(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn tips(app: &App) {
    let ty = app.dash.profile().r#type;
    println!("Personalized Saving Tips ({})", ty.title());
    for tip in tips_for(ty) {
        println!("  - {}", tip);
    }
}

fn projection(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = app.dash.summary();
    let data = project_savings(
        app.dash.current_savings(),
        s.income - s.expenses,
        app.dash.profile().r#type,
        app.today,
    );
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let sym = app.settings.currency_symbol.as_str();
        let rows = data
            .iter()
            .map(|p| vec![p.name.clone(), fmt_money(&p.savings, sym)])
            .collect();
        println!("{}", pretty_table(&["Month", "Projected Savings"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct SavingsReport {
    outlook: crate::insights::Outlook,
    ratio: rust_decimal::Decimal,
    message: &'static str,
    potential_savings: rust_decimal::Decimal,
    potential_savings_percent: rust_decimal::Decimal,
    opportunities: Vec<SavingsOpportunity>,
}

fn savings(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = app.dash.summary();
    let insight = savings_insight(s.income, s.expenses);
    let report = SavingsReport {
        outlook: insight.outlook,
        ratio: insight.ratio,
        message: insight.text,
        potential_savings: aggregate::potential_savings(app.dash.transactions()),
        potential_savings_percent: aggregate::savings_percentage(app.dash.transactions()),
        opportunities: aggregate::savings_opportunities(app.dash.transactions()),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        let sym = app.settings.currency_symbol.as_str();
        println!("{}", report.message);
        println!(
            "Savings rate: {:.1}%  Potential savings: {} ({}% of expenses)",
            report.ratio.saturating_mul(rust_decimal::Decimal::ONE_HUNDRED),
            fmt_money(&report.potential_savings, sym),
            report.potential_savings_percent
        );
        if !report.opportunities.is_empty() {
            println!("{}", opportunities_table(&report.opportunities, sym));
        }
    }
    Ok(())
}

pub(crate) fn opportunities_table(ops: &[SavingsOpportunity], sym: &str) -> comfy_table::Table {
    let rows = ops
        .iter()
        .map(|o| {
            vec![
                o.category.clone(),
                fmt_money(&o.current, sym),
                fmt_money(&o.potential, sym),
            ]
        })
        .collect();
    pretty_table(&["Savings Opportunity", "Current", "Potential Savings"], rows)
}
