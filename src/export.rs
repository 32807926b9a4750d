// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction export to CSV or JSON.

use std::path::Path;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;

use crate::error::Result;
use crate::models::Transaction;

pub const CSV_HEADER: [&str; 5] = ["Name", "Amount", "Type", "Date", "Category"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRow<'a> {
    pub name: &'a str,
    pub amount: String,
    pub r#type: String,
    pub date: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        Self {
            name: &t.name,
            amount: t.amount.normalize().to_string(),
            r#type: t.r#type.to_string(),
            date: &t.date,
            category: &t.category,
        }
    }
}

pub fn default_filename(format: ExportFormat, today: NaiveDate) -> String {
    format!(
        "BudgetVision_Transactions_{}.{}",
        today.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Header plus one row per transaction. Fields holding a comma are quoted.
pub fn to_csv(transactions: &[Transaction]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for t in transactions {
        let row = ExportRow::from(t);
        wtr.write_record([row.name, &row.amount, &row.r#type, row.date, row.category])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| crate::error::Error::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn to_json(transactions: &[Transaction]) -> Result<String> {
    let rows: Vec<ExportRow<'_>> = transactions.iter().map(ExportRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn write_export(transactions: &[Transaction], format: ExportFormat, out: &Path) -> Result<()> {
    let body = match format {
        ExportFormat::Csv => to_csv(transactions)?,
        ExportFormat::Json => to_json(transactions)?,
    };
    std::fs::write(out, body)?;
    tracing::info!(rows = transactions.len(), path = %out.display(), "transactions exported");
    Ok(())
}
