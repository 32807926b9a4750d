// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::tempdir;

fn run(args: &[&str]) -> Output {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("budgetvision.toml");
    let out = Command::new(env!("CARGO_BIN_EXE_budgetvision"))
        .arg("--config")
        .arg(&cfg)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    out
}

fn stdout_json(out: &Output) -> Value {
    serde_json::from_slice(&out.stdout).unwrap_or_else(|e| {
        panic!("stdout is not JSON ({}): {}", e, String::from_utf8_lossy(&out.stdout))
    })
}

#[test]
fn reminder_list_json_stays_parseable_while_announcing() {
    let out = run(&["--today", "2025-04-20", "reminders", "list", "--json"]);
    let v = stdout_json(&out);
    let ids: Vec<&str> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["rem1", "rem2"]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("You have 2 payments due today."), "stderr: {}", stderr);
}

#[test]
fn overview_announces_due_reminders() {
    let out = run(&["--today", "2025-04-08", "overview"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("You have 1 payment due today."), "stderr: {}", stderr);
    assert!(stdout.contains("Payment Reminders"));
    assert!(stdout.contains("Electricity Bill"));
}

#[test]
fn overview_without_due_reminders_stays_quiet() {
    let out = run(&["--today", "2025-04-01", "overview"]);
    assert!(!String::from_utf8_lossy(&out.stderr).contains("Payment Reminder"));
    assert!(!String::from_utf8_lossy(&out.stdout).contains("Payment Reminders"));
}

#[test]
fn overview_json_lists_due_reminders() {
    let out = run(&["--today", "2025-04-08", "overview", "--json"]);
    let v = stdout_json(&out);
    assert_eq!(v["reminders"].as_array().unwrap().len(), 1);
    assert_eq!(v["reminders"][0]["id"], "rem1");
    assert_eq!(v["summary"]["balance"], "58900");
}

#[test]
fn savings_report_carries_opportunities() {
    let out = run(&["--today", "2025-04-20", "insights", "savings", "--json"]);
    let v = stdout_json(&out);
    assert_eq!(v["potential_savings"], "90");
    assert_eq!(v["potential_savings_percent"], "1.5");
    assert_eq!(
        v["opportunities"],
        json!([{ "category": "Entertainment", "current": "600", "potential": "90" }])
    );
}

#[test]
fn spending_chart_prints_opportunities() {
    let out = run(&["--today", "2025-04-14", "chart", "spending"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("(1.5% of monthly expenses)"), "stdout: {}", stdout);
    assert!(stdout.contains("Savings Opportunity"));
    assert!(stdout.contains("Entertainment"));
}
