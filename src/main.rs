// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budgetvision::{cli, commands, config::Settings, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // RUST_LOG > --verbose > warn
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let settings = Settings::load(matches.get_one::<String>("config").map(Path::new))?;
    let today = match matches.get_one::<String>("today") {
        Some(s) => utils::parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut app = commands::App::new(settings, today);
    commands::dispatch(&mut app, &matches)
}
