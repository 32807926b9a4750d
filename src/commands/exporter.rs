// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use super::App;
use crate::export::{default_filename, write_export, ExportFormat};
use crate::notify::Toast;

pub fn handle(app: &mut App, sub: &clap::ArgMatches) -> Result<()> {
    let format = match sub.get_one::<String>("format").map(|s| s.to_lowercase()).as_deref() {
        Some("json") => ExportFormat::Json,
        _ => ExportFormat::Csv,
    };
    let out = sub
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_filename(format, app.today)));

    match write_export(app.dash.transactions(), format, &out) {
        Ok(()) => Toast::success("Export successful")
            .with_description(format!(
                "Your transactions have been exported to {}",
                out.display()
            ))
            .show(),
        Err(e) => {
            tracing::error!(error = %e, path = %out.display(), "export error");
            Toast::error("Export failed")
                .with_description("There was a problem exporting your data")
                .show();
        }
    }
    Ok(())
}
