// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::App;
use crate::avatar::{avatar_url, fetch_avatar, Avatar};
use crate::models::ProfileType;
use crate::notify::Toast;
use crate::utils::{http_client, maybe_print_json};

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            let p = app.dash.profile();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), p)? {
                println!("{} ({})", p.name, p.r#type.title());
            }
        }
        Some(("set", sub)) => set(app, sub),
        Some(("avatar", _)) => avatar(app)?,
        _ => {}
    }
    Ok(())
}

fn set(app: &mut App, sub: &clap::ArgMatches) {
    let current = app.dash.profile().clone();
    let name = sub
        .get_one::<String>("name")
        .cloned()
        .unwrap_or(current.name);
    let ty: ProfileType = match sub.get_one::<String>("type") {
        Some(s) => s.parse().unwrap_or_default(),
        None => current.r#type,
    };
    if name.trim().is_empty() {
        Toast::error("Please enter a name").show();
        return;
    }
    app.dash.change_profile(&name, ty);
    Toast::success("Profile updated")
        .with_description(format!("Profile changed to {} ({})", name.trim(), ty))
        .show();
}

fn avatar(app: &App) -> Result<()> {
    let name = app.dash.profile().name.as_str();
    println!("{}", avatar_url(name)?);
    let client = http_client()?;
    match fetch_avatar(&client, name) {
        Avatar::Svg(svg) => println!("Fetched avatar ({} bytes of SVG)", svg.len()),
        Avatar::Placeholder(p) => println!("[{}]", p),
    }
    Ok(())
}
