// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::Url;

use crate::error::{Error, Result};

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/lorelei/svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Svg(String),
    Placeholder(String),
}

pub fn avatar_url(name: &str) -> Result<Url> {
    Url::parse_with_params(AVATAR_BASE, &[("seed", name)])
        .map_err(|e| Error::InvalidData(format!("avatar url: {}", e)))
}

pub fn placeholder(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

fn try_fetch(client: &reqwest::blocking::Client, name: &str) -> Result<String> {
    let body = client
        .get(avatar_url(name)?)
        .send()?
        .error_for_status()?
        .text()?;
    Ok(body)
}

/// Fetches the generated avatar, falling back to the name's initial.
pub fn fetch_avatar(client: &reqwest::blocking::Client, name: &str) -> Avatar {
    match try_fetch(client, name) {
        Ok(svg) => Avatar::Svg(svg),
        Err(e) => {
            tracing::warn!(error = %e, name, "avatar fetch failed, using placeholder");
            Avatar::Placeholder(placeholder(name))
        }
    }
}
