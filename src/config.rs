// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::ProfileType;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "BudgetVision", "budgetvision"));

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile_name: String,
    pub profile_type: ProfileType,
    pub currency_symbol: String,
    pub current_savings: Decimal,
    pub reminder_interval_secs: u64,
    pub notification_sound: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile_name: "Lucy".into(),
            profile_type: ProfileType::Salary,
            currency_symbol: "₹".into(),
            current_savings: Decimal::from(100_000),
            reminder_interval_secs: 60,
            notification_sound: PathBuf::from("notification.mp3"),
        }
    }
}

impl Settings {
    pub fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_secs.max(1))
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("Invalid settings file")
    }

    /// Missing file means defaults; a file that exists must parse.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read settings at {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Parse settings at {}", path.display()))
    }

    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(p) => Self::load_from_file(p),
            None => match config_path() {
                Some(p) => Self::load_from_file(&p),
                None => Ok(Self::default()),
            },
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("budgetvision.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = Settings::from_toml(
            r#"
            profile_name = "Asha"
            profile_type = "student"
            reminder_interval_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(s.profile_name, "Asha");
        assert_eq!(s.profile_type, ProfileType::Student);
        assert_eq!(s.reminder_interval(), Duration::from_secs(5));
        assert_eq!(s.currency_symbol, "₹");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Settings::from_toml("profile_name = [").is_err());
    }
}
