// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transient user-facing notices.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: Level,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, d: impl Into<String>) -> Self {
        self.description = Some(d.into());
        self
    }

    /// Prints the toast to stderr, keeping stdout for command output, and
    /// mirrors it to the log.
    pub fn show(&self) {
        match self.level {
            Level::Error => {
                tracing::warn!(title = %self.title, description = ?self.description, "toast")
            }
            _ => tracing::info!(title = %self.title, description = ?self.description, "toast"),
        }
        eprintln!("{}", self);
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.level {
            Level::Success => "✔",
            Level::Error => "✖",
            Level::Info => "•",
        };
        write!(f, "{} {}", mark, self.title)?;
        if let Some(d) = &self.description {
            write!(f, " - {}", d)?;
        }
        Ok(())
    }
}
