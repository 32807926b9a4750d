// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for BudgetVision

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Rejected user input. The message is what the toast shows.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Audio cue failed: {0}")]
    Audio(String),
}

pub type Result<T> = std::result::Result<T, Error>;
