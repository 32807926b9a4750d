// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod avatar;
pub mod budget;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod notify;
pub mod reminders;
pub mod session;
pub mod utils;
