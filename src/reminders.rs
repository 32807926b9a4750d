// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Payment reminders: the due set, the "mark paid" working set, and the
//! repeating audio cue that runs while a notifier is mounted.

use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::Reminder;
use crate::notify::Toast;
use crate::utils::parse_display_date;

pub const DEFAULT_REPEAT: Duration = Duration::from_secs(60);

/// Reminders due on or before `today`. Dates that do not parse are never due.
pub fn due_reminders(reminders: &[Reminder], today: NaiveDate) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|r| match parse_display_date(&r.due_date) {
            Some(d) => d <= today,
            None => {
                tracing::debug!(id = %r.id, due = %r.due_date, "unparseable due date");
                false
            }
        })
        .cloned()
        .collect()
}

pub fn due_message(count: usize) -> String {
    format!(
        "You have {} payment{} due today.",
        count,
        if count > 1 { "s" } else { "" }
    )
}

/// Something that can make the reminder noise.
pub trait AudioCue: Send {
    fn play(&mut self) -> Result<()>;
}

/// Rings the terminal bell, provided the configured sound asset exists.
pub struct BellCue {
    asset: PathBuf,
}

impl BellCue {
    pub fn new(asset: impl Into<PathBuf>) -> Self {
        Self {
            asset: asset.into(),
        }
    }
}

impl AudioCue for BellCue {
    fn play(&mut self) -> Result<()> {
        if !self.asset.is_file() {
            return Err(Error::Audio(format!(
                "sound asset {} not found",
                self.asset.display()
            )));
        }
        let mut err = std::io::stderr();
        err.write_all(b"\x07")?;
        err.flush()?;
        Ok(())
    }
}

pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Working copy of the due set; paying only edits this copy.
#[derive(Debug, Clone, Default)]
pub struct ActiveReminders {
    items: Vec<Reminder>,
}

impl ActiveReminders {
    pub fn new(items: Vec<Reminder>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Reminder] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mark_paid(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        before != self.items.len()
    }
}

struct Ticker {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

pub struct ReminderNotifier {
    active: ActiveReminders,
    announcement: Option<Toast>,
    ticker: Option<Ticker>,
}

impl ReminderNotifier {
    /// Computes the due set and, if anything is due, prepares the toast and
    /// starts the cue: once now, then every `interval` until unmounted.
    pub fn mount(
        reminders: &[Reminder],
        today: NaiveDate,
        cue: Box<dyn AudioCue>,
        interval: Duration,
    ) -> Self {
        let due = due_reminders(reminders, today);
        if due.is_empty() {
            return Self {
                active: ActiveReminders::default(),
                announcement: None,
                ticker: None,
            };
        }

        tracing::info!(count = due.len(), "payment reminders due");
        let announcement = Toast::info("Payment Reminder").with_description(due_message(due.len()));
        let ticker = spawn_ticker(cue, interval);
        Self {
            active: ActiveReminders::new(due),
            announcement: Some(announcement),
            ticker,
        }
    }

    pub fn announcement(&self) -> Option<&Toast> {
        self.announcement.as_ref()
    }

    pub fn active(&self) -> &ActiveReminders {
        &self.active
    }

    pub fn mark_paid(&mut self, id: &str) -> Option<Toast> {
        if self.active.mark_paid(id) {
            Some(
                Toast::success("Payment marked as complete!")
                    .with_description("Your payment has been recorded."),
            )
        } else {
            None
        }
    }

    pub fn is_ringing(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn unmount(mut self) {
        self.stop_ticker();
    }

    fn stop_ticker(&mut self) {
        if let Some(t) = self.ticker.take() {
            let _ = t.stop.send(());
            if t.handle.join().is_err() {
                tracing::warn!("reminder sound thread panicked");
            }
        }
    }
}

impl Drop for ReminderNotifier {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

fn spawn_ticker(mut cue: Box<dyn AudioCue>, interval: Duration) -> Option<Ticker> {
    let (stop, rx) = mpsc::channel::<()>();
    let spawned = std::thread::Builder::new()
        .name("reminder-sound".into())
        .spawn(move || {
            loop {
                if let Err(e) = cue.play() {
                    tracing::warn!(error = %e, "audio play failed");
                }
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            // cue dropped here, releasing it
        });
    match spawned {
        Ok(handle) => Some(Ticker { stop, handle }),
        Err(e) => {
            tracing::warn!(error = %e, "could not start reminder sound timer");
            None
        }
    }
}
