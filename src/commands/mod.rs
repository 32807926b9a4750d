// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod overview;
pub mod transactions;
pub mod budgets;
pub mod charts;
pub mod insights;
pub mod reminders;
pub mod profile;
pub mod exporter;
pub mod shell;

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::Settings;
use crate::reminders::{BellCue, ReminderNotifier};
use crate::session::Dashboard;

/// Session state shared by every command handler.
pub struct App {
    pub dash: Dashboard,
    pub settings: Settings,
    pub today: NaiveDate,
    pub notifier: Option<ReminderNotifier>,
}

impl App {
    pub fn new(settings: Settings, today: NaiveDate) -> Self {
        Self {
            dash: Dashboard::seeded(&settings),
            settings,
            today,
            notifier: None,
        }
    }

    /// (Re)mounts the reminder notifier from the static list, announcing
    /// anything due. A previous notifier is torn down first.
    pub fn mount_reminders(&mut self) -> &mut ReminderNotifier {
        if let Some(old) = self.notifier.take() {
            old.unmount();
        }
        self.notifier
            .insert(mount_notifier(&self.dash, &self.settings, self.today))
    }

    /// The mounted notifier, mounting it on first use.
    pub fn reminders_mut(&mut self) -> &mut ReminderNotifier {
        let (dash, settings, today) = (&self.dash, &self.settings, self.today);
        self.notifier
            .get_or_insert_with(|| mount_notifier(dash, settings, today))
    }
}

fn mount_notifier(dash: &Dashboard, settings: &Settings, today: NaiveDate) -> ReminderNotifier {
    let cue = Box::new(BellCue::new(settings.notification_sound.clone()));
    let notifier =
        ReminderNotifier::mount(dash.reminders(), today, cue, settings.reminder_interval());
    if let Some(t) = notifier.announcement() {
        t.show();
    }
    notifier
}

pub fn dispatch(app: &mut App, matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("overview", sub)) => overview::handle(app, sub)?,
        Some(("tx", sub)) => transactions::handle(app, sub)?,
        Some(("budget", sub)) => budgets::handle(app, sub)?,
        Some(("chart", sub)) => charts::handle(app, sub)?,
        Some(("insights", sub)) => insights::handle(app, sub)?,
        Some(("reminders", sub)) => reminders::handle(app, sub)?,
        Some(("profile", sub)) => profile::handle(app, sub)?,
        Some(("export", sub)) => exporter::handle(app, sub)?,
        Some(("shell", _)) => shell::run(app)?,
        _ => {
            crate::cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
