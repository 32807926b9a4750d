// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use budgetvision::commands::App;
use budgetvision::config::Settings;
use budgetvision::error::{Error, Result};
use budgetvision::reminders::{
    due_message, due_reminders, AudioCue, BellCue, ReminderNotifier, SilentCue,
};
use budgetvision::session::seed_reminders;
use chrono::NaiveDate;

struct CountingCue(Arc<AtomicUsize>);

impl AudioCue for CountingCue {
    fn play(&mut self) -> Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingCue(Arc<AtomicUsize>);

impl AudioCue for FailingCue {
    fn play(&mut self) -> Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(Error::Audio("no user interaction yet".into()))
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn due_on_or_after_the_date() {
    let rem = seed_reminders();
    assert!(due_reminders(&rem, day(2025, 4, 7)).is_empty());
    let due = due_reminders(&rem, day(2025, 4, 8));
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, "rem1");
    assert_eq!(due_reminders(&rem, day(2025, 5, 1)).len(), 2);
}

#[test]
fn announcement_pluralises() {
    assert_eq!(due_message(1), "You have 1 payment due today.");
    assert_eq!(due_message(2), "You have 2 payments due today.");
}

#[test]
fn mark_paid_only_lasts_until_remount() {
    let rem = seed_reminders();
    let mut n = ReminderNotifier::mount(&rem, day(2025, 4, 8), Box::new(SilentCue), Duration::from_secs(60));
    assert_eq!(
        n.announcement().and_then(|t| t.description.clone()).as_deref(),
        Some("You have 1 payment due today.")
    );
    assert!(n.mark_paid("rem1").is_some());
    assert!(n.active().is_empty());
    assert!(n.mark_paid("rem1").is_none());
    n.unmount();

    let fresh = ReminderNotifier::mount(&rem, day(2025, 4, 8), Box::new(SilentCue), Duration::from_secs(60));
    assert_eq!(fresh.active().items().len(), 1);
    assert_eq!(rem.len(), 2);
}

#[test]
fn nothing_due_means_no_toast_and_no_sound() {
    let plays = Arc::new(AtomicUsize::new(0));
    let n = ReminderNotifier::mount(
        &seed_reminders(),
        day(2025, 1, 1),
        Box::new(CountingCue(plays.clone())),
        Duration::from_millis(5),
    );
    assert!(n.announcement().is_none());
    assert!(!n.is_ringing());
    std::thread::sleep(Duration::from_millis(30));
    drop(n);
    assert_eq!(plays.load(Ordering::SeqCst), 0);
}

#[test]
fn sound_repeats_until_unmounted() {
    let plays = Arc::new(AtomicUsize::new(0));
    let n = ReminderNotifier::mount(
        &seed_reminders(),
        day(2025, 4, 20),
        Box::new(CountingCue(plays.clone())),
        Duration::from_millis(10),
    );
    assert!(n.is_ringing());
    std::thread::sleep(Duration::from_millis(80));
    n.unmount();
    let after_unmount = plays.load(Ordering::SeqCst);
    assert!(after_unmount >= 2, "played {} times", after_unmount);

    std::thread::sleep(Duration::from_millis(40));
    assert_eq!(plays.load(Ordering::SeqCst), after_unmount);
}

#[test]
fn cue_failures_are_swallowed() {
    let plays = Arc::new(AtomicUsize::new(0));
    let n = ReminderNotifier::mount(
        &seed_reminders(),
        day(2025, 4, 20),
        Box::new(FailingCue(plays.clone())),
        Duration::from_millis(10),
    );
    std::thread::sleep(Duration::from_millis(35));
    drop(n);
    assert!(plays.load(Ordering::SeqCst) >= 1);
}

#[test]
fn bell_cue_needs_its_asset() {
    let mut cue = BellCue::new("/definitely/not/here/notification.mp3");
    assert!(matches!(cue.play(), Err(Error::Audio(_))));
}

#[test]
fn app_mounts_once_and_remounts_on_request() {
    let mut app = App::new(Settings::default(), day(2025, 4, 20));
    assert!(app.notifier.is_none());
    assert!(app.reminders_mut().mark_paid("rem1").is_some());
    // second access reuses the mounted notifier
    let ids: Vec<String> = app.reminders_mut().active().items().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, ["rem2"]);
    assert_eq!(app.mount_reminders().active().items().len(), 2);
}
