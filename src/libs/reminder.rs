//! Background reminder scheduling.
//!
//! The scheduler is the only long-running activity in the application. It
//! wakes on a fixed interval, refreshes the shared task store from durable
//! storage (so completions and additions made by other chronos invocations
//! are picked up), takes a consistent snapshot, and emits a [`Reminder`]
//! for every pending task whose due time is inside the reminder window:
//! the half-open interval `[due - window, due)` immediately preceding the
//! deadline. A refresh failure keeps the last good in-memory state for the
//! tick rather than silencing reminders.
//!
//! The window predicate is re-evaluated from scratch on every tick. A task
//! sitting in its 15-minute window therefore produces a reminder on each
//! 60-second tick until it is completed or its due time passes; the emitted
//! stream carries no de-duplication. Consumers that want a single alert per
//! task must track that themselves.
//!
//! Reminders are best-effort: the loop exits cleanly as soon as the
//! receiving end of the channel is dropped, and nothing is retried or
//! awaited on shutdown.

use crate::libs::config::ReminderConfig;
use crate::libs::store::SharedTaskStore;
use crate::libs::task::Task;
use chrono::{Duration, Local, NaiveDateTime};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{self, Duration as TokioDuration};
use tracing::{debug, warn};

/// One reminder event: a task is entering the window before its deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub title: String,
    pub due_date: NaiveDateTime,
}

/// Returns whether `now` falls inside `[due - window_minutes, due)`.
///
/// The upper bound is exclusive: once the due time itself is reached the
/// task is past due and reminders stop.
pub fn in_reminder_window(now: NaiveDateTime, due: NaiveDateTime, window_minutes: i64) -> bool {
    now >= due - Duration::minutes(window_minutes) && now < due
}

/// Scans a task snapshot and collects reminders for every pending task
/// whose due time is inside the window at `now`.
///
/// Completed tasks and tasks without a due date are never eligible.
pub fn scan(tasks: &[Task], now: NaiveDateTime, window_minutes: i64) -> Vec<Reminder> {
    tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| {
            let due = task.due_date?;
            in_reminder_window(now, due, window_minutes).then(|| Reminder {
                title: task.title.clone(),
                due_date: due,
            })
        })
        .collect()
}

/// The background polling loop over a shared task store.
pub struct ReminderScheduler {
    store: SharedTaskStore,
    config: ReminderConfig,
}

impl ReminderScheduler {
    pub fn new(store: SharedTaskStore, config: ReminderConfig) -> Self {
        ReminderScheduler { store, config }
    }

    /// Runs the polling loop until the receiver side of `tx` is dropped.
    ///
    /// Each tick reloads the store from its storage file, clones the
    /// refreshed sequence under the lock, evaluates the window predicate
    /// against the current wall clock, and sends one event per qualifying
    /// task. The reload is what lets a `chronos complete` in another
    /// process silence a reminder mid-window. The lock is held only for
    /// the refresh and clone, never across the sleep.
    pub async fn run(&self, tx: UnboundedSender<Reminder>) {
        let interval = TokioDuration::from_secs(self.config.poll_interval);
        loop {
            let snapshot = {
                let mut store = self.store.lock();
                if let Err(e) = store.load() {
                    warn!("failed to refresh task store, using previous state: {}", e);
                }
                store.snapshot()
            };
            let now = Local::now().naive_local();
            let reminders = scan(&snapshot, now, self.config.window_minutes);
            debug!("reminder tick: {} task(s), {} due soon", snapshot.len(), reminders.len());

            for reminder in reminders {
                if tx.send(reminder).is_err() {
                    return;
                }
            }

            time::sleep(interval).await;
        }
    }
}
