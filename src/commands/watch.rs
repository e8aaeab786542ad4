//! Runs the reminder scheduler in the foreground.
//!
//! The scheduler polls the task store on its configured interval while this
//! command consumes the emitted reminder events and prints them as the
//! local alert surface. A shutdown signal (Ctrl+C, SIGTERM) stops the loop
//! cleanly; reminders are best-effort, so nothing is awaited on exit.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::reminder::ReminderScheduler;
use crate::libs::store::TaskStore;
use crate::libs::task::DATETIME_FORMAT;
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let reminder_config = config.reminder.unwrap_or_default();
    let store = TaskStore::new()?.into_shared();

    // Channel pair for shutdown signals.
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel();

    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(s) => s,
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                    return;
                }
            };
            let mut sigint = match signal(SignalKind::interrupt()) {
                Ok(s) => s,
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                    return;
                }
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    // Keep the sender alive on platforms without signal handling so the
    // select loop below never sees a spuriously closed channel.
    #[cfg(not(any(unix, windows)))]
    let _shutdown_tx = {
        msg_warning!(Message::WatcherSignalHandlingNotSupported);
        shutdown_tx
    };

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let scheduler = ReminderScheduler::new(store, reminder_config.clone());
    let scheduler_handle = tokio::spawn(async move { scheduler.run(tx).await });

    msg_info!(Message::WatcherStarted(reminder_config.poll_interval));

    loop {
        tokio::select! {
            reminder = rx.recv() => {
                match reminder {
                    Some(reminder) => {
                        let due = reminder.due_date.format(DATETIME_FORMAT).to_string();
                        msg_warning!(Message::TaskReminder(reminder.title, due));
                    }
                    None => {
                        msg_info!(Message::SchedulerExitedNormally);
                        break;
                    }
                }
            }
            _ = &mut shutdown_rx => {
                msg_info!(Message::SchedulerShuttingDown);
                break;
            }
        }
    }

    // The scheduler may be mid-sleep; cancel it rather than wait a full tick.
    scheduler_handle.abort();

    Ok(())
}
