#[cfg(test)]
mod tests {
    use chronos::libs::config::ReminderConfig;
    use chronos::libs::reminder::{in_reminder_window, scan, Reminder, ReminderScheduler};
    use chronos::libs::store::TaskStore;
    use chronos::libs::task::{parse_datetime, Priority, Task};
    use chrono::{Duration, Local, NaiveDateTime};
    use tokio::time::{timeout, Duration as TokioDuration};

    fn at(s: &str) -> NaiveDateTime {
        parse_datetime(s).unwrap()
    }

    fn task(title: &str, due: Option<&str>) -> Task {
        Task::new(title, "", due.map(at), Priority::Medium).unwrap()
    }

    #[test]
    fn test_window_boundaries() {
        let due = at("2024-01-10 09:00");

        // Outside the 15-minute window.
        assert!(!in_reminder_window(at("2024-01-10 08:44"), due, 15));
        // Lower bound is inclusive.
        assert!(in_reminder_window(at("2024-01-10 08:45"), due, 15));
        // Mid-window.
        assert!(in_reminder_window(at("2024-01-10 08:50"), due, 15));
        assert!(in_reminder_window(at("2024-01-10 08:59"), due, 15));
        // Upper bound is exclusive: at the due time itself, no reminder.
        assert!(!in_reminder_window(at("2024-01-10 09:00"), due, 15));
        assert!(!in_reminder_window(at("2024-01-10 09:01"), due, 15));
    }

    #[test]
    fn test_scan_standup_scenario() {
        let tasks = vec![task("Standup", Some("2024-01-10 09:00"))];

        assert_eq!(
            scan(&tasks, at("2024-01-10 08:50"), 15),
            vec![Reminder {
                title: "Standup".to_string(),
                due_date: at("2024-01-10 09:00"),
            }]
        );
        assert!(scan(&tasks, at("2024-01-10 09:00"), 15).is_empty());
        assert!(scan(&tasks, at("2024-01-10 08:44"), 15).is_empty());
    }

    #[test]
    fn test_scan_skips_tasks_without_due_date() {
        let tasks = vec![task("Standup", Some("2024-01-10 09:00")), task("Someday", None)];

        // The undated task never appears, no matter what "now" is.
        for now in ["2024-01-10 08:50", "2024-01-10 09:00", "2030-06-01 00:00"] {
            let reminders = scan(&tasks, at(now), 15);
            assert!(reminders.iter().all(|r| r.title != "Someday"));
        }
    }

    #[test]
    fn test_completing_stops_reminders_mid_window() {
        let mut tasks = vec![task("Standup", Some("2024-01-10 09:00"))];
        let mid_window = at("2024-01-10 08:55");
        assert_eq!(scan(&tasks, mid_window, 15).len(), 1);

        tasks[0].completed = true;
        assert!(scan(&tasks, mid_window, 15).is_empty());
    }

    #[test]
    fn test_scan_refires_while_window_holds() {
        // The predicate is re-evaluated every tick, so consecutive ticks
        // inside the window each produce an event.
        let tasks = vec![task("Standup", Some("2024-01-10 09:00"))];
        let tick_one = scan(&tasks, at("2024-01-10 08:50"), 15);
        let tick_two = scan(&tasks, at("2024-01-10 08:51"), 15);
        assert_eq!(tick_one.len(), 1);
        assert_eq!(tick_two.len(), 1);
    }

    #[test]
    fn test_scan_respects_configured_window() {
        let tasks = vec![task("Standup", Some("2024-01-10 09:00"))];
        assert!(scan(&tasks, at("2024-01-10 08:35"), 15).is_empty());
        assert_eq!(scan(&tasks, at("2024-01-10 08:35"), 30).len(), 1);
    }

    #[tokio::test]
    async fn test_scheduler_emits_over_channel() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::with_path(dir.path().join("tasks.json")).unwrap();

        // Due five minutes from now puts the task inside the default window
        // on the very first tick.
        let soon = Local::now().naive_local() + Duration::minutes(5);
        let in_window = Task::new("Soon", "", Some(soon), Priority::High).unwrap();
        store.add(in_window).unwrap();
        store.add(task("Undated", None)).unwrap();

        let config = ReminderConfig {
            poll_interval: 1,
            window_minutes: 15,
        };
        let scheduler = ReminderScheduler::new(store.into_shared(), config);

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let handle = tokio::spawn(async move { scheduler.run(tx).await });

        let reminder = timeout(TokioDuration::from_secs(5), rx.recv())
            .await
            .expect("scheduler should emit within one tick")
            .expect("channel should stay open while the scheduler runs");
        assert_eq!(reminder.title, "Soon");

        // Dropping the receiver is the shutdown path: the loop must exit
        // cleanly on its next send.
        drop(rx);
        timeout(TokioDuration::from_secs(5), handle)
            .await
            .expect("scheduler should stop once the receiver is gone")
            .unwrap();
    }

    #[tokio::test]
    async fn test_completion_from_another_store_stops_reminders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = TaskStore::with_path(path.clone()).unwrap();
        let soon = Local::now().naive_local() + Duration::minutes(5);
        store.add(Task::new("Soon", "", Some(soon), Priority::Medium).unwrap()).unwrap();

        let config = ReminderConfig {
            poll_interval: 1,
            window_minutes: 15,
        };
        let scheduler = ReminderScheduler::new(store.into_shared(), config);
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let handle = tokio::spawn(async move { scheduler.run(tx).await });

        let first = timeout(TokioDuration::from_secs(5), rx.recv()).await.unwrap().unwrap();
        assert_eq!(first.title, "Soon");

        // A separate store over the same file stands in for a completion
        // performed by another chronos process while the watcher runs: it
        // loads the file, completes the task, and persists. The scheduler
        // handle shares nothing with it but the file.
        let mut other = TaskStore::with_path(path).unwrap();
        other.complete(1).unwrap();

        // Drain anything a pre-completion tick already queued, then listen.
        tokio::time::sleep(TokioDuration::from_millis(1500)).await;
        while rx.try_recv().is_ok() {}
        let silence = timeout(TokioDuration::from_secs(3), rx.recv()).await;
        assert!(silence.is_err(), "no reminder may fire once another process completed the task");

        drop(rx);
        let _ = timeout(TokioDuration::from_secs(5), handle).await;
    }

    #[tokio::test]
    async fn test_scheduler_sees_concurrent_completion() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::with_path(dir.path().join("tasks.json")).unwrap();
        let soon = Local::now().naive_local() + Duration::minutes(5);
        store.add(Task::new("Soon", "", Some(soon), Priority::Medium).unwrap()).unwrap();

        let shared = store.into_shared();
        let config = ReminderConfig {
            poll_interval: 1,
            window_minutes: 15,
        };
        let scheduler = ReminderScheduler::new(shared.clone(), config);
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let handle = tokio::spawn(async move { scheduler.run(tx).await });

        // First tick fires.
        let first = timeout(TokioDuration::from_secs(5), rx.recv()).await.unwrap().unwrap();
        assert_eq!(first.title, "Soon");

        // Complete the task through the foreground API; subsequent ticks
        // must stay silent even though the window still holds.
        shared.lock().complete(1).unwrap();

        // A tick that snapshotted before the completion may still have an
        // event in flight. Let it land and drain the queue, then listen.
        tokio::time::sleep(TokioDuration::from_millis(1500)).await;
        while rx.try_recv().is_ok() {}
        let silence = timeout(TokioDuration::from_secs(3), rx.recv()).await;
        assert!(silence.is_err(), "no reminder may fire after completion");

        drop(rx);
        let _ = timeout(TokioDuration::from_secs(5), handle).await;
    }
}
