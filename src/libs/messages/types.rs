#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(String),
    TaskNotFoundWithId(usize),
    NoTasksFound,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,

    // === REMINDER MESSAGES ===
    TaskReminder(String, String), // title, due timestamp
    WatcherStarted(u64),          // poll interval in seconds
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    SchedulerShuttingDown,
    SchedulerExitedNormally,
}
