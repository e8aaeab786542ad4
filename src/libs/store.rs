//! The task store: the single source of truth shared between the foreground
//! commands and the background reminder scheduler.
//!
//! ## Design
//!
//! - **Ordered sequence**: tasks are kept in insertion order, which is also
//!   display order. There is no reordering.
//! - **Write-through persistence**: every mutation (`add`, `complete`)
//!   rewrites the full JSON file synchronously before returning, so the file
//!   on disk always reflects the last successful mutation. A failed save is
//!   reported to the caller, never swallowed: the full-rewrite strategy
//!   means a failed write can leave stale data behind.
//! - **Snapshot reads**: the scheduler never walks the live sequence. It
//!   takes a [`SharedTaskStore`] and calls [`snapshot`], which clones the
//!   sequence under the lock, so a concurrent `add` or `complete` can never
//!   interleave a half-written record into a scan.
//!
//! ## Failure semantics
//!
//! A missing storage file on load is not an error; the store just starts
//! empty. Any other read failure surfaces as
//! [`StoreError::StorageUnavailable`]. Records that fail to parse are
//! skipped one at a time with a warning, so a single corrupt entry cannot
//! take the rest of the store down with it.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::StoreError;
use crate::libs::task::Task;
use parking_lot::Mutex;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// File name of the durable task storage within the application data dir.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Handle shared between the mutation API and the reminder scheduler.
pub type SharedTaskStore = Arc<Mutex<TaskStore>>;

pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Opens the store at the platform data directory and loads whatever is
    /// already persisted there.
    pub fn new() -> Result<Self, StoreError> {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Self::with_path(path)
    }

    /// Opens a store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Result<Self, StoreError> {
        let mut store = TaskStore { tasks: Vec::new(), path };
        store.load()?;
        Ok(store)
    }

    /// Wraps the store for sharing with the background scheduler.
    pub fn into_shared(self) -> SharedTaskStore {
        Arc::new(Mutex::new(self))
    }

    /// Appends a task and persists the full sequence.
    ///
    /// The record constructor has already rejected empty titles, but the
    /// store re-checks so a hand-built record cannot bypass the invariant.
    /// On any failure the in-memory sequence is left unchanged.
    pub fn add(&mut self, task: Task) -> Result<(), StoreError> {
        if task.title.trim().is_empty() {
            return Err(StoreError::InvalidInput("task title must not be empty".to_string()));
        }
        self.tasks.push(task);
        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Read-only view of the current sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Clones the current sequence. This is the consistent snapshot the
    /// reminder scheduler reads once per tick.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Marks the task at 1-based position `id` as completed and persists.
    ///
    /// Completion is a one-way transition; completing an already completed
    /// task is a no-op that still reports success.
    pub fn complete(&mut self, id: usize) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .get_mut(id.wrapping_sub(1))
            .ok_or(StoreError::TaskNotFound(id))?;
        task.completed = true;
        let completed = task.clone();
        self.save()?;
        Ok(completed)
    }

    /// Replaces the in-memory sequence with the storage file contents.
    ///
    /// A missing file leaves the store empty. Corrupt records are skipped
    /// individually so the remaining records still load.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.tasks = Vec::new();
                return Ok(());
            }
            Err(e) => return Err(StoreError::StorageUnavailable(e)),
        };

        let values: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| StoreError::CorruptRecord(e.to_string()))?;

        let mut tasks = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<Task>(value) {
                Ok(task) => tasks.push(task),
                Err(e) => warn!("skipping corrupt task record: {}", e),
            }
        }
        self.tasks = tasks;
        Ok(())
    }

    /// Serializes the full sequence to the storage file, replacing its
    /// previous contents.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.tasks)
            .map_err(|e| StoreError::CorruptRecord(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
