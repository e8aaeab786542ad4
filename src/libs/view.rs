use super::task::{Task, DATETIME_FORMAT};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the task list as a table, in insertion order. The ID column
    /// is the 1-based position used by `chronos complete`.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE DATE", "PRIORITY", "STATUS"]);
        for (i, task) in tasks.iter().enumerate() {
            let due = task
                .due_date
                .map(|d| d.format(DATETIME_FORMAT).to_string())
                .unwrap_or_else(|| "No due date".to_string());
            let status = if task.completed { "Completed" } else { "Pending" };
            table.add_row(row![i + 1, task.title, due, task.priority, status]);
        }
        table.printstd();

        Ok(())
    }
}
