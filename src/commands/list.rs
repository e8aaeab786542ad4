use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let store = TaskStore::new()?;
    let tasks = store.tasks();
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    View::tasks(tasks)
}
