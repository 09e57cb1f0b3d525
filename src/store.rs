//! Ready-made [`TaskStore`](crate::traits::TaskStore) implementations

use std::error::Error;

use crate::task::{Task, TaskId};
use crate::traits::TaskStore;

/// A store that keeps every task in memory.
///
/// This is the store the test suites and the demos run against, and a
/// starting point for hosts that persist elsewhere: it implements the id
/// contract (permanent ids are assigned on first save) without any I/O.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
    id_counter: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tasks, in the order they were first saved
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn next_id(&mut self) -> TaskId {
        self.id_counter += 1;
        TaskId::from(format!("task-{}", self.id_counter))
    }
}

impl TaskStore for MemoryStore {
    fn save_task(&mut self, task: Task) -> Result<(), Box<dyn Error>> {
        match self.tasks.iter().position(|known| known.id() == task.id()) {
            Some(index) => {
                log::debug!("Updating task {} in place", task.id());
                self.tasks[index] = task;
            },
            None => {
                // First save. The incoming id is a client placeholder, so the
                // task is re-issued under a permanent id of our own.
                let id = self.next_id();
                log::debug!("Storing new task {} as {}", task.id(), id);
                self.tasks.push(task.with_id(id));
            },
        }
        Ok(())
    }
}

/// The receiving end of a [`ChannelStore`]
pub type SavedTaskReceiver = tokio::sync::mpsc::UnboundedReceiver<Task>;

/// A store that forwards every saved task into an async host.
///
/// Saving never blocks: tasks are pushed onto an unbounded channel, and the
/// host drains the other end at its own pace, usually from a tokio task that
/// does the actual persistence. Once the receiving end is gone, saves fail
/// the same recoverable way any store error does.
pub struct ChannelStore {
    sender: tokio::sync::mpsc::UnboundedSender<Task>,
}

impl ChannelStore {
    /// Create the store, along with the receiving end the host will drain
    pub fn new() -> (Self, SavedTaskReceiver) {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl TaskStore for ChannelStore {
    fn save_task(&mut self, task: Task) -> Result<(), Box<dyn Error>> {
        match self.sender.send(task) {
            Ok(()) => Ok(()),
            Err(_) => Err("the receiving end of this store is gone".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorLabel;

    fn placeholder_task(title: &str) -> Task {
        Task::new_with_parameters(
            TaskId::placeholder(),
            title.to_string(),
            "Alice".to_string(),
            "2024-05-10".to_string(),
            "2024-05-12".to_string(),
            ColorLabel::Sky,
            false,
        )
    }

    #[test]
    fn memory_stores_assign_permanent_ids_on_first_save() {
        let mut store = MemoryStore::new();
        store.save_task(placeholder_task("First")).unwrap();
        store.save_task(placeholder_task("Second")).unwrap();

        let ids: Vec<&str> = store.tasks().iter().map(|task| task.id().as_str()).collect();
        assert_eq!(ids, ["task-1", "task-2"]);
    }

    #[test]
    fn memory_stores_update_known_tasks_in_place() {
        let mut store = MemoryStore::new();
        store.save_task(placeholder_task("First")).unwrap();

        let saved = store.tasks()[0].clone();
        let mut draft = crate::draft::TaskDraft::for_task(&saved);
        draft.completed = true;
        store.save_task(draft.validate().unwrap()).unwrap();

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id(), saved.id());
        assert_eq!(store.tasks()[0].completed(), true);
    }

    #[test]
    fn channel_stores_hand_tasks_to_the_receiver() {
        let (mut store, mut receiver) = ChannelStore::new();
        store.save_task(placeholder_task("First")).unwrap();

        let received = receiver.try_recv().unwrap();
        assert_eq!(received.title(), "First");
    }

    #[test]
    fn channel_stores_fail_recoverably_once_the_receiver_is_gone() {
        let (mut store, receiver) = ChannelStore::new();
        drop(receiver);
        assert!(store.save_task(placeholder_task("First")).is_err());
    }
}
