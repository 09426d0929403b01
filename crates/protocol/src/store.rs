//! The authoritative task list.
//!
//! [`TaskStore`] owns an insertion-ordered sequence of tasks. Every query
//! returns owned copies, and every mutation rebuilds the sequence from
//! copies, so a snapshot taken before a mutation is never affected by it.

use tracing::debug;

use crate::seed::SeedEntry;
use crate::task::{Task, TaskId, TaskStatus};

/// In-memory store of tasks.
///
/// # Examples
///
/// ```
/// use tasklist_protocol::{TaskId, TaskStore};
///
/// let mut store = TaskStore::new();
/// let task = store.add_task("Write docs");
/// assert_eq!(task.id, TaskId::new(1));
///
/// store.mark_complete(task.id);
/// assert!(store.incomplete_tasks().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from seed entries, assigning ids `1..=N` by position.
    ///
    /// Seed data is trusted: empty descriptions are kept as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_protocol::seed::SeedEntry;
    /// use tasklist_protocol::{TaskId, TaskStore};
    ///
    /// let store = TaskStore::from_seed([
    ///     SeedEntry::incomplete("first"),
    ///     SeedEntry::complete("second"),
    /// ]);
    /// assert_eq!(store.len(), 2);
    /// assert_eq!(store.get(TaskId::new(2)).map(|t| t.description), Some("second".into()));
    /// ```
    #[must_use]
    pub fn from_seed(entries: impl IntoIterator<Item = SeedEntry>) -> Self {
        let tasks = entries
            .into_iter()
            .zip(1u64..)
            .map(|(entry, id)| Task::with_status(TaskId::new(id), entry.description, entry.status))
            .collect::<Vec<_>>();
        debug!(count = tasks.len(), "seeded task store");
        Self { tasks }
    }

    /// Returns the number of tasks, complete or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the id the next added task will receive.
    ///
    /// This is one past the largest id in the store, or `1` when empty.
    #[must_use]
    pub fn next_id(&self) -> TaskId {
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(TaskId::new(1), TaskId::next)
    }

    /// Returns copies of every incomplete task, in insertion order.
    #[must_use]
    pub fn incomplete_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_incomplete())
            .cloned()
            .collect()
    }

    /// Returns a copy of the task with the given id, if any.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Returns the number of incomplete tasks.
    #[must_use]
    pub fn incomplete_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_incomplete()).count()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn complete_count(&self) -> usize {
        self.len() - self.incomplete_count()
    }

    /// Appends a new incomplete task and returns a copy of it.
    ///
    /// The store does not reject empty descriptions; callers that accept
    /// user input are expected to filter those out.
    pub fn add_task(&mut self, description: impl Into<String>) -> Task {
        let task = Task::new(self.next_id(), description);
        debug!(id = %task.id, "adding task");
        self.tasks.push(task.clone());
        task
    }

    /// Marks the task with the given id as complete.
    ///
    /// The sequence is rebuilt from fresh copies rather than edited in place.
    /// Returns `false` when no task has that id, in which case nothing changes.
    pub fn mark_complete(&mut self, id: TaskId) -> bool {
        if !self.tasks.iter().any(|t| t.id == id) {
            debug!(%id, "mark_complete: no such task");
            return false;
        }

        self.tasks = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    t.completed()
                } else {
                    t.clone()
                }
            })
            .collect();
        debug!(%id, "marked task complete");
        true
    }

    /// Returns the status of the task with the given id, if any.
    #[must_use]
    pub fn status_of(&self, id: TaskId) -> Option<TaskStatus> {
        self.tasks.iter().find(|t| t.id == id).map(|t| t.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_seed;

    fn seeded() -> TaskStore {
        TaskStore::from_seed(default_seed())
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id.get()).collect()
    }

    #[test]
    fn seed_assigns_positional_ids() {
        let store = seeded();
        let incomplete = store.incomplete_tasks();

        assert_eq!(ids(&incomplete), vec![1, 2, 3, 4]);
        assert_eq!(incomplete[0].description, "Implement the Model");
        assert_eq!(incomplete[3].description, "Implement the Controller");
        assert!(incomplete.iter().all(|t| t.status == TaskStatus::Incomplete));
    }

    #[test]
    fn seed_keeps_completed_entries_out_of_incomplete_view() {
        let store = TaskStore::from_seed([
            SeedEntry::incomplete("a"),
            SeedEntry::complete("b"),
            SeedEntry::incomplete("c"),
        ]);

        assert_eq!(ids(&store.incomplete_tasks()), vec![1, 3]);
        assert_eq!(store.complete_count(), 1);
        assert_eq!(store.next_id(), TaskId::new(4));
    }

    #[test]
    fn add_task_appends_with_next_id() {
        let mut store = seeded();

        let added = store.add_task("testing task 1");
        assert_eq!(added.id, TaskId::new(5));
        assert_eq!(added.status, TaskStatus::Incomplete);

        let incomplete = store.incomplete_tasks();
        assert_eq!(incomplete.len(), 5);
        assert_eq!(incomplete[4].description, "testing task 1");

        let second = store.add_task("testing task 2");
        assert_eq!(second.id, TaskId::new(6));
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.add_task("first").id, TaskId::new(1));
    }

    #[test]
    fn add_task_does_not_validate_description() {
        let mut store = TaskStore::new();
        let task = store.add_task("");
        assert_eq!(task.description, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_completion() {
        let mut store = TaskStore::new();
        let a = store.add_task("a");
        store.mark_complete(a.id);
        let b = store.add_task("b");
        assert_eq!(b.id, TaskId::new(2));
    }

    #[test]
    fn mark_complete_removes_from_incomplete_view() {
        let mut store = seeded();
        store.add_task("testing task 1");

        assert!(store.mark_complete(TaskId::new(5)));

        let incomplete = store.incomplete_tasks();
        assert_eq!(incomplete.len(), 4);
        assert!(incomplete.iter().all(|t| t.id != TaskId::new(5)));
        assert_eq!(store.status_of(TaskId::new(5)), Some(TaskStatus::Complete));
    }

    #[test]
    fn mark_complete_unknown_id_is_noop() {
        let mut store = seeded();
        let before = store.clone();

        assert!(!store.mark_complete(TaskId::new(42)));
        assert_eq!(store, before);
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let mut once = seeded();
        once.mark_complete(TaskId::new(2));

        let mut twice = seeded();
        twice.mark_complete(TaskId::new(2));
        twice.mark_complete(TaskId::new(2));

        assert_eq!(once.incomplete_tasks(), twice.incomplete_tasks());
    }

    #[test]
    fn snapshot_survives_mark_complete() {
        let mut store = seeded();
        let snapshot = store.incomplete_tasks();

        store.mark_complete(TaskId::new(1));

        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot[0].status, TaskStatus::Incomplete);
        assert_eq!(store.incomplete_tasks().len(), 3);
    }

    #[test]
    fn mutating_returned_copy_does_not_touch_store() {
        let store = seeded();
        let mut copy = store.incomplete_tasks();
        copy[0].description.push_str(" (edited)");
        copy[0].status = TaskStatus::Complete;

        let fresh = store.incomplete_tasks();
        assert_eq!(fresh[0].description, "Implement the Model");
        assert_eq!(fresh[0].status, TaskStatus::Incomplete);
    }

    #[test]
    fn get_returns_copy() {
        let store = seeded();
        assert_eq!(
            store.get(TaskId::new(2)).map(|t| t.description),
            Some("Implement the View".to_string())
        );
        assert!(store.get(TaskId::new(99)).is_none());
    }
}
