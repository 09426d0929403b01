//! The view controller.
//!
//! [`Controller`] owns the [`TaskStore`] and bridges interaction messages to
//! store mutations. After every mutation it rebuilds the whole task view and
//! attaches it to the display surface.

use tasklist_protocol::{Message, Task, TaskId, TaskStore};
use tracing::{debug, trace};

use crate::surface::{DisplaySurface, InputSurface};
use crate::view::render_task_list;

/// Callback wired into every rendered completion control.
fn mark_complete_callback(task: &Task) -> Message {
    Message::CompleteTask { id: task.id }
}

/// Wires interactions to the task store and re-renders the task view.
///
/// # Examples
///
/// ```
/// use tasklist_protocol::{Message, TaskStore, seed::default_seed};
/// use tasklist_tui::controller::Controller;
/// use tasklist_tui::surface::{Screen, TextInput};
///
/// let mut controller = Controller::new(
///     TaskStore::from_seed(default_seed()),
///     Screen::new(),
///     TextInput::with_value("Write the docs"),
/// );
/// controller.render_task_view();
/// controller.update(Message::AddTask);
///
/// assert_eq!(controller.display().entry_count(), 5);
/// ```
#[derive(Debug)]
pub struct Controller<D, I> {
    store: TaskStore,
    display: D,
    input: I,
}

impl<D, I> Controller<D, I>
where
    D: DisplaySurface<Message>,
    I: InputSurface,
{
    /// Creates a controller over the given store and surfaces.
    ///
    /// Nothing is rendered until [`render_task_view`](Self::render_task_view)
    /// is called.
    #[must_use]
    pub fn new(store: TaskStore, display: D, input: I) -> Self {
        Self {
            store,
            display,
            input,
        }
    }

    /// Read access to the store.
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Read access to the display surface.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Read access to the input surface.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the input surface, for text editing.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Rebuilds the task view from the store and attaches it.
    ///
    /// Each call fully replaces the previous output.
    pub fn render_task_view(&mut self) {
        let root = render_task_list(&self.store, mark_complete_callback);
        debug!(entries = root.entry_count(), "rendering task view");
        self.display.attach(root);
    }

    /// Handles an interaction message.
    ///
    /// Returns `true` if the message was one the controller handles
    /// (`AddTask` or `CompleteTask`), whether or not it changed anything.
    pub fn update(&mut self, msg: Message) -> bool {
        match msg {
            Message::AddTask => {
                self.add_task_from_input();
                true
            }
            Message::CompleteTask { id } => {
                self.complete_task(id);
                true
            }
            _ => false,
        }
    }

    /// Adds the current input value as a task, unless it is empty.
    fn add_task_from_input(&mut self) {
        let value = self.input.read_value();
        if value.is_empty() {
            trace!("ignoring add with empty input");
            return;
        }

        let task = self.store.add_task(value);
        debug!(id = %task.id, "task added from input");
        self.input.clear();
        self.render_task_view();
    }

    fn complete_task(&mut self, id: TaskId) {
        self.store.mark_complete(id);
        self.render_task_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Screen, TextInput};
    use tasklist_protocol::seed::default_seed;

    type TestController = Controller<Screen<Message>, TextInput>;

    fn controller() -> TestController {
        let mut c = Controller::new(
            TaskStore::from_seed(default_seed()),
            Screen::new(),
            TextInput::new(),
        );
        c.render_task_view();
        c
    }

    fn descriptions(c: &TestController) -> Vec<String> {
        c.display()
            .root()
            .map(|root| {
                root.entries()
                    .into_iter()
                    .map(|e| e.description.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn type_text(c: &mut TestController, text: &str) {
        for ch in text.chars() {
            c.input_mut().push(ch);
        }
    }

    #[test]
    fn render_task_view_attaches_list() {
        let c = controller();
        let root = c.display().root().expect("attached");
        assert!(root.is_list());
        assert_eq!(c.display().entry_count(), 4);
    }

    #[test]
    fn render_task_view_replaces_instead_of_appending() {
        let mut c = controller();
        c.render_task_view();
        c.render_task_view();
        assert_eq!(c.display().entry_count(), 4);
        assert_eq!(c.display().attach_count(), 3);
    }

    #[test]
    fn activating_last_control_completes_that_task() {
        let mut c = controller();

        let msg = c.display().entry(3).map(|e| e.control.activate());
        assert_eq!(msg, Some(Message::CompleteTask { id: TaskId::new(4) }));
        assert!(c.update(msg.expect("entry")));

        assert_eq!(c.display().entry_count(), 3);
        assert_eq!(
            descriptions(&c),
            vec![
                "Implement the Model",
                "Implement the View",
                "Load the seed data"
            ]
        );
    }

    #[test]
    fn activating_first_control_removes_first_entry() {
        let mut c = controller();
        let msg = c.display().entry(0).map(|e| e.control.activate());
        c.update(msg.expect("entry"));

        assert_eq!(c.display().entry_count(), 3);
        assert_eq!(descriptions(&c)[0], "Implement the View");
    }

    #[test]
    fn stale_control_still_targets_its_task() {
        let mut c = controller();
        let stale = c.display().entry(1).map(|e| e.control.clone()).expect("entry");

        c.update(Message::CompleteTask { id: TaskId::new(1) });
        c.update(stale.activate());

        assert_eq!(c.store().incomplete_count(), 2);
        assert!(c.store().get(TaskId::new(2)).is_some_and(|t| t.status.is_complete()));
    }

    #[test]
    fn add_task_appends_clears_input_and_rerenders() {
        let mut c = controller();
        type_text(&mut c, "Test adding task");

        c.update(Message::AddTask);

        assert_eq!(c.display().entry_count(), 5);
        assert_eq!(
            descriptions(&c).last().map(String::as_str),
            Some("Test adding task")
        );
        assert_eq!(c.input().read_value(), "");
        assert_eq!(
            c.store().get(TaskId::new(5)).map(|t| t.description),
            Some("Test adding task".into())
        );
    }

    #[test]
    fn add_task_with_empty_input_changes_nothing() {
        let mut c = controller();
        let attaches = c.display().attach_count();

        assert!(c.update(Message::AddTask));

        assert_eq!(c.store().len(), 4);
        assert_eq!(c.display().entry_count(), 4);
        assert_eq!(c.display().attach_count(), attaches);
    }

    #[test]
    fn whitespace_input_is_not_empty() {
        let mut c = controller();
        type_text(&mut c, " ");
        c.update(Message::AddTask);
        assert_eq!(c.store().len(), 5);
    }

    #[test]
    fn completing_unknown_id_still_rerenders_same_view() {
        let mut c = controller();
        let before = descriptions(&c);
        c.update(Message::CompleteTask { id: TaskId::new(99) });
        assert_eq!(descriptions(&c), before);
    }

    #[test]
    fn completing_everything_leaves_placeholder() {
        let mut c = controller();
        for id in 1..=4 {
            c.update(Message::CompleteTask { id: TaskId::new(id) });
        }
        assert_eq!(c.display().entry_count(), 0);
        assert_eq!(
            c.display().root().map(|r| r.text()),
            Some(crate::view::EMPTY_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn unrelated_messages_are_not_handled() {
        let mut c = controller();
        assert!(!c.update(Message::NavigateDown));
        assert!(!c.update(Message::Quit));
        assert_eq!(c.display().attach_count(), 1);
    }
}
