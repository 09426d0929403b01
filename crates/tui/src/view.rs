//! The list renderer.
//!
//! Projects the incomplete tasks of a [`TaskStore`] into a display tree.
//! Rendering only reads the store.

use std::rc::Rc;

use tasklist_protocol::{Task, TaskStore};

use crate::display::{Callback, Control, DisplayNode, EntryNode, ListNode};

/// Classes carried by the list container.
pub const LIST_CLASSES: [&str; 2] = ["list-group", "list-group-flush"];

/// Class carried by each entry.
pub const ENTRY_CLASS: &str = "list-group-item";

/// Classes carried by each entry's completion control.
pub const CONTROL_CLASSES: [&str; 3] = ["btn", "btn-sm", "btn-warning"];

/// Label of the completion control.
pub const CONTROL_LABEL: &str = "done";

/// Placeholder text shown when nothing is left to do.
pub const EMPTY_PLACEHOLDER: &str = "None!";

/// Renders the incomplete tasks of `store` as a list.
///
/// Each entry's control invokes `on_complete` with the task it was built
/// for. With no incomplete tasks, the list holds a single
/// [`EMPTY_PLACEHOLDER`] text node and no entries.
///
/// # Examples
///
/// ```
/// use tasklist_protocol::{Message, TaskStore, seed::default_seed};
/// use tasklist_tui::view::render_task_list;
///
/// let store = TaskStore::from_seed(default_seed());
/// let tree = render_task_list(&store, |task| Message::CompleteTask { id: task.id });
///
/// assert_eq!(tree.entry_count(), 4);
/// let msg = tree.entry(0).map(|e| e.control.activate());
/// assert!(matches!(msg, Some(Message::CompleteTask { .. })));
/// ```
pub fn render_task_list<M, F>(store: &TaskStore, on_complete: F) -> DisplayNode<M>
where
    F: Fn(&Task) -> M + 'static,
{
    let callback: Callback<M> = Rc::new(on_complete);
    let incomplete = store.incomplete_tasks();

    let children = if incomplete.is_empty() {
        vec![DisplayNode::Text(EMPTY_PLACEHOLDER.to_string())]
    } else {
        incomplete
            .into_iter()
            .map(|task| render_single_task(task, &callback))
            .collect()
    };

    DisplayNode::List(ListNode {
        classes: LIST_CLASSES.to_vec(),
        children,
    })
}

fn render_single_task<M>(task: Task, callback: &Callback<M>) -> DisplayNode<M> {
    DisplayNode::Entry(EntryNode {
        classes: vec![ENTRY_CLASS],
        description: task.description.clone(),
        control: Control::new(
            CONTROL_CLASSES.to_vec(),
            CONTROL_LABEL,
            task,
            Rc::clone(callback),
        ),
    })
}
