//! Renderer-agnostic display tree.
//!
//! A [`DisplayNode`] describes what should appear on screen without saying
//! how. The list renderer produces one, a display surface consumes it, and
//! the terminal widgets know how to draw it.
//!
//! Nodes are generic over `M`, the value an activated [`Control`] hands back
//! to whoever dispatches interactions (the application uses
//! [`Message`](tasklist_protocol::Message)).

use std::fmt;
use std::rc::Rc;

use tasklist_protocol::Task;

/// Callback stored in a control; invoked with the task captured at render time.
pub type Callback<M> = Rc<dyn Fn(&Task) -> M>;

/// An actionable control bound to one task.
///
/// The task is captured by value when the control is built, so later store
/// mutations never change which task the control refers to.
pub struct Control<M> {
    /// Style classes of the control.
    pub classes: Vec<&'static str>,
    /// Text shown on the control.
    pub label: &'static str,
    task: Task,
    on_activate: Callback<M>,
}

impl<M> Control<M> {
    /// Creates a control for `task` that invokes `on_activate` when activated.
    #[must_use]
    pub fn new(
        classes: Vec<&'static str>,
        label: &'static str,
        task: Task,
        on_activate: Callback<M>,
    ) -> Self {
        Self {
            classes,
            label,
            task,
            on_activate,
        }
    }

    /// The task this control was built for.
    #[must_use]
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Activates the control, invoking its callback with the captured task.
    pub fn activate(&self) -> M {
        (self.on_activate)(&self.task)
    }

    /// Returns `true` if the control carries the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }
}

impl<M> Clone for Control<M> {
    fn clone(&self) -> Self {
        Self {
            classes: self.classes.clone(),
            label: self.label,
            task: self.task.clone(),
            on_activate: Rc::clone(&self.on_activate),
        }
    }
}

impl<M> fmt::Debug for Control<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("classes", &self.classes)
            .field("label", &self.label)
            .field("task", &self.task)
            .finish_non_exhaustive()
    }
}

/// Controls compare by structure; callbacks are not comparable.
impl<M> PartialEq for Control<M> {
    fn eq(&self, other: &Self) -> bool {
        self.classes == other.classes && self.label == other.label && self.task == other.task
    }
}

/// One list entry: a description and its control.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryNode<M> {
    /// Style classes of the entry.
    pub classes: Vec<&'static str>,
    /// Text shown for the entry.
    pub description: String,
    /// The entry's actionable control.
    pub control: Control<M>,
}

impl<M> EntryNode<M> {
    /// Flattened text content: the control label, then the description.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.control.label, self.description)
    }

    /// Returns `true` if the entry carries the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }
}

/// A container of child nodes, semantically a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode<M> {
    /// Style classes of the list.
    pub classes: Vec<&'static str>,
    /// Children in display order.
    pub children: Vec<DisplayNode<M>>,
}

/// A node of the display tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayNode<M> {
    /// A list container.
    List(ListNode<M>),
    /// A list entry with a control.
    Entry(EntryNode<M>),
    /// Plain text, used for placeholders.
    Text(String),
}

impl<M> DisplayNode<M> {
    /// Returns every entry in the tree, in display order.
    #[must_use]
    pub fn entries(&self) -> Vec<&EntryNode<M>> {
        match self {
            Self::List(list) => list.children.iter().flat_map(Self::entries).collect(),
            Self::Entry(entry) => vec![entry],
            Self::Text(_) => Vec::new(),
        }
    }

    /// Returns the number of entries in the tree.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries().len()
    }

    /// Returns the entry at `index` in display order, if any.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&EntryNode<M>> {
        self.entries().into_iter().nth(index)
    }

    /// Flattened text content of the whole tree.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::List(list) => list.children.iter().map(Self::text).collect(),
            Self::Entry(entry) => entry.text(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Returns `true` if this node carries the given class.
    ///
    /// Text nodes have no classes.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        match self {
            Self::List(list) => list.classes.contains(&class),
            Self::Entry(entry) => entry.has_class(class),
            Self::Text(_) => false,
        }
    }

    /// Returns `true` for list nodes.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}
