//! Display and input surfaces.
//!
//! The controller only talks to the outside world through these two traits:
//! a [`DisplaySurface`] that shows a display tree, and an [`InputSurface`]
//! that holds the text of the "new task" field. [`Screen`] and [`TextInput`]
//! are the in-memory implementations the terminal front end draws from.

use crate::display::{DisplayNode, EntryNode};

/// Something that can show a display tree.
pub trait DisplaySurface<M> {
    /// Replaces whatever is currently shown with `root`.
    ///
    /// This is clear-and-replace, never a merge.
    fn attach(&mut self, root: DisplayNode<M>);
}

/// A single-line text field.
pub trait InputSurface {
    /// Returns the current text.
    fn read_value(&self) -> String;

    /// Empties the field.
    fn clear(&mut self);
}

/// Holds the most recently attached display tree.
#[derive(Debug)]
pub struct Screen<M> {
    root: Option<DisplayNode<M>>,
    attach_count: u64,
}

impl<M> Default for Screen<M> {
    fn default() -> Self {
        Self {
            root: None,
            attach_count: 0,
        }
    }
}

impl<M> Screen<M> {
    /// Creates a screen with nothing attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently attached tree, if any.
    #[must_use]
    pub fn root(&self) -> Option<&DisplayNode<M>> {
        self.root.as_ref()
    }

    /// Number of entries in the attached tree.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.root.as_ref().map_or(0, DisplayNode::entry_count)
    }

    /// Entry at `index` in the attached tree.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&EntryNode<M>> {
        self.root.as_ref()?.entry(index)
    }

    /// How many times a tree has been attached.
    #[must_use]
    pub fn attach_count(&self) -> u64 {
        self.attach_count
    }
}

impl<M> DisplaySurface<M> for Screen<M> {
    fn attach(&mut self, root: DisplayNode<M>) {
        self.root = Some(root);
        self.attach_count += 1;
    }
}

/// In-memory text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field pre-filled with `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Appends a character.
    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// Removes the last character, if any.
    pub fn pop(&mut self) {
        self.value.pop();
    }

    /// Borrowed view of the current text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl InputSurface for TextInput {
    fn read_value(&self) -> String {
        self.value.clone()
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ListNode;

    fn list_of_text(text: &str) -> DisplayNode<()> {
        DisplayNode::List(ListNode {
            classes: vec![],
            children: vec![DisplayNode::Text(text.to_string())],
        })
    }

    #[test]
    fn attach_replaces_previous_tree() {
        let mut screen = Screen::new();
        assert!(screen.root().is_none());

        screen.attach(list_of_text("first"));
        screen.attach(list_of_text("second"));

        assert_eq!(screen.root().map(DisplayNode::text), Some("second".to_string()));
        assert_eq!(screen.attach_count(), 2);
        assert_eq!(screen.entry_count(), 0);
    }

    #[test]
    fn text_input_edits_and_clears() {
        let mut input = TextInput::new();
        input.push('h');
        input.push('i');
        input.push('!');
        input.pop();
        assert_eq!(input.read_value(), "hi");
        assert_eq!(input.as_str(), "hi");

        input.clear();
        assert_eq!(input.read_value(), "");
        input.pop();
        assert_eq!(input.as_str(), "");
    }
}
