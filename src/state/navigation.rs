// Navigation state - the stack of screens above the root
use super::Destination;

/// Ordered stack of destinations pushed above the root screen.
///
/// The last element is the visible screen. An empty path means the root
/// screen is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationPath {
    stack: Vec<Destination>,
}

impl NavigationPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a destination. Duplicates are allowed.
    pub fn push(&mut self, destination: Destination) {
        self.stack.push(destination);
        tracing::debug!(?destination, depth = self.stack.len(), "push");
    }

    /// Remove every destination, returning to the root screen.
    pub fn clear(&mut self) {
        let popped = self.stack.len();
        self.stack.clear();
        tracing::debug!(popped, "pop to root");
    }

    /// Remove the visible destination. Used by the container's back control.
    pub fn pop(&mut self) -> Option<Destination> {
        let popped = self.stack.pop();
        if let Some(destination) = popped {
            tracing::debug!(?destination, depth = self.stack.len(), "pop");
        }
        popped
    }

    pub fn top(&self) -> Option<Destination> {
        self.stack.last().copied()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn is_root_visible(&self) -> bool {
        self.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Destination> + '_ {
        self.stack.iter().copied()
    }

    pub fn as_slice(&self) -> &[Destination] {
        &self.stack
    }
}
