//! Session-scoped interaction state.
//!
//! Both sets live only for the current session: they start empty, are
//! never persisted, and reset when the explorer restarts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The set of folder ids the current session has already PIN-unlocked.
///
/// Additive only; a folder is never re-locked within the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnlockSet {
    ids: HashSet<i64>,
}

impl UnlockSet {
    /// Create an empty unlock set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the folder has been unlocked this session.
    pub fn contains(&self, folder_id: i64) -> bool {
        self.ids.contains(&folder_id)
    }

    /// Record a successful unlock.
    pub fn insert(&mut self, folder_id: i64) {
        self.ids.insert(folder_id);
    }

    /// Number of folders unlocked this session.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no folder has been unlocked yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The set of folder ids currently expanded in the tree view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpandedSet {
    ids: HashSet<i64>,
}

impl ExpandedSet {
    /// Create a collapsed tree state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the folder's branch is expanded.
    pub fn contains(&self, folder_id: i64) -> bool {
        self.ids.contains(&folder_id)
    }

    /// Flip a folder between expanded and collapsed.
    pub fn toggle(&mut self, folder_id: i64) {
        if !self.ids.insert(folder_id) {
            self.ids.remove(&folder_id);
        }
    }

    /// Expand a folder's branch.
    pub fn expand(&mut self, folder_id: i64) {
        self.ids.insert(folder_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_set_is_additive() {
        let mut unlocked = UnlockSet::new();
        assert!(unlocked.is_empty());
        unlocked.insert(3);
        unlocked.insert(3);
        assert!(unlocked.contains(3));
        assert_eq!(unlocked.len(), 1);
    }

    #[test]
    fn test_expanded_set_toggles() {
        let mut expanded = ExpandedSet::new();
        expanded.toggle(1);
        assert!(expanded.contains(1));
        expanded.toggle(1);
        assert!(!expanded.contains(1));
    }
}
