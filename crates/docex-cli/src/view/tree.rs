//! Folder tree rendering.
//!
//! Produces one line per visible folder plus a parallel list of folder
//! ids so selection menus can map a chosen line back to its folder.

use docex_entity::folder::FolderNode;
use docex_entity::session::{ExpandedSet, UnlockSet};

/// One rendered line of the tree pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// The folder this line represents.
    pub folder_id: i64,
    /// Rendered text (indentation, markers, name).
    pub text: String,
}

/// Render the visible part of the forest: children appear only under
/// expanded branches.
pub fn render_tree(
    forest: &[FolderNode],
    expanded: &ExpandedSet,
    unlocked: &UnlockSet,
    active_folder_id: Option<i64>,
) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    for node in forest {
        render_node(node, 0, expanded, unlocked, active_folder_id, &mut lines);
    }
    lines
}

fn render_node(
    node: &FolderNode,
    level: usize,
    expanded: &ExpandedSet,
    unlocked: &UnlockSet,
    active_folder_id: Option<i64>,
    lines: &mut Vec<TreeLine>,
) {
    let is_expanded = expanded.contains(node.id);
    let marker = if node.children.is_empty() {
        " "
    } else if is_expanded {
        "▾"
    } else {
        "▸"
    };
    let selected = if active_folder_id == Some(node.id) {
        "› "
    } else {
        "  "
    };
    let lock = if unlocked.contains(node.id) { "" } else { " 🔒" };

    lines.push(TreeLine {
        folder_id: node.id,
        text: format!("{selected}{}{marker} {}{lock}", "  ".repeat(level), node.name),
    });

    if is_expanded {
        for child in &node.children {
            render_node(child, level + 1, expanded, unlocked, active_folder_id, lines);
        }
    }
}
