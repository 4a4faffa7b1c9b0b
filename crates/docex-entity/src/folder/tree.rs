//! Folder forest construction from the flat API listing.
//!
//! The API serves folders as a flat list of `{id, name, parent_id}`
//! records. [`build_forest`] derives the hierarchical view fresh on every
//! render; nothing here is cached or mutated in place.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::collate::compare_names;
use crate::folder::model::Folder;

/// A node in the derived folder forest.
///
/// Carries no identity beyond the source folder's `id`; rebuilt from the
/// flat list whenever the listing changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder ID as it appeared in the source record.
    pub parent_id: Option<i64>,
    /// Child folder nodes, sorted by display name.
    pub children: Vec<FolderNode>,
}

/// Build the sorted folder forest from a flat folder list.
///
/// Attachment rules:
/// - `parent_id` of `None` puts the folder at the root;
/// - a `parent_id` that does not resolve to any id in the input promotes
///   the folder to the root (dangling parent);
/// - a folder whose `parent_id` equals its own id is treated as dangling,
///   never as its own child;
/// - `parent_id` of `Some(0)` is root; the API uses 0 as a null-ish
///   sentinel and no real folder carries that id.
///
/// Siblings at every level (roots included) are ordered by
/// [`compare_names`]. The input is not modified.
pub fn build_forest(folders: &[Folder]) -> Vec<FolderNode> {
    let ids: HashSet<i64> = folders.iter().map(|f| f.id).collect();

    let mut children_of: HashMap<i64, Vec<&Folder>> = HashMap::new();
    let mut roots: Vec<&Folder> = Vec::new();

    for folder in folders {
        match folder.parent_id {
            Some(pid) if pid != 0 && pid != folder.id && ids.contains(&pid) => {
                children_of.entry(pid).or_default().push(folder);
            }
            _ => roots.push(folder),
        }
    }

    assemble(&roots, &children_of)
}

/// Recursively materialize and sort one level of the forest.
fn assemble(level: &[&Folder], children_of: &HashMap<i64, Vec<&Folder>>) -> Vec<FolderNode> {
    let mut nodes: Vec<FolderNode> = level
        .iter()
        .map(|folder| FolderNode {
            id: folder.id,
            name: folder.name.clone(),
            parent_id: folder.parent_id,
            children: children_of
                .get(&folder.id)
                .map(|kids| assemble(kids, children_of))
                .unwrap_or_default(),
        })
        .collect();

    nodes.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: i64, name: &str, parent_id: Option<i64>) -> Folder {
        Folder {
            id,
            name: name.to_string(),
            parent_id,
        }
    }

    fn collect_ids(nodes: &[FolderNode], out: &mut Vec<i64>) {
        for node in nodes {
            out.push(node.id);
            collect_ids(&node.children, out);
        }
    }

    #[test]
    fn test_empty_input_gives_empty_forest() {
        assert!(build_forest(&[]).is_empty());
    }

    #[test]
    fn test_every_id_appears_exactly_once() {
        let folders = vec![
            folder(1, "RH", None),
            folder(2, "Férias", Some(1)),
            folder(3, "Contratos", Some(1)),
            folder(4, "FARMÁCIA", None),
            folder(5, "Estoque", Some(4)),
        ];

        let forest = build_forest(&folders);
        let mut ids = Vec::new();
        collect_ids(&forest, &mut ids);
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_children_attach_under_parent() {
        let folders = vec![
            folder(1, "RH", None),
            folder(2, "Contratos", Some(1)),
            folder(3, "Férias", Some(1)),
        ];

        let forest = build_forest(&folders);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, 1);
        let child_names: Vec<&str> = forest[0]
            .children
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(child_names, vec!["Contratos", "Férias"]);
    }

    #[test]
    fn test_dangling_parent_promotes_to_root() {
        let folders = vec![folder(1, "RH", None), folder(2, "Órfã", Some(99))];

        let forest = build_forest(&folders);
        let root_ids: Vec<i64> = forest.iter().map(|n| n.id).collect();
        assert_eq!(root_ids, vec![2, 1]); // Órfã sorts before RH
    }

    #[test]
    fn test_self_parent_promotes_to_root() {
        let folders = vec![folder(7, "Recursiva", Some(7))];

        let forest = build_forest(&folders);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, 7);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_parent_id_zero_is_root_even_when_id_zero_exists() {
        let folders = vec![folder(0, "Raiz", None), folder(1, "Filha", Some(0))];

        let forest = build_forest(&folders);
        let root_ids: Vec<i64> = forest.iter().map(|n| n.id).collect();
        assert_eq!(root_ids, vec![1, 0]); // Filha < Raiz, both at root
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_roots_sorted_with_portuguese_diacritics() {
        let folders = vec![folder(1, "Zebra", None), folder(2, "Ábaco", None)];

        let forest = build_forest(&folders);
        let names: Vec<&str> = forest.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Ábaco", "Zebra"]);
    }

    #[test]
    fn test_every_level_is_sorted() {
        let folders = vec![
            folder(1, "DIREÇÃO GERAL", None),
            folder(2, "Únicos", Some(1)),
            folder(3, "Atas", Some(1)),
            folder(4, "Ofícios", Some(1)),
        ];

        let forest = build_forest(&folders);
        let names: Vec<&str> = forest[0]
            .children
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Atas", "Ofícios", "Únicos"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let folders = vec![folder(2, "B", None), folder(1, "A", None)];
        let before = folders.clone();
        let _ = build_forest(&folders);
        assert_eq!(folders, before);
    }
}
