// Nested file tree for the tree diagram

use crate::analysis::ignore::should_ignore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of directory levels collected
pub const DEFAULT_TREE_DEPTH: usize = 10;

/// Kind of tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One file or directory in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
    /// Always empty for files, and for directories at the depth limit
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Levels below this node, 0 for a leaf
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Build the tree of non-ignored entries under `root`
///
/// Entries are sorted by name at every level so repeated runs render the same
/// diagram. Directories `max_depth` levels down get empty children. A
/// directory that cannot be listed contributes no children.
pub fn build_tree(root: &Path, max_depth: usize) -> Vec<TreeNode> {
    collect_level(root, root, max_depth, 0)
}

fn collect_level(root: &Path, dir: &Path, max_depth: usize, depth: usize) -> Vec<TreeNode> {
    if depth >= max_depth {
        return Vec::new();
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    let mut nodes = Vec::new();
    for entry in entries {
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if should_ignore(relative) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let node = if path.is_dir() {
            TreeNode {
                name,
                children: collect_level(root, &path, max_depth, depth + 1),
                path,
                kind: NodeKind::Directory,
            }
        } else {
            TreeNode {
                name,
                path,
                kind: NodeKind::File,
                children: Vec::new(),
            }
        };
        nodes.push(node);
    }

    nodes
}
