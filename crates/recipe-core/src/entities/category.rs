//! Category entity - node in a self-referencing tree
//!
//! Nesting is capped at [`MAX_CATEGORY_DEPTH`] levels. Tree walks below never
//! recurse, so even a chain stored before the cap existed cannot exhaust the
//! stack.

use std::collections::HashMap;

use crate::error::DomainError;
use crate::value_objects::Id;

use super::require_text;

/// Deepest allowed nesting; a root category sits at depth 1
pub const MAX_CATEGORY_DEPTH: usize = 64;

/// Category row; `parent_id = None` marks a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub parent_id: Option<Id>,
}

/// Values for inserting or replacing a category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub parent_id: Option<Id>,
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name)
    }
}

/// Check that a subtree `height` levels tall fits below a parent at `parent_depth`
///
/// A new leaf has height 1. A root placement passes `parent_depth = 0`.
pub fn check_category_depth(parent_depth: usize, height: usize) -> Result<(), DomainError> {
    if parent_depth + height > MAX_CATEGORY_DEPTH {
        return Err(DomainError::CategoryTooDeep {
            max: MAX_CATEGORY_DEPTH,
        });
    }
    Ok(())
}

/// A category with its direct children (one level only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDetail {
    pub category: Category,
    pub children: Vec<Category>,
}

/// A category with its full subtree
#[derive(Debug)]
pub struct CategoryTree {
    pub category: Category,
    pub children: Vec<CategoryTree>,
}

impl CategoryTree {
    /// Assemble the subtree rooted at `root` from a flat list of nodes
    ///
    /// Nodes not reachable from `root` through parent links are ignored.
    /// Children keep the order of `nodes`. Returns `None` if `root` is absent.
    pub fn build(root: Id, nodes: Vec<Category>) -> Option<Self> {
        let mut root_node = None;
        let mut by_parent: HashMap<Id, Vec<Category>> = HashMap::new();

        for node in nodes {
            if node.id == root {
                root_node = Some(node);
            } else if let Some(parent_id) = node.parent_id {
                by_parent.entry(parent_id).or_default().push(node);
            }
        }

        // Pre-order walk; each entry records the slot of its parent. Removing
        // the map entry visits every node once even if stored links loop.
        let mut order: Vec<(Category, usize)> = Vec::new();
        let mut pending = vec![(root_node?, 0)];
        while let Some((category, parent)) = pending.pop() {
            let slot = order.len();
            if let Some(children) = by_parent.remove(&category.id) {
                pending.extend(children.into_iter().rev().map(|child| (child, slot)));
            }
            order.push((category, parent));
        }

        // Every child sits after its parent, so walking backwards finishes a
        // node's children before the node itself.
        let mut assembled: Vec<Vec<CategoryTree>> = order.iter().map(|_| Vec::new()).collect();
        for (slot, (category, parent)) in order.into_iter().enumerate().rev() {
            let mut children = std::mem::take(&mut assembled[slot]);
            children.reverse();
            let node = Self { category, children };
            if slot == 0 {
                return Some(node);
            }
            assembled[parent].push(node);
        }

        None
    }

    /// Check whether `id` is this node or one of its descendants
    pub fn contains(&self, id: Id) -> bool {
        self.nodes().any(|node| node.category.id == id)
    }

    /// Number of nodes in the subtree, root included
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// A tree always holds at least its root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Depth-first iterator over every node, root first
    pub fn nodes(&self) -> impl Iterator<Item = &CategoryTree> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

impl Drop for CategoryTree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
