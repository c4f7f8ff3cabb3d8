//! The read-only tree contract the search runs against, and a default
//! arena-backed tree.
//!
//! Every algorithm in this crate is written against [`SourceTree`], so any
//! representation that can answer "who is my parent", "what are my children"
//! and "what is my name" can be searched. [`Tree`] is the implementation used
//! by the parsers in this workspace.

use indextree::{Arena, NodeId};

/// Payload of a single tree node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeData {
    /// Name as written in the source (selector, property name, ...).
    pub name: Option<String>,
    /// Normalized name. When present it is used instead of `name` in every
    /// comparison.
    pub normal_name: Option<String>,
}

impl NodeData {
    /// A node with a raw name and no normalized form.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            normal_name: None,
        }
    }

    /// A node without any name, e.g. a document root.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Attach a normalized name.
    pub fn with_normal_name(mut self, normal_name: impl Into<String>) -> Self {
        self.normal_name = Some(normal_name.into());
        self
    }

    /// The name used for matching: the normalized name if set, the raw name
    /// otherwise. Nodes without either never match anything.
    pub fn effective_name(&self) -> Option<&str> {
        self.normal_name.as_deref().or(self.name.as_deref())
    }
}

/// Read-only view of an ordered tree.
///
/// Implementors only need to provide navigation and naming; positional
/// helpers have default implementations in terms of those.
pub trait SourceTree {
    /// The root node.
    fn root(&self) -> NodeId;

    /// Parent of a node, `None` for the root.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Children of a node, in document order.
    fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Effective (normalized-or-raw) name of a node.
    fn name(&self, id: NodeId) -> Option<&str>;

    /// Number of children of a node.
    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// The child at `index`, if there is one.
    fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).nth(index)
    }

    /// Index of a node among its parent's children. `None` for the root.
    fn position(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).position(|child| child == id)
    }

    /// Effective names of the children of `id`, in order.
    fn child_names(&self, id: NodeId) -> Vec<Option<&str>> {
        self.children(id).map(|child| self.name(child)).collect()
    }

    /// The `pos`-th (1-based) child of `id` whose effective name is `name`.
    fn child_named(&self, id: NodeId, name: &str, pos: usize) -> Option<NodeId> {
        let nth = pos.checked_sub(1)?;
        self.children(id)
            .filter(|&child| self.name(child) == Some(name))
            .nth(nth)
    }
}

/// An ordered tree stored in an [`indextree::Arena`].
#[derive(Debug, Clone)]
pub struct Tree {
    /// All nodes live here.
    pub arena: Arena<NodeData>,
    /// The root node.
    pub root: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(NodeData::anonymous())
    }
}

impl Tree {
    /// Create a tree holding only a root node.
    pub fn new(root: NodeData) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(root);
        Self { arena, root }
    }

    /// Append a new child under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.arena.new_node(data);
        parent.append(id, &mut self.arena);
        id
    }

    /// Payload of a node.
    pub fn get(&self, id: NodeId) -> &NodeData {
        self.arena[id].get()
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.arena.count()
    }

    /// Companion to [`Tree::len`]. A tree always holds its root, so this is
    /// `false` for every tree built through [`Tree::new`].
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

impl SourceTree for Tree {
    fn root(&self) -> NodeId {
        self.root
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent()
    }

    fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    fn name(&self, id: NodeId) -> Option<&str> {
        self.arena[id].get().effective_name()
    }
}
