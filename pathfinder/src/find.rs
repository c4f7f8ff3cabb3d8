//! Resolving a whole path in a target tree.

use indextree::NodeId;

use crate::hint::{Hint, HintConfig, hints_for_path};
use crate::insertion::index_for_hint;
use crate::locate::{Candidate, locate};
use crate::path::NodePath;
use crate::tree::SourceTree;
use crate::{debug, trace};

/// Outcome of [`find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The path was empty; the node is the root itself.
    Root(NodeId),

    /// Every component was found. The node is `parent`'s child at `index`.
    Found {
        /// Parent of the matched node.
        parent: NodeId,
        /// Index of the matched node among `parent`'s children.
        index: usize,
    },

    /// Some component is missing. `rest` must be created under `parent`,
    /// inserted at `index` (which may equal the child count).
    Partial {
        /// Deepest node that could be resolved.
        parent: NodeId,
        /// Insertion index among `parent`'s children.
        index: usize,
        /// The unresolved components, starting with the missing one.
        rest: NodePath,
    },
}

impl SearchResult {
    /// The matched node, or `None` for a partial match.
    pub fn node<T: SourceTree>(&self, tree: &T) -> Option<NodeId> {
        match *self {
            SearchResult::Root(root) => Some(root),
            SearchResult::Found { parent, index } => tree.child_at(parent, index),
            SearchResult::Partial { .. } => None,
        }
    }

    /// Whether part of the path still has to be created.
    pub fn is_partial(&self) -> bool {
        matches!(self, SearchResult::Partial { .. })
    }

    /// Parent of the matched node or of the insertion point. `None` for the
    /// root.
    pub fn parent(&self) -> Option<NodeId> {
        match *self {
            SearchResult::Root(_) => None,
            SearchResult::Found { parent, .. } | SearchResult::Partial { parent, .. } => {
                Some(parent)
            }
        }
    }

    /// Child index of the matched node or of the insertion point. `None` for
    /// the root.
    pub fn index(&self) -> Option<usize> {
        match *self {
            SearchResult::Root(_) => None,
            SearchResult::Found { index, .. } | SearchResult::Partial { index, .. } => {
                Some(index)
            }
        }
    }

    /// Components that could not be located.
    pub fn rest(&self) -> Option<&NodePath> {
        match self {
            SearchResult::Partial { rest, .. } => Some(rest),
            _ => None,
        }
    }
}

/// Locate `path` in `tree`, using `hints[i]` to disambiguate component `i`.
///
/// Components are consumed root-most first. At each level every current
/// context is searched; the best-scoring candidates (all of them, on a tie)
/// become the contexts for the next level. When a component has no candidate
/// at all, the search stops and reports where the remainder of the path
/// should be inserted, using that component's hint.
///
/// Hints may be shorter than the path; missing entries count as absent.
pub fn find<T: SourceTree>(tree: &T, path: &NodePath, hints: &[Option<Hint>]) -> SearchResult {
    if path.is_root() {
        return SearchResult::Root(tree.root());
    }

    let mut contexts = vec![tree.root()];
    for (depth, component) in path.iter().enumerate() {
        let hint = hints.get(depth).and_then(Option::as_ref);
        let elite = elite_set(
            contexts
                .iter()
                .flat_map(|&ctx| locate(tree, ctx, component, hint))
                .collect(),
        );

        if elite.is_empty() {
            let parent = contexts.last().copied().unwrap_or_else(|| tree.root());
            let index = index_for_hint(tree, parent, hint);
            let rest: NodePath = path.components()[depth..].iter().cloned().collect();
            debug!(depth, index, rest = %rest, "find: component missing");
            return SearchResult::Partial {
                parent,
                index,
                rest,
            };
        }

        trace!(depth, name = %component.name, elite = elite.len(), "find: level resolved");
        contexts = elite;
    }

    let node = contexts.last().copied().unwrap_or_else(|| tree.root());
    match tree.parent(node).zip(tree.position(node)) {
        Some((parent, index)) => SearchResult::Found { parent, index },
        None => SearchResult::Root(node),
    }
}

/// Rank the candidates and keep every node tied for the best score, best
/// first.
fn elite_set(mut candidates: Vec<Candidate>) -> Vec<NodeId> {
    candidates.sort_by(Candidate::ranking);
    let Some(best) = candidates.first().map(|candidate| candidate.score) else {
        return Vec::new();
    };
    candidates
        .iter()
        .take_while(|candidate| candidate.score == best)
        .map(|candidate| candidate.node)
        .collect()
}

/// Find the counterpart of `node` (a node of `origin`) in `target`.
///
/// The path and per-level hints are recorded from `origin` and searched for
/// in `target`.
pub fn resolve<A, B>(origin: &A, node: NodeId, target: &B, config: &HintConfig) -> SearchResult
where
    A: SourceTree,
    B: SourceTree,
{
    let path = NodePath::of(origin, node);
    let hints = hints_for_path(origin, node, config);
    find(target, &path, &hints)
}
