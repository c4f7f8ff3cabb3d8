//! Neighbor hints: the siblings a node had around it in the origin tree.
//!
//! A hint is recorded per path level. When the target tree has several
//! same-named candidates, the one whose actual neighbors agree with the hint
//! is the better match.

use facet::Facet;
use indextree::NodeId;

use crate::path::PathComponent;
use crate::tree::SourceTree;

/// Expected neighbors of a node at one path level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct Hint {
    /// Siblings immediately preceding the node, nearest last.
    pub before: Vec<PathComponent>,
    /// Siblings immediately following the node, nearest first.
    pub after: Vec<PathComponent>,
}

impl Hint {
    /// Create a hint from neighbor names, giving every neighbor position 1.
    pub fn new<B, A>(before: B, after: A) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            before: before.into_iter().map(PathComponent::named).collect(),
            after: after.into_iter().map(PathComponent::named).collect(),
        }
    }

    /// Whether the hint carries no neighbors at all.
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    /// Record the neighbors of `node` as they appear in `tree`.
    ///
    /// Returns `None` for the root, which has no siblings, and when
    /// `config.neighbors` is zero. An empty side in a recorded hint always
    /// means the node sits at that edge.
    pub fn for_node<T: SourceTree>(tree: &T, node: NodeId, config: &HintConfig) -> Option<Self> {
        if config.neighbors == 0 {
            return None;
        }
        let parent = tree.parent(node)?;
        let siblings: Vec<NodeId> = tree.children(parent).collect();
        let ix = siblings.iter().position(|&sibling| sibling == node)?;
        let names: Vec<Option<&str>> = siblings.iter().map(|&id| tree.name(id)).collect();

        let component = |k: usize| {
            let name = names[k];
            let pos = names[..k].iter().filter(|&&other| other == name).count() + 1;
            PathComponent::new(name.unwrap_or_default(), pos)
        };

        let first = ix.saturating_sub(config.neighbors);
        let last = (ix + 1 + config.neighbors).min(siblings.len());
        Some(Self {
            before: (first..ix).map(&component).collect(),
            after: (ix + 1..last).map(&component).collect(),
        })
    }
}

/// Controls how hints are recorded from an origin tree.
#[derive(Debug, Clone)]
pub struct HintConfig {
    /// Maximum number of neighbors captured on each side of a node.
    ///
    /// Neighbor matching is all-or-nothing per side, so longer hints are
    /// stricter. Zero records no hints at all, leaving the search to fall
    /// back on occurrence positions.
    pub neighbors: usize,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self { neighbors: 2 }
    }
}

/// Record one hint per path level, root-most first, for the path leading to
/// `node`. The root itself yields an empty list.
pub fn hints_for_path<T: SourceTree>(
    tree: &T,
    node: NodeId,
    config: &HintConfig,
) -> Vec<Option<Hint>> {
    let mut hints = Vec::new();
    let mut current = node;
    while let Some(parent) = tree.parent(current) {
        hints.push(Hint::for_node(tree, current, config));
        current = parent;
    }
    hints.reverse();
    hints
}

/// Whether the siblings right before `node` are exactly `hints`
/// (nearest last). An empty hint list matches only the first sibling.
pub fn matches_before_hints<T: SourceTree>(
    tree: &T,
    node: NodeId,
    hints: &[PathComponent],
) -> bool {
    sibling_names(tree, node).is_some_and(|(names, ix)| names_match_before(&names, ix, hints))
}

/// Whether the siblings right after `node` are exactly `hints`
/// (nearest first). An empty hint list matches only the last sibling.
pub fn matches_after_hints<T: SourceTree>(
    tree: &T,
    node: NodeId,
    hints: &[PathComponent],
) -> bool {
    sibling_names(tree, node).is_some_and(|(names, ix)| names_match_after(&names, ix, hints))
}

fn sibling_names<T: SourceTree>(tree: &T, node: NodeId) -> Option<(Vec<Option<&str>>, usize)> {
    let parent = tree.parent(node)?;
    let ix = tree.children(parent).position(|sibling| sibling == node)?;
    Some((tree.child_names(parent), ix))
}

pub(crate) fn names_match_before(
    names: &[Option<&str>],
    ix: usize,
    hints: &[PathComponent],
) -> bool {
    if hints.is_empty() {
        return ix == 0;
    }
    precedes(names, ix, hints)
}

pub(crate) fn names_match_after(
    names: &[Option<&str>],
    ix: usize,
    hints: &[PathComponent],
) -> bool {
    if hints.is_empty() {
        return ix + 1 == names.len();
    }
    run_matches(names, ix + 1, hints)
}

/// Whether `run` sits immediately before index `ix`. An empty run always does.
pub(crate) fn precedes(names: &[Option<&str>], ix: usize, run: &[PathComponent]) -> bool {
    ix.checked_sub(run.len())
        .is_some_and(|start| run_matches(names, start, run))
}

/// Whether the names starting at `start` spell out `run`.
pub(crate) fn run_matches(names: &[Option<&str>], start: usize, run: &[PathComponent]) -> bool {
    names.get(start..start + run.len()).is_some_and(|window| {
        window
            .iter()
            .zip(run)
            .all(|(&name, component)| name == Some(component.name.as_str()))
    })
}
