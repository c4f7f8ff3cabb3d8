//! Locating one path component among the children of a context node.

use core::cmp::Ordering;

use indextree::NodeId;

use crate::hint::{Hint, names_match_after, names_match_before};
use crate::path::PathComponent;
use crate::trace;
use crate::tree::SourceTree;

/// Awarded for each side of a hint whose neighbors match.
pub const NEIGHBOR_SCORE: f64 = 0.5;

/// Awarded for sitting at the component's expected occurrence when no hint
/// is available.
pub const POSITION_SCORE: f64 = 0.1;

/// A child that carries the component's name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The matching child.
    pub node: NodeId,
    /// 0-based index among the same-named children of the context.
    pub index: usize,
    /// How well the candidate agrees with the hint (or position).
    pub score: f64,
}

impl Candidate {
    /// Best first: higher score wins, then the later occurrence.
    pub fn ranking(a: &Self, b: &Self) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.index.cmp(&a.index))
    }
}

/// Find the children of `ctx` named like `component` and score each against
/// `hint`.
///
/// With a hint, each side whose neighbors match exactly adds
/// [`NEIGHBOR_SCORE`]. Without one, the candidate at occurrence
/// `component.pos` gets [`POSITION_SCORE`]. Candidates are returned in
/// document order.
pub fn locate<T: SourceTree>(
    tree: &T,
    ctx: NodeId,
    component: &PathComponent,
    hint: Option<&Hint>,
) -> Vec<Candidate> {
    let names = tree.child_names(ctx);
    let expected = component.pos.checked_sub(1);

    tree.children(ctx)
        .enumerate()
        .filter(|&(ix, _)| names[ix] == Some(component.name.as_str()))
        .enumerate()
        .map(|(index, (ix, node))| {
            let mut score = 0.0;
            match hint {
                Some(hint) => {
                    if names_match_before(&names, ix, &hint.before) {
                        score += NEIGHBOR_SCORE;
                    }
                    if names_match_after(&names, ix, &hint.after) {
                        score += NEIGHBOR_SCORE;
                    }
                }
                None if expected == Some(index) => score += POSITION_SCORE,
                None => {}
            }
            trace!(
                name = %component.name,
                index,
                sibling = ix,
                score,
                "locate: candidate"
            );
            Candidate { node, index, score }
        })
        .collect()
}
