//! Insertion-point inference for path components that do not exist in the
//! target tree.

use indextree::NodeId;

use crate::hint::{Hint, precedes, run_matches};
use crate::path::PathComponent;
use crate::tree::SourceTree;
use crate::{debug, trace};

/// Best index in `parent`'s children at which to insert a node whose origin
/// neighbors are described by `hint`.
///
/// The nearest-before and nearest-after hint entries act as anchors. Children
/// are scanned from the end, so among equally good spots the latest one wins.
/// A spot where the whole hint sequences line up beats one where only the
/// anchors do. Without a usable hint, or when no anchor is found, the node is
/// appended.
///
/// The result is always in `0..=child_count`.
pub fn index_for_hint<T: SourceTree>(tree: &T, parent: NodeId, hint: Option<&Hint>) -> usize {
    let names = tree.child_names(parent);
    let Some(hint) = hint.filter(|hint| !hint.is_empty()) else {
        return names.len();
    };

    let found = match (hint.before.split_last(), hint.after.split_first()) {
        (Some((before, _)), Some((after, _))) => between_anchors(&names, hint, before, after),
        (Some((anchor, rest)), None) => after_anchor(&names, anchor, rest),
        (None, Some((anchor, rest))) => before_anchor(&names, anchor, rest),
        (None, None) => None,
    };

    match found {
        Some(index) => index,
        None => {
            debug!(children = names.len(), "index_for_hint: no anchor, appending");
            names.len()
        }
    }
}

fn is(name: Option<&str>, component: &PathComponent) -> bool {
    name == Some(component.name.as_str())
}

/// Both anchors: pair every after-anchor with the nearest before-anchor
/// preceding it, provided no other after-anchor sits in between. The node
/// goes right in front of the after-anchor, displacing whatever now occupies
/// the gap.
fn between_anchors(
    names: &[Option<&str>],
    hint: &Hint,
    before: &PathComponent,
    after: &PathComponent,
) -> Option<usize> {
    let mut fallback = None;
    for j in (1..names.len()).rev() {
        if !is(names[j], after) {
            continue;
        }
        let Some(i) = names[..j]
            .iter()
            .rposition(|&name| is(name, before) || is(name, after))
            .filter(|&i| is(names[i], before))
        else {
            continue;
        };
        if precedes(names, i + 1, &hint.before) && run_matches(names, j, &hint.after) {
            trace!(before = i, after = j, "index_for_hint: full match between anchors");
            return Some(j);
        }
        fallback.get_or_insert(j);
    }
    fallback
}

/// Only a before-anchor: insert right after it.
fn after_anchor(
    names: &[Option<&str>],
    anchor: &PathComponent,
    rest: &[PathComponent],
) -> Option<usize> {
    let mut fallback = None;
    for i in (0..names.len()).rev() {
        if !is(names[i], anchor) {
            continue;
        }
        if precedes(names, i, rest) {
            trace!(anchor = i, "index_for_hint: full before match");
            return Some(i + 1);
        }
        fallback.get_or_insert(i + 1);
    }
    fallback
}

/// Only an after-anchor: insert right in front of it.
fn before_anchor(
    names: &[Option<&str>],
    anchor: &PathComponent,
    rest: &[PathComponent],
) -> Option<usize> {
    let mut fallback = None;
    for j in (0..names.len()).rev() {
        if !is(names[j], anchor) {
            continue;
        }
        if run_matches(names, j + 1, rest) {
            trace!(anchor = j, "index_for_hint: full after match");
            return Some(j);
        }
        fallback.get_or_insert(j);
    }
    fallback
}
