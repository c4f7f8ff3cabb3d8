//! # Pathfinder
//!
//! Locate a node of one tree inside a second, structurally similar tree.
//!
//! When an editor's live document and the file on disk drift apart, a changed
//! section has to be found in the other copy even though siblings may have
//! been added, removed or reordered. Exact path equality is not enough.
//!
//! ## Algorithm Overview
//!
//! - **Locator** ([`locate`]): for one path component, collect the same-named
//!   children of a context node and score each against a neighbor [`Hint`]
//!   (or, without a hint, against the expected occurrence).
//! - **Resolver** ([`find`]): walk the path level by level, carrying every
//!   best-scoring candidate forward, so ambiguity at one level can be settled
//!   by the next.
//! - **Insertion-point inference** ([`index_for_hint`]): when a component
//!   does not exist, use its hint's anchors to pick where the missing part of
//!   the path should be created.
//!
//! Results are best-effort heuristics, not a tree diff.
//!
//! ## Usage
//!
//! ```
//! use pathfinder::{HintConfig, NodeData, SourceTree, Tree, resolve};
//!
//! // origin: a b c
//! let mut origin = Tree::default();
//! for name in ["a", "b", "c"] {
//!     origin.add_child(origin.root, NodeData::named(name));
//! }
//!
//! // target: b a b c b
//! let mut target = Tree::default();
//! for name in ["b", "a", "b", "c", "b"] {
//!     target.add_child(target.root, NodeData::named(name));
//! }
//!
//! let b = origin.child_at(origin.root, 1).unwrap();
//! let result = resolve(&origin, b, &target, &HintConfig::default());
//! assert_eq!(result.index(), Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

pub use indextree;

mod tracing_macros;
pub(crate) use tracing_macros::{debug, trace};

/// Resolving whole paths
pub mod find;
/// Neighbor hints
pub mod hint;
/// Insertion-point inference
pub mod insertion;
/// Per-level candidate scoring
pub mod locate;
/// Node paths and their canonical string form
pub mod path;
/// Tree contract and arena tree
pub mod tree;

pub use find::{SearchResult, find, resolve};
pub use hint::{Hint, HintConfig, hints_for_path, matches_after_hints, matches_before_hints};
pub use insertion::index_for_hint;
pub use locate::{Candidate, NEIGHBOR_SCORE, POSITION_SCORE, locate};
pub use path::{NodePath, PathComponent, PathParseError};
pub use tree::{NodeData, SourceTree, Tree};
