//! Parse CSS-like brace sources into [`pathfinder::Tree`]s.
//!
//! Blocks (`selector { ... }`) become nodes named by their selector and
//! declarations (`name: value;`) become leaf nodes named by the property.
//! Names are normalized so that cosmetic whitespace differences between two
//! versions of a file do not break matching.
//!
//! # Example
//!
//! ```rust
//! use pathfinder::{HintConfig, NodePath, SourceTree, resolve};
//! use pathfinder_source::parse;
//!
//! let saved = parse("a{} b{} c{}").unwrap();
//! let live = parse("b{} a{} b{} c{} b{}").unwrap();
//!
//! let b = saved.child_named(saved.root, "b", 1).unwrap();
//! let result = resolve(&saved, b, &live, &HintConfig::default());
//! let found = result.node(&live).unwrap();
//! assert_eq!(NodePath::of(&live, found).to_string(), "b|2");
//! ```

mod tracing_macros;
pub(crate) use tracing_macros::{debug, trace};

mod normalize;
mod parser;

pub use normalize::normalize;
pub use parser::{SourceError, parse};
