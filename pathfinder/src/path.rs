//! Node paths: the route from a tree root to a node as a sequence of
//! `(name, occurrence)` pairs.
//!
//! The canonical string form joins components with `/` and renders each one
//! as `name|pos`, e.g. `@media print|1/.header|2`. Backslash escapes `\`,
//! `/` and `|` inside names. The empty path renders as the empty string and
//! denotes the root.

use core::fmt;
use core::str::FromStr;

use facet::Facet;
use indextree::NodeId;
use smallvec::SmallVec;

use crate::tree::SourceTree;

/// One step of a [`NodePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Facet)]
pub struct PathComponent {
    /// Effective name of the node at this level.
    pub name: String,
    /// 1-based occurrence among same-named siblings. `0` disables the
    /// positional tie-break.
    pub pos: usize,
}

impl PathComponent {
    /// Create a component.
    pub fn new(name: impl Into<String>, pos: usize) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }

    /// A component for the first occurrence of `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 1)
    }
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.name.chars() {
            if matches!(c, '\\' | '/' | '|') {
                write!(f, "\\")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "|{}", self.pos)
    }
}

/// A path from the root to a node.
///
/// Most stylesheet nesting is shallow, so components live inline up to a
/// depth of eight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Facet)]
#[facet(transparent)]
pub struct NodePath(pub SmallVec<[PathComponent; 8]>);

impl NodePath {
    /// The empty path, which addresses the root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Derive the path of `node` in `tree`.
    ///
    /// Nodes without a name get an empty component name, which never matches
    /// anything during a search. Such a path renders fine but does not parse
    /// back (see [`PathParseError::EmptyName`]).
    pub fn of<T: SourceTree>(tree: &T, node: NodeId) -> Self {
        let mut components = SmallVec::<[PathComponent; 8]>::new();
        let mut current = node;
        while let Some(parent) = tree.parent(current) {
            let name = tree.name(current);
            let preceding_twins = tree
                .children(parent)
                .take_while(|&sibling| sibling != current)
                .filter(|&sibling| tree.name(sibling) == name)
                .count();
            components.push(PathComponent::new(
                name.unwrap_or_default(),
                preceding_twins + 1,
            ));
            current = parent;
        }
        components.reverse();
        Self(components)
    }

    /// Whether this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`NodePath::is_root`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The components, root-most first.
    pub fn components(&self) -> &[PathComponent] {
        &self.0
    }

    /// Append a component.
    pub fn push(&mut self, component: PathComponent) {
        self.0.push(component);
    }

    /// Iterate over the components, root-most first.
    pub fn iter(&self) -> impl Iterator<Item = &PathComponent> {
        self.0.iter()
    }
}

impl FromIterator<PathComponent> for NodePath {
    fn from_iter<I: IntoIterator<Item = PathComponent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NodePath {
    type Item = &'a PathComponent;
    type IntoIter = core::slice::Iter<'a, PathComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Errors produced when parsing the canonical string form of a path.
///
/// Paths derived from unnamed nodes render components with an empty name
/// (`|1`). Those can never be found, so parsing refuses them with
/// [`PathParseError::EmptyName`].
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum PathParseError {
    /// component {component} has an empty name
    EmptyName { component: usize },

    /// component {component} has no `|pos` suffix
    MissingPosition { component: usize },

    /// component {component} has an invalid position `{value}`
    InvalidPosition { component: usize, value: String },

    /// component {component} ends with a dangling escape
    DanglingEscape { component: usize },
}

impl FromStr for NodePath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut path = NodePath::root();
        if s.is_empty() {
            return Ok(path);
        }

        let mut name = String::new();
        let mut pos: Option<String> = None;
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            let c = match c {
                '\\' => chars.next().ok_or(PathParseError::DanglingEscape {
                    component: path.len(),
                })?,
                '|' if pos.is_none() => {
                    pos = Some(String::new());
                    continue;
                }
                '/' => {
                    let component =
                        finish_component(path.len(), core::mem::take(&mut name), pos.take())?;
                    path.push(component);
                    continue;
                }
                c => c,
            };
            match pos.as_mut() {
                Some(pos) => pos.push(c),
                None => name.push(c),
            }
        }
        let component = finish_component(path.len(), name, pos)?;
        path.push(component);
        Ok(path)
    }
}

fn finish_component(
    index: usize,
    name: String,
    pos: Option<String>,
) -> Result<PathComponent, PathParseError> {
    if name.is_empty() {
        return Err(PathParseError::EmptyName { component: index });
    }
    let pos = pos.ok_or(PathParseError::MissingPosition { component: index })?;
    match pos.parse::<usize>() {
        Ok(value) if value > 0 => Ok(PathComponent::new(name, value)),
        _ => Err(PathParseError::InvalidPosition {
            component: index,
            value: pos,
        }),
    }
}
