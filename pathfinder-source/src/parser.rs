//! Brace-source parser.

use core::iter::Peekable;
use core::str::CharIndices;

use facet::Facet;
use pathfinder::indextree::NodeId;
use pathfinder::{NodeData, Tree};

use crate::normalize::normalize;
use crate::{debug, trace};

/// Errors that can occur while parsing a source.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum SourceError {
    /// closing brace at byte {offset} has no matching opening brace
    UnbalancedBrace { offset: usize },

    /// block opened at byte {offset} is never closed
    UnclosedBlock { offset: usize },

    /// comment starting at byte {offset} is never closed
    UnterminatedComment { offset: usize },

    /// block opened at byte {offset} has no selector
    EmptySelector { offset: usize },
}

/// Parse a CSS-like source into a tree rooted at an anonymous node.
///
/// - `selector { ... }` becomes a node named `selector` whose children are
///   the block's contents, in order.
/// - `name: value;` becomes a leaf named `name`. At-rule statements such as
///   `@import url(a.css);` are named by their whole text.
/// - `/* ... */` comments are skipped; quoted strings are taken verbatim, so
///   braces inside them do not open blocks.
///
/// Names whose [`normalize`]d form differs from the raw text carry it as
/// their normalized name.
pub fn parse(source: &str) -> Result<Tree, SourceError> {
    let mut tree = Tree::default();
    let mut open: Vec<(NodeId, usize)> = Vec::new();
    let mut pending = String::new();
    let mut chars = source.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let current = open.last().map_or(tree.root, |&(id, _)| id);
        match c {
            '/' if chars.peek().is_some_and(|&(_, next)| next == '*') => {
                chars.next();
                skip_comment(&mut chars, offset)?;
            }
            '"' | '\'' => {
                pending.push(c);
                copy_string(&mut chars, c, &mut pending);
            }
            '{' => {
                let selector = pending.trim();
                if selector.is_empty() {
                    return Err(SourceError::EmptySelector { offset });
                }
                let id = tree.add_child(current, node_data(selector));
                trace!(selector, offset, "open block");
                pending.clear();
                open.push((id, offset));
            }
            '}' => {
                flush_declaration(&mut tree, current, &mut pending);
                if open.pop().is_none() {
                    return Err(SourceError::UnbalancedBrace { offset });
                }
            }
            ';' => flush_declaration(&mut tree, current, &mut pending),
            c => pending.push(c),
        }
    }

    if let Some(&(_, offset)) = open.last() {
        return Err(SourceError::UnclosedBlock { offset });
    }
    let root = tree.root;
    flush_declaration(&mut tree, root, &mut pending);

    debug!(nodes = tree.len(), bytes = source.len(), "parsed source");
    Ok(tree)
}

fn node_data(name: &str) -> NodeData {
    let normal = normalize(name);
    let data = NodeData::named(name);
    if normal == name {
        data
    } else {
        data.with_normal_name(normal)
    }
}

/// Turn the text collected since the last delimiter into a declaration node.
fn flush_declaration(tree: &mut Tree, parent: NodeId, pending: &mut String) {
    let text = pending.trim();
    if !text.is_empty() {
        let name = if text.starts_with('@') {
            text
        } else {
            match text.split_once(':') {
                Some((property, _)) if !property.trim().is_empty() => property.trim(),
                _ => text,
            }
        };
        tree.add_child(parent, node_data(name));
    }
    pending.clear();
}

fn skip_comment(chars: &mut Peekable<CharIndices<'_>>, start: usize) -> Result<(), SourceError> {
    while let Some((_, c)) = chars.next() {
        if c == '*' && chars.next_if(|&(_, next)| next == '/').is_some() {
            return Ok(());
        }
    }
    Err(SourceError::UnterminatedComment { offset: start })
}

/// Copy a quoted string, honoring backslash escapes. An unterminated string
/// runs to the end of the source.
fn copy_string(chars: &mut Peekable<CharIndices<'_>>, quote: char, out: &mut String) {
    while let Some((_, c)) = chars.next() {
        out.push(c);
        if c == '\\' {
            if let Some((_, escaped)) = chars.next() {
                out.push(escaped);
            }
        } else if c == quote {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;
    use pathfinder::{NodePath, SourceTree};

    fn names(tree: &Tree, id: NodeId) -> Vec<&str> {
        tree.children(id)
            .map(|child| tree.name(child).unwrap_or("?"))
            .collect()
    }

    #[test]
    fn test_flat_blocks() {
        let tree = parse("a{} b{} c{}").unwrap();
        assert_eq!(names(&tree, tree.root), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nested_blocks_and_declarations() {
        let tree = parse("g{} a { b{} color: red; c{ margin: 0 } }").unwrap();
        assert_eq!(names(&tree, tree.root), vec!["g", "a"]);
        let a = tree.child_named(tree.root, "a", 1).unwrap();
        assert_eq!(names(&tree, a), vec!["b", "color", "c"]);
        let c = tree.child_named(a, "c", 1).unwrap();
        assert_eq!(names(&tree, c), vec!["margin"]);
        let margin = tree.child_at(c, 0).unwrap();
        assert_eq!(NodePath::of(&tree, margin).to_string(), "a|1/c|1/margin|1");
    }

    #[test]
    fn test_normalized_names() {
        let tree = parse("ul  >  li { }").unwrap();
        let li = tree.child_at(tree.root, 0).unwrap();
        assert_eq!(tree.get(li).name.as_deref(), Some("ul  >  li"));
        assert_eq!(tree.name(li), Some("ul>li"));

        let tree = parse(".plain {}").unwrap();
        let plain = tree.child_at(tree.root, 0).unwrap();
        assert_eq!(tree.get(plain).normal_name, None);
    }

    #[test]
    fn test_comments_and_strings() {
        let tree = parse("/* a{} */ b { content: \"}{\"; } /**/ c {}").unwrap();
        assert_eq!(names(&tree, tree.root), vec!["b", "c"]);
        let b = tree.child_at(tree.root, 0).unwrap();
        assert_eq!(names(&tree, b), vec!["content"]);
    }

    #[test]
    fn test_at_rules() {
        let tree = parse("@import url(http://x/a.css); @media print { a {} }").unwrap();
        assert_eq!(
            names(&tree, tree.root),
            vec!["@import url(http://x/a.css)", "@media print"]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse("a{}}").unwrap_err(),
            SourceError::UnbalancedBrace { offset: 3 }
        );
        assert_eq!(
            parse("a{} b{ c{}").unwrap_err(),
            SourceError::UnclosedBlock { offset: 5 }
        );
        assert_eq!(
            parse("a{} /* b{}").unwrap_err(),
            SourceError::UnterminatedComment { offset: 4 }
        );
        assert_eq!(
            parse("a{} { }").unwrap_err(),
            SourceError::EmptySelector { offset: 4 }
        );
    }
}
