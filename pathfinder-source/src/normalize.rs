//! Name normalization.

const COMBINATORS: [char; 4] = ['>', '+', '~', ','];

/// Canonical form of a selector or property name.
///
/// Runs of whitespace collapse to a single space and whitespace around the
/// `>`, `+`, `~` and `,` combinators is dropped, so `ul  >  li,a` and
/// `ul>li, a` normalize to the same string. Quoted runs such as the value in
/// `[title="a  b"]` are copied unchanged.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut space = false;
    let mut chars = name.trim().chars();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            space = true;
            continue;
        }
        if space && !COMBINATORS.contains(&c) && !out.ends_with(COMBINATORS) {
            out.push(' ');
        }
        space = false;
        out.push(c);
        if matches!(c, '"' | '\'') {
            copy_quoted(&mut chars, c, &mut out);
        }
    }
    out
}

/// Copy up to and including the closing `quote`, honoring backslash escapes.
fn copy_quoted(chars: &mut core::str::Chars<'_>, quote: char, out: &mut String) {
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else if c == quote {
            return;
        }
    }
}
