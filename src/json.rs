//! Re-indenting JSON printer
//!
//! Works on raw text in a single pass without building a parse tree, so it
//! never fails: malformed input simply comes out oddly indented.

/// Scanner state while walking the input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString { escaped: bool },
}

const INDENT_WIDTH: usize = 2;

fn is_layout_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_opener(c: char) -> bool {
    matches!(c, '{' | '[')
}

fn is_closer(c: char) -> bool {
    matches!(c, '}' | ']')
}

fn newline_indent(out: &mut String, depth: usize) {
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(depth * INDENT_WIDTH));
}

/// Pretty-prints JSON text with two-space indentation.
///
/// Whitespace outside strings is dropped, `:` becomes `": "`, and empty
/// containers stay inline as `{}` / `[]`. The result has no trailing newline.
pub fn format_json(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 2);
    let mut state = ScanState::Normal;
    let mut depth: usize = 0;
    // Last character outside layout whitespace, used to keep `{}` inline
    let mut prev: Option<char> = None;

    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match state {
            ScanState::InString { escaped } => {
                out.push(c);
                state = match c {
                    _ if escaped => ScanState::InString { escaped: false },
                    '\\' => ScanState::InString { escaped: true },
                    '"' => ScanState::Normal,
                    _ => ScanState::InString { escaped: false },
                };
            }
            ScanState::Normal => match c {
                '"' => {
                    out.push(c);
                    state = ScanState::InString { escaped: false };
                }
                c if is_opener(c) => {
                    out.push(c);
                    depth += 1;
                    let next = {
                        // Skip layout whitespace without consuming significant input
                        while chars.next_if(|&n| is_layout_whitespace(n)).is_some() {}
                        chars.peek().copied()
                    };
                    if !next.is_some_and(is_closer) {
                        newline_indent(&mut out, depth);
                    }
                }
                c if is_closer(c) => {
                    depth = depth.saturating_sub(1);
                    if !prev.is_some_and(is_opener) {
                        newline_indent(&mut out, depth);
                    }
                    out.push(c);
                }
                ',' => {
                    out.push(c);
                    newline_indent(&mut out, depth);
                }
                ':' => out.push_str(": "),
                c if is_layout_whitespace(c) => {}
                c => out.push(c),
            },
        }

        if !is_layout_whitespace(c) {
            prev = Some(c);
        }
    }

    out
}
