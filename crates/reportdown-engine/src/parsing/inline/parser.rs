use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::InlineNode,
};

/// Maximum nesting depth for bold, italic and link labels.
///
/// Text reached at this depth is kept as a single `Text` node.
pub const MAX_INLINE_NESTING: usize = 32;

/// Tokenizes a line or paragraph into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// At each position bold is tried first, then italic, code span and link.
/// The first construct that closes wins; anything that doesn't close is
/// skipped one character at a time and ends up as text.
///
/// # Returns
/// An empty vector for empty input, otherwise nodes covering the whole
/// input. Text between constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    parse_nested(s, 0)
}

fn parse_nested(s: &str, depth: usize) -> Vec<InlineNode> {
    if s.is_empty() {
        return vec![];
    }
    if depth >= MAX_INLINE_NESTING {
        log::debug!("inline nesting limit reached, keeping {} bytes as text", s.len());
        return vec![InlineNode::Text(s.to_string())];
    }

    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
        if !text.is_empty() {
            out.push(InlineNode::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let node = try_parse_bold(&mut cur, depth)
            .or_else(|| try_parse_italic(&mut cur, depth))
            .or_else(|| try_parse_code_span(&mut cur))
            .or_else(|| try_parse_link(&mut cur, depth));

        if let Some(node) = node {
            flush_text(&mut out, &s[text_start..start]);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump_char();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

/// Attempts to parse `**inner**` at the current position.
fn try_parse_bold(cur: &mut Cursor<'_>, depth: usize) -> Option<InlineNode> {
    let inner = try_parse_emphasis(cur, Emphasis::STRONG)?;
    Some(InlineNode::Bold(parse_nested(inner, depth + 1)))
}

/// Attempts to parse `*inner*` at the current position.
fn try_parse_italic(cur: &mut Cursor<'_>, depth: usize) -> Option<InlineNode> {
    let inner = try_parse_emphasis(cur, Emphasis::STAR)?;
    Some(InlineNode::Italic(parse_nested(inner, depth + 1)))
}

/// Finds the shortest non-empty `inner` such that the input continues with
/// `delim inner delim`, without crossing a line break.
///
/// The first inner character may itself be a delimiter character, so
/// `***` reads as italic `*`. On failure the cursor is left untouched.
fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>, delim: &[u8]) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }

    let s = cur.s;
    let bytes = s.as_bytes();
    let inner_start = cur.pos() + delim.len();

    let mut p = inner_start;
    while p < bytes.len() {
        if p > inner_start && bytes[p..].starts_with(delim) {
            cur.jump_to(p + delim.len());
            return Some(&s[inner_start..p]);
        }
        if Emphasis::is_line_break(bytes[p]) {
            return None;
        }
        p += 1;
    }
    None
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty or if it
/// isn't closed.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let inner_start = cur.pos() + 1;
    let close = cur.find_from(inner_start, CodeSpan::TICK)?;
    if close == inner_start {
        return None;
    }

    let s = cur.s;
    cur.jump_to(close + 1);
    Some(InlineNode::Code(s[inner_start..close].to_string()))
}

/// Attempts to parse `[label](target)` starting at the current position.
///
/// The label ends at the first `]`, which must be followed directly by `(`;
/// the target ends at the first `)`. Both must be non-empty.
fn try_parse_link(cur: &mut Cursor<'_>, depth: usize) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let s = cur.s;
    let label_start = cur.pos() + 1;
    let label_end = cur.find_from(label_start, Link::LABEL_END)?;
    if label_end == label_start || !s.as_bytes()[label_end..].starts_with(Link::MIDDLE) {
        return None;
    }

    let target_start = label_end + Link::MIDDLE.len();
    let target_end = cur.find_from(target_start, Link::CLOSE)?;
    if target_end == target_start {
        return None;
    }

    cur.jump_to(target_end + 1);
    Some(InlineNode::Link {
        label: parse_nested(&s[label_start..label_end], depth + 1),
        target: s[target_start..target_end].to_string(),
    })
}
