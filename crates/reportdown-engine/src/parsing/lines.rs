use std::borrow::Cow;

/// A single input line with its 1-based line number.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// 1-based position of the line in the input, used for tracing.
    pub number: usize,
    /// The line text without its terminator.
    pub text: &'a str,
}

/// Converts `\r\n` line endings to `\n`, borrowing when there is nothing to do.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Byte-order mark, which [`str::trim`] does not treat as whitespace.
pub const BOM: char = '\u{FEFF}';

/// Trims whitespace and byte-order marks from both ends of a line.
pub fn trim_line(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Splits normalized text on `\n`.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, so
/// the number of lines is always one more than the number of separators.
pub fn lines_with_numbers(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(i, text)| LineRef { number: i + 1, text })
}
