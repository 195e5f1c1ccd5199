/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or builder code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` prefix and at most one following whitespace character.
    ///
    /// Returns `None` when the trimmed line is not a quote line. Deeper `>`
    /// markers are kept as content; quotes do not nest.
    pub fn strip_prefix(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => Some(rest),
        }
    }

    /// Splits buffered quote lines into paragraphs.
    ///
    /// Lines are joined with `\n` and split wherever an empty quoted line
    /// occurs; each paragraph is trimmed and empty ones are dropped. If
    /// nothing survives, the lines joined by spaces form one paragraph.
    pub fn paragraphs(lines: &[String]) -> Vec<String> {
        let joined = lines.join("\n");
        let paragraphs: Vec<String> = joined
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        if paragraphs.is_empty() {
            vec![lines.join(" ")]
        } else {
            paragraphs
        }
    }
}
