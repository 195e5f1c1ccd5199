use crate::parsing::lines::{self, LineRef};

use super::kinds::{BlockQuote, CodeFence, FenceSig, Heading, ListItem, Table, ThematicBreak};

/// What a single trimmed line looks like, in classification precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts with ```` ``` ```` or `~~~`.
    Fence(FenceSig),
    /// Whitespace only.
    Blank,
    /// A `|---|---|` row; carries no content.
    TableSeparator,
    /// A `|cell|cell|` row with trimmed cells.
    TableRow(Vec<&'a str>),
    /// A `>` line with the prefix stripped.
    Quote(&'a str),
    Heading {
        level: u8,
        text: &'a str,
    },
    ListItem {
        ordered: bool,
        text: &'a str,
    },
    ThematicBreak,
    Paragraph(&'a str),
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. The raw line is kept because
/// code fences buffer it untrimmed.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The line as written.
    pub raw: &'a str,
    /// Classification of the trimmed line.
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        LineClass {
            number: lr.number,
            raw: lr.text,
            kind: Self::kind_of(lines::trim_line(lr.text)),
        }
    }

    fn kind_of(trimmed: &str) -> LineKind<'_> {
        // Precedence: fence beats everything else.
        if let Some(sig) = CodeFence::sig(trimmed) {
            return LineKind::Fence(sig);
        }
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if Table::is_row(trimmed) {
            if Table::is_separator(trimmed) {
                return LineKind::TableSeparator;
            }
            return LineKind::TableRow(Table::cells(trimmed));
        }
        if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            return LineKind::Quote(text);
        }
        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineKind::Heading { level, text };
        }
        if let Some(text) = ListItem::unordered(trimmed) {
            return LineKind::ListItem {
                ordered: false,
                text,
            };
        }
        if let Some(text) = ListItem::ordered(trimmed) {
            return LineKind::ListItem {
                ordered: true,
                text,
            };
        }
        if ThematicBreak::matches(trimmed) {
            return LineKind::ThematicBreak;
        }
        LineKind::Paragraph(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(text: &str) -> LineKind<'_> {
        MarkdownLineClassifier
            .classify(&LineRef { number: 1, text })
            .kind
    }

    #[test]
    fn fence_beats_everything() {
        assert_eq!(kind("  ```rust"), LineKind::Fence(FenceSig::Backticks));
        assert_eq!(kind("~~~"), LineKind::Fence(FenceSig::Tildes));
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert_eq!(kind(""), LineKind::Blank);
        assert_eq!(kind(" \t "), LineKind::Blank);
    }

    #[test]
    fn table_rows_and_separators() {
        assert_eq!(kind("| a | b |"), LineKind::TableRow(vec!["a", "b"]));
        assert_eq!(kind("|---|---|"), LineKind::TableSeparator);
    }

    #[test]
    fn quote_line() {
        assert_eq!(kind("> quoted"), LineKind::Quote("quoted"));
    }

    #[test]
    fn heading_line() {
        assert_eq!(
            kind("##### Deep"),
            LineKind::Heading {
                level: 3,
                text: "Deep"
            }
        );
    }

    #[test]
    fn list_items() {
        assert_eq!(
            kind("  - item"),
            LineKind::ListItem {
                ordered: false,
                text: "item"
            }
        );
        assert_eq!(
            kind("3. third"),
            LineKind::ListItem {
                ordered: true,
                text: "third"
            }
        );
    }

    #[test]
    fn star_rule_is_not_a_bullet() {
        assert_eq!(kind("***"), LineKind::ThematicBreak);
    }

    #[test]
    fn spaced_dashes_are_a_bullet() {
        assert_eq!(
            kind("- - -"),
            LineKind::ListItem {
                ordered: false,
                text: "- -"
            }
        );
    }

    #[test]
    fn paragraph_is_trimmed() {
        assert_eq!(kind("  plain text  "), LineKind::Paragraph("plain text"));
    }

    #[test]
    fn padded_dash_row_is_a_row() {
        assert_eq!(kind("| --- | --- |"), LineKind::TableRow(vec!["---", "---"]));
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        assert_eq!(
            kind("\u{FEFF}# Title"),
            LineKind::Heading {
                level: 1,
                text: "Title"
            }
        );
    }

    #[test]
    fn raw_line_is_kept() {
        let lc = MarkdownLineClassifier.classify(&LineRef {
            number: 7,
            text: "    indented",
        });
        assert_eq!(lc.number, 7);
        assert_eq!(lc.raw, "    indented");
    }
}
