use crate::parsing::inline::parse_inline;

use super::{
    classify::{LineClass, LineKind},
    kinds::{BlockQuote, CodeFence, FenceSig},
    types::{BlockNode, Cell},
};

/// The single multi-line construct currently accumulating lines.
#[derive(Debug, Default)]
enum OpenBuffer {
    #[default]
    None,
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Quote {
        lines: Vec<String>,
    },
    Code {
        opened: FenceSig,
        lines: Vec<String>,
    },
    Table {
        header: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
}

/// Turns classified lines into finished blocks.
///
/// One builder lives for exactly one render call. Headings, paragraphs and
/// rules are emitted as soon as they are seen; lists, quotes, code and
/// tables are buffered and flushed when a line that doesn't belong to them
/// arrives, or at [`finish`](Self::finish).
pub struct BlockBuilder {
    open: OpenBuffer,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenBuffer::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match &c.kind {
            LineKind::Fence(sig) => {
                self.flush_list();
                self.flush_quote();
                self.flush_table();
                log::trace!("line {}: code fence opened", c.number);
                self.open = OpenBuffer::Code {
                    opened: *sig,
                    lines: vec![],
                };
            }
            LineKind::Blank => {
                self.flush_list();
                self.flush_quote();
                self.flush_table();
            }
            // Swallowed whether or not a table is open, and it doesn't
            // close whatever else is open either.
            LineKind::TableSeparator => {}
            LineKind::TableRow(cells) => self.push_table_row(cells),
            kind => {
                self.flush_table();
                self.push_non_table(kind);
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_code();
        self.flush_list();
        self.flush_quote();
        self.flush_table();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.open, OpenBuffer::Code { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        let OpenBuffer::Code { opened, lines } = &mut self.open else {
            return;
        };

        let sig = match c.kind {
            LineKind::Fence(sig) => Some(sig),
            _ => None,
        };
        if CodeFence::closes(*opened, sig) {
            log::trace!("line {}: code fence closed", c.number);
            self.flush_code();
        } else {
            lines.push(c.raw.to_string());
        }
    }

    fn push_table_row(&mut self, cells: &[&str]) {
        let cells = cells.iter().map(|c| c.to_string()).collect();
        if let OpenBuffer::Table { rows, .. } = &mut self.open {
            rows.push(cells);
            return;
        }

        self.flush_list();
        self.flush_quote();
        self.open = OpenBuffer::Table {
            header: Some(cells),
            rows: vec![],
        };
    }

    fn push_non_table(&mut self, kind: &LineKind<'_>) {
        if let LineKind::Quote(text) = kind {
            self.flush_list();
            match &mut self.open {
                OpenBuffer::Quote { lines } => lines.push(text.to_string()),
                _ => {
                    self.open = OpenBuffer::Quote {
                        lines: vec![text.to_string()],
                    }
                }
            }
            return;
        }

        self.flush_quote();

        match *kind {
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.out.push(BlockNode::Heading {
                    level,
                    content: parse_inline(text),
                });
            }
            LineKind::ListItem { ordered, text } => self.push_list_item(ordered, text),
            LineKind::ThematicBreak => {
                self.flush_list();
                self.out.push(BlockNode::HorizontalRule);
            }
            LineKind::Paragraph(text) => {
                self.flush_list();
                self.out.push(BlockNode::Paragraph {
                    content: parse_inline(text),
                });
            }
            // Classified before reaching here.
            LineKind::Fence(_)
            | LineKind::Blank
            | LineKind::TableSeparator
            | LineKind::TableRow(_)
            | LineKind::Quote(_) => {}
        }
    }

    fn push_list_item(&mut self, ordered: bool, text: &str) {
        if let OpenBuffer::List {
            ordered: open_ordered,
            items,
        } = &mut self.open
            && *open_ordered == ordered
        {
            items.push(text.to_string());
            return;
        }

        self.flush_list();
        self.open = OpenBuffer::List {
            ordered,
            items: vec![text.to_string()],
        };
    }

    fn flush_list(&mut self) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBuffer::List { ordered, items } = prev {
            log::trace!("flushing list with {} items", items.len());
            self.out.push(BlockNode::List {
                ordered,
                items: items.iter().map(|item| parse_inline(item.trim())).collect(),
            });
        } else {
            self.open = prev; // put back whatever else is open
        }
    }

    fn flush_quote(&mut self) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBuffer::Quote { lines } = prev {
            log::trace!("flushing quote with {} lines", lines.len());
            self.out.push(BlockNode::BlockQuote {
                paragraphs: BlockQuote::paragraphs(&lines)
                    .iter()
                    .map(|p| parse_inline(p))
                    .collect(),
            });
        } else {
            self.open = prev;
        }
    }

    fn flush_code(&mut self) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBuffer::Code { lines, .. } = prev {
            // An empty fence contributes nothing.
            if lines.is_empty() {
                return;
            }
            log::trace!("flushing code block with {} lines", lines.len());
            self.out.push(BlockNode::CodeBlock {
                raw_text: lines.join("\n").trim_end().to_string(),
            });
        } else {
            self.open = prev;
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBuffer::Table { header, rows } = prev {
            log::trace!("flushing table with {} rows", rows.len());
            let inline_row = |row: &Vec<String>| -> Vec<Cell> {
                row.iter().map(|cell| parse_inline(cell)).collect()
            };
            self.out.push(BlockNode::Table {
                header: header.as_ref().map(inline_row),
                rows: rows.iter().map(inline_row).collect(),
            });
        } else {
            self.open = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::MarkdownLineClassifier, inline::InlineNode, lines};

    fn build(md: &str) -> Vec<BlockNode> {
        let mut builder = BlockBuilder::new();
        for lr in lines::lines_with_numbers(md) {
            builder.push(&MarkdownLineClassifier.classify(&lr));
        }
        builder.finish()
    }

    fn text(s: &str) -> Vec<InlineNode> {
        vec![InlineNode::Text(s.to_string())]
    }

    #[test]
    fn blank_lines_build_nothing() {
        assert!(build("\n\n  \n").is_empty());
    }

    #[test]
    fn empty_fence_builds_nothing() {
        assert!(build("```\n```").is_empty());
    }

    #[test]
    fn unterminated_fence_is_still_emitted() {
        assert_eq!(
            build("```\nlet x = 1;\n"),
            vec![BlockNode::CodeBlock {
                raw_text: "let x = 1;".into()
            }]
        );
    }

    #[test]
    fn fence_keeps_raw_indentation() {
        assert_eq!(
            build("```\n  a\n\n    b  \n```"),
            vec![BlockNode::CodeBlock {
                raw_text: "  a\n\n    b".into()
            }]
        );
    }

    #[test]
    fn separator_does_not_close_a_list() {
        assert_eq!(
            build("- a\n|---|\n- b"),
            vec![BlockNode::List {
                ordered: false,
                items: vec![text("a"), text("b")],
            }]
        );
    }

    #[test]
    fn heading_closes_quote_first() {
        assert_eq!(
            build("> q\n# H"),
            vec![
                BlockNode::BlockQuote {
                    paragraphs: vec![text("q")]
                },
                BlockNode::Heading {
                    level: 1,
                    content: text("H")
                },
            ]
        );
    }

    #[test]
    fn table_row_closes_list() {
        assert_eq!(
            build("- a\n|x|"),
            vec![
                BlockNode::List {
                    ordered: false,
                    items: vec![text("a")],
                },
                BlockNode::Table {
                    header: Some(vec![text("x")]),
                    rows: vec![],
                },
            ]
        );
    }

    #[test]
    fn quote_line_closes_table() {
        assert_eq!(
            build("|x|\n> q"),
            vec![
                BlockNode::Table {
                    header: Some(vec![text("x")]),
                    rows: vec![],
                },
                BlockNode::BlockQuote {
                    paragraphs: vec![text("q")]
                },
            ]
        );
    }

    #[test]
    fn list_survives_until_paragraph() {
        assert_eq!(
            build("1. a\n2. b\nafter"),
            vec![
                BlockNode::List {
                    ordered: true,
                    items: vec![text("a"), text("b")],
                },
                BlockNode::Paragraph {
                    content: text("after")
                },
            ]
        );
    }
}
