use serde::Serialize;

use crate::parsing::inline::InlineNode;

/// Inline content of one table cell.
pub type Cell = Vec<InlineNode>;

/// A top-level structural unit of a rendered report section.
///
/// Produced once per [`render`](crate::parsing::render) call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockNode {
    /// `#` to `######` headings, with the level clamped to 1..=3.
    Heading { level: u8, content: Vec<InlineNode> },
    /// A single non-blank line that matched nothing else.
    Paragraph { content: Vec<InlineNode> },
    /// Consecutive list items sharing one ordered flag.
    List {
        ordered: bool,
        items: Vec<Vec<InlineNode>>,
    },
    /// Consecutive `>` lines, split into paragraphs on blank quoted lines.
    BlockQuote { paragraphs: Vec<Vec<InlineNode>> },
    /// Fenced code. Internal line breaks are verbatim, trailing whitespace is stripped.
    CodeBlock { raw_text: String },
    /// Pipe table. Rows are kept as written, even when ragged.
    Table {
        header: Option<Vec<Cell>>,
        rows: Vec<Vec<Cell>>,
    },
    /// `---`, `***` or `___`.
    HorizontalRule,
    /// The untouched input, used only when nothing else was produced.
    Fallback { raw_text: String },
}
