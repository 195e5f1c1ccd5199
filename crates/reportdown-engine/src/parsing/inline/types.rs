use serde::Serialize;

/// A span-level unit of formatted text inside a block.
///
/// `Bold`, `Italic` and the label of `Link` hold further inline nodes, so
/// the tree can nest to any depth the tokenizer allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// `**strong**` text.
    Bold(Vec<InlineNode>),
    /// `*emphasised*` text.
    Italic(Vec<InlineNode>),
    /// A code span. Its content is literal and never tokenized.
    Code(String),
    /// `[label](target)`; the target is kept verbatim.
    Link {
        label: Vec<InlineNode>,
        target: String,
    },
}
