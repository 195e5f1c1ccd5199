//! # Report Markdown Parsing
//!
//! Two-layer parsing of loosely formatted report text into display nodes.
//!
//! 1. **Block segmentation** (`blocks`): every line is classified on its own,
//!    then a `BlockBuilder` holding at most one open buffer (list, quote, code
//!    fence, table) turns the classified lines into `BlockNode`s.
//! 2. **Inline tokenizing** (`inline`): text of headings, paragraphs, list
//!    items, quote paragraphs and table cells becomes `InlineNode`s.
//!
//! Parsing is a pure function of the input. Every call builds its own
//! buffers, so concurrent calls need no coordination.

pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod lines;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};

/// Renders report markdown into an ordered, never empty, sequence of blocks.
///
/// When no line contributes a block (empty input, blank lines, an empty
/// fence) the whole input is returned untouched as a single
/// [`BlockNode::Fallback`].
pub fn render(markdown: &str) -> Vec<BlockNode> {
    let normalized = lines::normalize_line_endings(markdown);
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines::lines_with_numbers(&normalized) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    if blocks.is_empty() {
        log::trace!("no blocks produced, falling back to raw text");
        return vec![BlockNode::Fallback {
            raw_text: markdown.to_string(),
        }];
    }
    blocks
}
