use super::blocks::BlockNode;

/// Validates render output invariants.
///
/// Asserts that:
/// - There is at least one block
/// - `Fallback` only ever appears alone
/// - Heading levels are within 1..=3
/// - Lists and quotes are never empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[BlockNode]) {
    assert!(!blocks.is_empty(), "render produced no blocks");

    let fallbacks = blocks
        .iter()
        .filter(|b| matches!(b, BlockNode::Fallback { .. }))
        .count();
    assert!(
        fallbacks == 0 || blocks.len() == 1,
        "fallback mixed with {} other blocks",
        blocks.len() - fallbacks
    );

    for (i, b) in blocks.iter().enumerate() {
        match b {
            BlockNode::Heading { level, .. } => assert!(
                (1..=3).contains(level),
                "block {i}: heading level {level} out of range"
            ),
            BlockNode::List { items, .. } => {
                assert!(!items.is_empty(), "block {i}: empty list")
            }
            BlockNode::BlockQuote { paragraphs } => {
                assert!(!paragraphs.is_empty(), "block {i}: empty quote")
            }
            _ => {}
        }
    }
}
