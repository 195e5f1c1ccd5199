//! # Inline Tokenizing
//!
//! Cursor-based tokenizing of a single line or paragraph into inline nodes.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis, CodeSpan, Link)
//! - **`cursor`**: `Cursor` for byte-level scanning over a string slice
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Nesting
//!
//! Bold, italic and link labels are tokenized again on their captured inner
//! text, which is how `**bold *and* italic**` nests. Code spans are literal
//! and never re-tokenized. Nesting depth is capped at [`MAX_INLINE_NESTING`].

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{MAX_INLINE_NESTING, parse_inline};
pub use types::InlineNode;
