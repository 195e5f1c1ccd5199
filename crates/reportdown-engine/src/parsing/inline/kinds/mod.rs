//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `STRONG = b"**"`, `STAR = b"*"`; bold is always tried first
//! - **`CodeSpan`**: `TICK = b'\`'` - literal zone, never re-tokenized
//! - **`Link`**: `OPEN = b'['`, `MIDDLE = b"]("`, `CLOSE = b')'`
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
