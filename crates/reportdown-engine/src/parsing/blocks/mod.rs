//! # Block Segmentation
//!
//! Two-phase block parsing over the lines of one report snippet.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is trimmed and classified
//!    into a `LineClass` from local facts only (fence marker, table shape,
//!    quote prefix, heading/list markers, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` holds at most one
//!    open buffer and emits `BlockNode`s whenever a line does not fit it
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, the finished display tree
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Multi-line constructs (list, quote, code, table) become exactly one node
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Buffers are never nested or mixed; opening one flushes any other

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::BlockNode;
