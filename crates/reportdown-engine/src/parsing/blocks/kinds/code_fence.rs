#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence marker at the start of a trimmed line.
    ///
    /// Anything after the marker (an info string, more ticks) is ignored.
    pub fn sig(trimmed: &str) -> Option<FenceSig> {
        if trimmed.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if trimmed.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    /// Whether a line with signature `sig` closes a fence opened with `opened`.
    ///
    /// Either marker closes either kind of fence, so `~~~` ends a block
    /// opened with backticks. Report snippets rely on this, keep it loose.
    pub fn closes(_opened: FenceSig, sig: Option<FenceSig>) -> bool {
        sig.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```rust"), Some(FenceSig::Backticks));
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~"), Some(FenceSig::Tildes));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``"), None);
    }

    #[test]
    fn closes_matching_fence() {
        assert!(CodeFence::closes(
            FenceSig::Backticks,
            Some(FenceSig::Backticks)
        ));
        assert!(CodeFence::closes(FenceSig::Tildes, Some(FenceSig::Tildes)));
    }

    #[test]
    fn mismatched_marker_still_closes() {
        assert!(CodeFence::closes(FenceSig::Backticks, Some(FenceSig::Tildes)));
        assert!(CodeFence::closes(FenceSig::Tildes, Some(FenceSig::Backticks)));
    }

    #[test]
    fn plain_line_does_not_close() {
        assert!(!CodeFence::closes(FenceSig::Backticks, None));
    }
}
