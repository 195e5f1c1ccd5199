/// Horizontal rule: three or more of one of `-`, `*`, `_` and nothing else.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(trimmed: &str) -> bool {
        let Some(first) = trimmed.chars().next() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && trimmed.len() >= Self::MIN_LEN
            && trimmed.chars().all(|c| c == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("*****"));
        assert!(ThematicBreak::matches("___"));
    }

    #[test]
    fn not_rules() {
        assert!(!ThematicBreak::matches("--"));
        assert!(!ThematicBreak::matches("- - -"));
        assert!(!ThematicBreak::matches("-*-"));
        assert!(!ThematicBreak::matches(""));
    }
}
