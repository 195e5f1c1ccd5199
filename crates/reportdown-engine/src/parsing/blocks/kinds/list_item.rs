/// List item markers.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_SUFFIX: char = '.';

    /// `-`, `*` or `+`, whitespace, text. Returns the item text.
    pub fn unordered(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::BULLETS)?;
        Self::after_whitespace(rest)
    }

    /// ASCII digits, `.`, whitespace, text. Returns the item text.
    pub fn ordered(trimmed: &str) -> Option<&str> {
        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = trimmed[digits..].strip_prefix(Self::ORDERED_SUFFIX)?;
        Self::after_whitespace(rest)
    }

    fn after_whitespace(rest: &str) -> Option<&str> {
        if rest.starts_with(char::is_whitespace) {
            Some(rest.trim_start())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets() {
        assert_eq!(ListItem::unordered("- a"), Some("a"));
        assert_eq!(ListItem::unordered("* b"), Some("b"));
        assert_eq!(ListItem::unordered("+   c"), Some("c"));
    }

    #[test]
    fn bullet_needs_whitespace() {
        assert_eq!(ListItem::unordered("-a"), None);
        assert_eq!(ListItem::unordered("**bold**"), None);
    }

    #[test]
    fn ordered_items() {
        assert_eq!(ListItem::ordered("1. one"), Some("one"));
        assert_eq!(ListItem::ordered("42.  answer"), Some("answer"));
    }

    #[test]
    fn ordered_needs_dot_and_whitespace() {
        assert_eq!(ListItem::ordered("1) one"), None);
        assert_eq!(ListItem::ordered("1.one"), None);
        assert_eq!(ListItem::ordered(". one"), None);
        assert_eq!(ListItem::ordered("2024 was good"), None);
    }
}
