/// ATX heading syntax.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Longest recognised marker run; `#######` is a paragraph.
    pub const MAX_MARKERS: usize = 6;
    /// Deeper headings are displayed at this level.
    pub const MAX_LEVEL: u8 = 3;

    /// Parses `#`×1-6, whitespace, text into `(clamped level, trimmed text)`.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let markers = trimmed.chars().take_while(|&c| c == Self::MARKER).count();
        if markers == 0 || markers > Self::MAX_MARKERS {
            return None;
        }

        let rest = &trimmed[markers..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }

        // markers <= 6, so the cast cannot truncate
        let level = (markers as u8).min(Self::MAX_LEVEL);
        Some((level, rest.trim()))
    }
}
