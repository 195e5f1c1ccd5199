/// Bold and italic delimiters.
///
/// A leading `**` is always read as a bold opener before it is considered
/// as an italic one.
pub struct Emphasis;

impl Emphasis {
    /// Bold delimiter.
    pub const STRONG: &'static [u8; 2] = b"**";
    /// Italic delimiter.
    pub const STAR: &'static [u8; 1] = b"*";

    /// Emphasis never spans a line break.
    pub fn is_line_break(b: u8) -> bool {
        matches!(b, b'\n' | b'\r')
    }
}
