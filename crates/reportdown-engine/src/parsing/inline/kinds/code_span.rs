/// Code span inline type with owned delimiter constant.
///
/// Code spans are literal: their content is emitted verbatim.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
