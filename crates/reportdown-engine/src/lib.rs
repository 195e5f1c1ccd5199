pub mod io;
pub mod parsing;
pub mod report;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    blocks::BlockNode,
    inline::{InlineNode, parse_inline},
    render,
};
pub use report::{
    AnalysisReport, ProfileRecord, ProfileStats, ReportSection, SectionKind, TopVideo,
    format_compact_number, format_percent,
};
