//! Display layer: turns rendered report sections into styled terminal lines.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use reportdown_config::DEFAULT_ACCENT_COLOR;
use reportdown_engine::{
    BlockNode, InlineNode, LoadedReport, ProfileRecord, ProfileStats, format_compact_number,
    format_percent, parsing::blocks::types::Cell,
};

const RULE_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
}

impl Theme {
    /// Parses a colour name or `#rrggbb`, falling back to light red.
    pub fn from_accent(spec: &str) -> Self {
        let accent = spec.parse().unwrap_or_else(|_| {
            log::warn!("invalid accent colour {spec:?}, using light red");
            Color::LightRed
        });
        Self { accent }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_accent(DEFAULT_ACCENT_COLOR)
    }
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub fn report_lines(report: &LoadedReport, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(profile) = &report.profile {
        lines.extend(profile_lines(profile, theme));
    }

    for section in &report.sections {
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        lines.push(Line::default());
        for block in &section.blocks {
            lines.extend(block_lines(block, theme));
            lines.push(Line::default());
        }
    }

    if report.sections.is_empty() && !report.is_loading() {
        lines.push(Line::from("This report has no sections yet"));
    }
    lines
}

/// Name, analysis status and metrics of a profile record, followed by a
/// blank line. Empty when the record carries none of them.
fn profile_lines(profile: &ProfileRecord, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let stats = profile.stats.as_ref();
    let accent = Style::default().fg(theme.accent);

    let nickname = stats.and_then(|s| s.nickname.clone());
    let handle = profile.username.as_ref().map(|u| format!("@{u}"));
    match (nickname, handle) {
        (Some(nickname), Some(handle)) => lines.push(Line::from(vec![
            Span::styled(nickname, accent.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {handle}"), dim()),
        ])),
        (Some(name), None) | (None, Some(name)) => {
            lines.push(Line::from(Span::styled(name, accent.add_modifier(Modifier::BOLD))))
        }
        (None, None) => {}
    }

    if profile.is_loading() {
        let status = profile.status.as_deref().unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("Analysis in progress ({status})"),
            accent.add_modifier(Modifier::ITALIC),
        )));
    }

    if let Some(stats) = stats {
        lines.extend(stats_lines(stats, theme));
    }

    if !lines.is_empty() {
        lines.push(Line::default());
    }
    lines
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), dim()),
        Span::raw(value),
    ])
}

/// Rates of zero show as `-`, like missing ones.
fn rate(value: Option<f64>) -> String {
    format_percent(value.filter(|v| *v != 0.0))
}

fn stats_lines(stats: &ProfileStats, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut followers = format_compact_number(stats.followers);
    if let Some(projected) = stats.projected_followers() {
        followers.push_str(&format!(" → {}", format_compact_number(Some(projected))));
    }
    if let Some(delta) = stats.growth_delta() {
        followers.push_str(&format!(" (+{})", format_compact_number(Some(delta))));
    }
    lines.push(stat_line("Followers", followers));

    lines.push(stat_line(
        "Engagement",
        format!(
            "{} avg · like {} · comment {}",
            rate(stats.avg_engagement_rate),
            rate(stats.like_engagement_rate),
            rate(stats.comment_engagement_rate),
        ),
    ));
    lines.push(stat_line(
        "Videos",
        format!(
            "{} · likes {}",
            format_compact_number(stats.videos_count),
            format_compact_number(stats.total_likes()),
        ),
    ));

    if let Some(biography) = stats.biography.as_deref().filter(|b| !b.is_empty()) {
        let italic = Style::default().add_modifier(Modifier::ITALIC);
        lines.extend(
            biography
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), italic))),
        );
    }

    let link = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::UNDERLINED);
    for (label, target) in [("Profile", &stats.url), ("Link", &stats.bio_link)] {
        if let Some(target) = target {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<LABEL_WIDTH$}"), dim()),
                Span::styled(target.clone(), link),
            ]));
        }
    }

    let videos = stats.leading_videos();
    if !videos.is_empty() {
        lines.push(Line::from(Span::styled(
            "Top videos",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for video in videos {
            lines.push(Line::from(format!(
                "  {}  {} plays · {} likes",
                video.video_id,
                format_compact_number(video.playcount),
                format_compact_number(video.diggcount),
            )));
        }
    }

    lines
}

pub fn block_lines(block: &BlockNode, theme: &Theme) -> Vec<Line<'static>> {
    match block {
        BlockNode::Heading { level, content } => {
            let style = match level {
                1 => Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
                2 => Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                _ => Style::default().add_modifier(Modifier::BOLD),
            };
            prefixed("", "", inline_spans(content, style, theme))
        }
        BlockNode::Paragraph { content } => {
            prefixed("", "", inline_spans(content, Style::default(), theme))
        }
        BlockNode::List { ordered, items } => items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| {
                let marker = if *ordered {
                    format!("{}. ", i + 1)
                } else {
                    "• ".to_string()
                };
                let indent = " ".repeat(marker.chars().count());
                prefixed(&marker, &indent, inline_spans(item, Style::default(), theme))
            })
            .collect(),
        BlockNode::BlockQuote { paragraphs } => {
            let italic = Style::default().add_modifier(Modifier::ITALIC);
            let mut lines = Vec::new();
            for (i, paragraph) in paragraphs.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::from(Span::styled("│", dim())));
                }
                lines.extend(prefixed("│ ", "│ ", inline_spans(paragraph, italic, theme)));
            }
            lines
        }
        BlockNode::CodeBlock { raw_text } => raw_text
            .split('\n')
            .map(|line| Line::from(Span::styled(format!("    {line}"), dim())))
            .collect(),
        BlockNode::Table { header, rows } => table_lines(header.as_deref(), rows, theme),
        BlockNode::HorizontalRule => vec![Line::from(Span::styled("─".repeat(RULE_WIDTH), dim()))],
        BlockNode::Fallback { raw_text } => raw_text
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect(),
    }
}

pub fn inline_spans(nodes: &[InlineNode], style: Style, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    push_inline(&mut spans, nodes, style, theme);
    spans
}

fn push_inline(spans: &mut Vec<Span<'static>>, nodes: &[InlineNode], style: Style, theme: &Theme) {
    for node in nodes {
        match node {
            InlineNode::Text(s) => spans.push(Span::styled(s.clone(), style)),
            InlineNode::Bold(inner) => {
                push_inline(spans, inner, style.add_modifier(Modifier::BOLD), theme)
            }
            InlineNode::Italic(inner) => {
                push_inline(spans, inner, style.add_modifier(Modifier::ITALIC), theme)
            }
            InlineNode::Code(s) => {
                spans.push(Span::styled(s.clone(), style.add_modifier(Modifier::REVERSED)))
            }
            InlineNode::Link { label, target } => {
                let label_style = style.fg(theme.accent).add_modifier(Modifier::UNDERLINED);
                push_inline(spans, label, label_style, theme);
                spans.push(Span::styled(
                    format!(" ({target})"),
                    style.add_modifier(Modifier::DIM),
                ));
            }
        }
    }
}

/// Breaks spans into lines at embedded `\n`, prefixing the first line with
/// `first` and every following one with `rest`.
fn prefixed(first: &str, rest: &str, spans: Vec<Span<'static>>) -> Vec<Line<'static>> {
    let mut rows: Vec<Vec<Span<'static>>> = vec![vec![]];
    for span in spans {
        for (i, part) in span.content.split('\n').enumerate() {
            if i > 0 {
                rows.push(vec![]);
            }
            if !part.is_empty() {
                let last = rows.len() - 1;
                rows[last].push(Span::styled(part.to_string(), span.style));
            }
        }
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let prefix = if i == 0 { first } else { rest };
            let mut line = Vec::with_capacity(row.len() + 1);
            if !prefix.is_empty() {
                line.push(Span::styled(prefix.to_string(), dim()));
            }
            line.extend(row);
            Line::from(line)
        })
        .collect()
}

fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(Span::width).sum()
}

/// Column-aligned table. Short rows are padded to the widest row, long
/// rows widen the table rather than being cut.
fn table_lines(header: Option<&[Cell]>, rows: &[Vec<Cell>], theme: &Theme) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let render_row = |cells: &[Cell], style: Style| -> Vec<Vec<Span<'static>>> {
        cells
            .iter()
            .map(|cell| inline_spans(cell, style, theme))
            .collect()
    };

    let header = header.map(|h| render_row(h, bold));
    let rows: Vec<_> = rows
        .iter()
        .map(|r| render_row(r, Style::default()))
        .collect();

    let columns = header
        .iter()
        .chain(rows.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in header.iter().chain(rows.iter()) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(spans_width(cell));
        }
    }

    let mut lines = Vec::new();
    if let Some(header) = header {
        lines.push(table_row(header, &widths));
        let rule = widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("┼");
        lines.push(Line::from(Span::styled(rule, dim())));
    }
    for row in rows {
        lines.push(table_row(row, &widths));
    }
    lines
}

fn table_row(cells: Vec<Vec<Span<'static>>>, widths: &[usize]) -> Line<'static> {
    let mut cells = cells.into_iter();
    let mut spans = Vec::new();
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", dim()));
        }
        let cell = cells.next().unwrap_or_default();
        let used = spans_width(&cell);
        spans.push(Span::raw(" "));
        spans.extend(cell);
        spans.push(Span::raw(" ".repeat(width - used + 1)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reportdown_engine::{ReportSection, render};

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn lines_for(md: &str) -> Vec<String> {
        let theme = Theme::default();
        let lines: Vec<_> = render(md)
            .iter()
            .flat_map(|b| block_lines(b, &theme))
            .collect();
        plain(&lines)
    }

    #[test]
    fn default_theme_parses_dashboard_accent() {
        assert_eq!(Theme::default().accent, Color::Rgb(0xe7, 0x8a, 0x53));
    }

    #[test]
    fn invalid_accent_falls_back() {
        assert_eq!(Theme::from_accent("not a colour").accent, Color::LightRed);
    }

    #[test]
    fn bold_text_is_styled_bold() {
        let theme = Theme::default();
        let blocks = render("plain **strong**");
        let lines = block_lines(&blocks[0], &theme);
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 2);
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn lists_get_markers() {
        assert_eq!(lines_for("1. a\n2. b"), vec!["1. a", "2. b"]);
        assert_eq!(lines_for("- a"), vec!["• a"]);
    }

    #[test]
    fn quote_soft_breaks_become_lines() {
        assert_eq!(
            lines_for("> first\n> still\n>\n> second"),
            vec!["│ first", "│ still", "│", "│ second"]
        );
    }

    #[test]
    fn code_is_indented() {
        assert_eq!(lines_for("```\na\n  b\n```"), vec!["    a", "      b"]);
    }

    #[test]
    fn link_shows_target() {
        assert_eq!(
            lines_for("[docs](https://x.io)"),
            vec!["docs (https://x.io)"]
        );
    }

    #[test]
    fn ragged_table_is_padded() {
        assert_eq!(
            lines_for("|a|bb|\n|1|\n|1|2|3|"),
            vec![
                " a │ bb │   ",
                "───┼────┼───",
                " 1 │    │   ",
                " 1 │ 2  │ 3 ",
            ]
        );
    }

    #[test]
    fn rule_and_fallback() {
        assert_eq!(lines_for("---"), vec!["─".repeat(RULE_WIDTH)]);
        assert!(lines_for("").is_empty());
        assert_eq!(lines_for("\n"), vec![String::new()]);
    }

    #[test]
    fn wide_characters_align_by_display_width() {
        assert_eq!(
            lines_for("|日本|x|\n|a|b|"),
            vec![" 日本 │ x ", "──────┼───", " a    │ b "]
        );
    }

    fn loaded(profile: Option<ProfileRecord>, sections: Vec<ReportSection>) -> LoadedReport {
        LoadedReport {
            path: "r.json".into(),
            profile,
            sections,
        }
    }

    #[test]
    fn report_with_sections_has_titles() {
        let sections = vec![ReportSection {
            kind: None,
            title: "Notes".into(),
            blocks: render("# Hi"),
        }];
        assert_eq!(
            plain(&report_lines(&loaded(None, sections), &Theme::default())),
            vec!["Notes", "", "Hi", ""]
        );
    }

    #[test]
    fn empty_report_has_placeholder() {
        assert_eq!(
            plain(&report_lines(&loaded(None, vec![]), &Theme::default())),
            vec!["This report has no sections yet"]
        );
    }

    #[test]
    fn pending_record_shows_progress_instead_of_placeholder() {
        let record = ProfileRecord::from_json(r#"{"status": "pending", "username": "mia"}"#).unwrap();
        assert_eq!(
            plain(&report_lines(&loaded(Some(record), vec![]), &Theme::default())),
            vec!["@mia", "Analysis in progress (pending)", ""]
        );
    }

    #[test]
    fn profile_metrics_above_sections() {
        let json = r#"{
            "status": "done",
            "username": "mia",
            "brightdata_raw": {
                "nickname": "Mia",
                "followers": 12345,
                "like_count": 1500000,
                "videos_count": 120,
                "awg_engagement_rate": 0.0453,
                "like_engagement_rate": 0.04,
                "comment_engagement_rate": 0,
                "biography": "Daily tips",
                "bio_link": "https://l.ink",
                "top_videos": [{"video_id": "v1", "playcount": 1200, "diggcount": 300}]
            }
        }"#;
        let record = ProfileRecord::from_json(json).unwrap();
        let sections = vec![ReportSection {
            kind: None,
            title: "Summary".into(),
            blocks: render("ok"),
        }];

        let lines = plain(&report_lines(&loaded(Some(record), sections), &Theme::default()));

        assert_eq!(
            lines,
            vec![
                "Mia  @mia",
                "Followers   12.3K → 14.8K (+2.5K)",
                "Engagement  4.5 % avg · like 4 % · comment -",
                "Videos      120 · likes 1.5M",
                "Daily tips",
                "Link        https://l.ink",
                "Top videos",
                "  v1  1.2K plays · 300 likes",
                "",
                "Summary",
                "",
                "ok",
                "",
            ]
        );
    }

    #[test]
    fn stats_without_numbers_show_dashes() {
        let record = ProfileRecord {
            stats: Some(ProfileStats::default()),
            ..Default::default()
        };
        let lines = plain(&report_lines(&loaded(Some(record), vec![]), &Theme::default()));
        assert_eq!(
            lines,
            vec![
                "Followers   -",
                "Engagement  - avg · like - · comment -",
                "Videos      - · likes -",
                "",
                "This report has no sections yet",
            ]
        );
    }
}
