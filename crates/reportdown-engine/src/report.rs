//! # Analysis Reports
//!
//! An analysis result holds eight independent markdown sections. Each is
//! rendered on its own and shown under a fixed title, in a fixed order;
//! missing or empty sections are left out.
//!
//! A stored profile record also carries its analysis status and the scraped
//! profile metrics shown above the sections.

use serde::{Deserialize, Serialize};

use crate::parsing::{blocks::BlockNode, render};

/// The named sections of an analysis result, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ProfileSummary,
    ContentPatterns,
    Weaknesses,
    Roadmap,
    Hooks,
    Branding,
    GrowthProjection,
    FinalSummary,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::ProfileSummary,
        SectionKind::ContentPatterns,
        SectionKind::Weaknesses,
        SectionKind::Roadmap,
        SectionKind::Hooks,
        SectionKind::Branding,
        SectionKind::GrowthProjection,
        SectionKind::FinalSummary,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::ProfileSummary => "Profile Summary",
            SectionKind::ContentPatterns => "Content Performance Patterns",
            SectionKind::Weaknesses => "Weaknesses & Growth Areas",
            SectionKind::Roadmap => "30-Day Content Roadmap",
            SectionKind::Hooks => "Hook & Caption Bank",
            SectionKind::Branding => "Branding & Identity Suggestions",
            SectionKind::GrowthProjection => "Growth Projection (6 Months)",
            SectionKind::FinalSummary => "Overall Assessment & Conclusion",
        }
    }
}

/// The markdown sections of one analysis result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_patterns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_projection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_summary: Option<String>,
}

/// Record statuses meaning the analysis hasn't produced sections yet.
pub const LOADING_STATUSES: [&str; 4] = ["pending", "analysis_running", "paid", "awaiting_payment"];

/// Follower growth assumed by the six-month projection.
pub const GROWTH_FACTOR: f64 = 1.2;

/// How many of the profile's top videos are shown.
pub const TOP_VIDEO_COUNT: usize = 3;

/// A stored profile record: the report under `result` plus status and
/// scraped metrics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub result: Option<AnalysisReport>,
    #[serde(default, rename = "brightdata_raw")]
    pub stats: Option<ProfileStats>,
}

impl ProfileRecord {
    /// Parses a profile record, or wraps a bare result object in one.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let is_record = value.get("result").is_some_and(serde_json::Value::is_object)
            || value.get("status").is_some_and(serde_json::Value::is_string);
        if is_record {
            return serde_json::from_value(value);
        }
        Ok(Self {
            result: Some(serde_json::from_value(value)?),
            ..Default::default()
        })
    }

    pub fn is_loading(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| LOADING_STATUSES.contains(&status))
    }
}

/// Profile metrics scraped alongside the analysis. Every field may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileStats {
    pub nickname: Option<String>,
    pub biography: Option<String>,
    pub bio_link: Option<String>,
    pub url: Option<String>,
    pub followers: Option<f64>,
    pub likes: Option<f64>,
    pub like_count: Option<f64>,
    pub videos_count: Option<f64>,
    #[serde(rename = "awg_engagement_rate")]
    pub avg_engagement_rate: Option<f64>,
    pub like_engagement_rate: Option<f64>,
    pub comment_engagement_rate: Option<f64>,
    pub top_videos: Option<Vec<TopVideo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TopVideo {
    pub video_id: String,
    pub playcount: Option<f64>,
    pub diggcount: Option<f64>,
    pub video_url: Option<String>,
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

impl ProfileStats {
    pub fn total_likes(&self) -> Option<f64> {
        self.likes.or(self.like_count)
    }

    /// Followers after [`GROWTH_FACTOR`] growth, rounded. `None` without a
    /// non-zero follower count.
    pub fn projected_followers(&self) -> Option<f64> {
        non_zero(self.followers).map(|f| (f * GROWTH_FACTOR).round())
    }

    /// Projected minus current followers, `None` when there is no growth.
    pub fn growth_delta(&self) -> Option<f64> {
        let current = non_zero(self.followers)?;
        let projected = non_zero(self.projected_followers())?;
        non_zero(Some(projected - current))
    }

    pub fn leading_videos(&self) -> &[TopVideo] {
        let videos = self.top_videos.as_deref().unwrap_or_default();
        &videos[..videos.len().min(TOP_VIDEO_COUNT)]
    }
}

/// `1.2K` / `3.4M` with one decimal and no trailing `.0`; smaller numbers
/// in Turkish grouping (`-1.234,5`). Missing values print as `-`.
pub fn format_compact_number(value: Option<f64>) -> String {
    let Some(n) = value.filter(|n| !n.is_nan()) else {
        return "-".to_string();
    };
    if n >= 1_000_000.0 {
        format!("{}M", one_decimal(n / 1_000_000.0))
    } else if n >= 1_000.0 {
        format!("{}K", one_decimal(n / 1_000.0))
    } else {
        grouped(n)
    }
}

/// A ratio as a percentage with one decimal, e.g. `0.0453` → `4.5 %`.
pub fn format_percent(value: Option<f64>) -> String {
    match value.filter(|v| !v.is_nan()) {
        Some(v) => format!("{} %", one_decimal(v * 100.0)),
        None => "-".to_string(),
    }
}

/// One decimal with halves rounded up, trailing `.0` dropped.
fn one_decimal(n: f64) -> String {
    let text = format!("{:.1}", (n * 10.0).round() / 10.0);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// Groups digits with `.` and writes up to three decimals after `,`.
fn grouped(n: f64) -> String {
    let rounded = (n * 1000.0).round() / 1000.0;
    let digits = rounded.abs().to_string();
    let (int, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// One rendered report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    /// `None` for a standalone markdown file.
    pub kind: Option<SectionKind>,
    pub title: String,
    pub blocks: Vec<BlockNode>,
}

impl AnalysisReport {
    /// Parses either a bare result object or a profile record
    /// (`{"status": .., "username": .., "result": {..}}`).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        ProfileRecord::from_json(json).map(|record| record.result.unwrap_or_default())
    }

    pub fn text(&self, kind: SectionKind) -> Option<&str> {
        let text = match kind {
            SectionKind::ProfileSummary => &self.profile_summary,
            SectionKind::ContentPatterns => &self.content_patterns,
            SectionKind::Weaknesses => &self.weaknesses,
            SectionKind::Roadmap => &self.roadmap,
            SectionKind::Hooks => &self.hooks,
            SectionKind::Branding => &self.branding,
            SectionKind::GrowthProjection => &self.growth_projection,
            SectionKind::FinalSummary => &self.final_summary,
        };
        text.as_deref()
    }

    /// Renders every non-empty section in display order.
    pub fn sections(&self) -> Vec<ReportSection> {
        SectionKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let text = self.text(kind).filter(|t| !t.is_empty())?;
                Some(ReportSection {
                    kind: Some(kind),
                    title: kind.title().to_string(),
                    blocks: render(text),
                })
            })
            .collect()
    }
}
