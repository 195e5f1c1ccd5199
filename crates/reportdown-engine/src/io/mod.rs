use crate::parsing::render;
use crate::report::{ProfileRecord, ReportSection};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid reports directory: {0}")]
    InvalidReportsDir(String),
    #[error("Unsupported report file (expected .md or .json): {0}")]
    UnsupportedFile(PathBuf),
    #[error("Malformed report JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Kinds of report file the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// A single markdown section.
    Markdown,
    /// An analysis result with named sections.
    Json,
}

impl ReportFormat {
    pub fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "md" => Some(ReportFormat::Markdown),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// A report file rendered into display sections.
#[derive(Debug, Clone)]
pub struct LoadedReport {
    pub path: PathBuf,
    /// Status, username and metrics of a JSON profile record, with its
    /// `result` already taken into `sections`. `None` for markdown files.
    pub profile: Option<ProfileRecord>,
    pub sections: Vec<ReportSection>,
}

impl LoadedReport {
    /// The record's analysis hasn't finished yet.
    pub fn is_loading(&self) -> bool {
        self.profile.as_ref().is_some_and(ProfileRecord::is_loading)
    }
}

/// Read a report file and render its sections
pub fn load_report(path: &Path) -> Result<LoadedReport, IoError> {
    let format = ReportFormat::of(path).ok_or_else(|| IoError::UnsupportedFile(path.to_path_buf()))?;
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;

    let (profile, sections) = match format {
        ReportFormat::Markdown => (
            None,
            vec![ReportSection {
                kind: None,
                title: display_name(path),
                blocks: render(&content),
            }],
        ),
        ReportFormat::Json => {
            let mut record =
                ProfileRecord::from_json(&content).map_err(|source| IoError::MalformedJson {
                    path: path.to_path_buf(),
                    source,
                })?;
            let sections = record.result.take().unwrap_or_default().sections();
            (Some(record), sections)
        }
    };

    log::debug!(
        "loaded {} with {} sections",
        path.display(),
        sections.len()
    );
    Ok(LoadedReport {
        path: path.to_path_buf(),
        profile,
        sections,
    })
}

/// Scan for report files in the reports directory
pub fn scan_report_files(reports_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !reports_root.exists() {
        return Err(IoError::InvalidReportsDir(
            "reports directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(reports_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if ReportFormat::of(&path).is_some() {
            files.push(path);
        } else {
            log::debug!("skipping non-report file {}", path.display());
        }
    }

    Ok(())
}

pub fn validate_reports_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidReportsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// File stem used as the title of a standalone markdown report.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
