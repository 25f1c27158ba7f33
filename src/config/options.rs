// src/config/options.rs
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;
use crate::loader::Source;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub sources: Sources,
    pub export: ExportOptions,
}

/// Where each board reads its records from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sources {
    pub props: Source,
    pub predictions: Source,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            props: Source::File(PathBuf::from(DEFAULT_PROPS_FILE)),
            predictions: Source::File(PathBuf::from(DEFAULT_PREDICTIONS_FILE)),
        }
    }
}

impl Sources {
    pub fn for_page(&self, kind: PageKind) -> &Source {
        match kind {
            PageKind::Props => &self.props,
            PageKind::Predictions => &self.predictions,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Props,
    Predictions,
}

impl PageKind {
    pub fn stem(&self) -> &'static str {
        match self {
            PageKind::Props => "props",
            PageKind::Predictions => "predictions",
        }
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "props" | "prop" => Ok(PageKind::Props),
            "predictions" | "prediction" | "preds" => Ok(PageKind::Predictions),
            other => Err(format!("Unknown page: {other}")),
        }
    }
}

/// Props page filter. Each bucket keeps `over_line` in a half-open
/// `(lower, upper]` interval; `All` keeps everything in file order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BucketFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl BucketFilter {
    pub const ALL: [BucketFilter; 4] = [
        BucketFilter::All,
        BucketFilter::High,
        BucketFilter::Medium,
        BucketFilter::Low,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BucketFilter::All => "All",
            BucketFilter::High => "High (>80%)",
            BucketFilter::Medium => "Medium (60-80%)",
            BucketFilter::Low => "Low (<=60%)",
        }
    }

    /// `None` for `All`: no bound checks at all.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            BucketFilter::All => None,
            BucketFilter::High => Some((HIGH_ABOVE, 1.0)),
            BucketFilter::Medium => Some((MEDIUM_ABOVE, HIGH_ABOVE)),
            BucketFilter::Low => Some((0.0, MEDIUM_ABOVE)),
        }
    }

    /// Whether a record with this `over_line` survives the filter.
    /// A missing probability only survives `All`.
    pub fn admits(&self, over_line: Option<f64>) -> bool {
        match self.bounds() {
            None => true,
            Some((lower, upper)) => over_line.is_some_and(|p| p > lower && p <= upper),
        }
    }
}

impl fmt::Display for BucketFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BucketFilter::All => "all",
            BucketFilter::High => "high",
            BucketFilter::Medium => "medium",
            BucketFilter::Low => "low",
        })
    }
}

impl FromStr for BucketFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(BucketFilter::All),
            "high" => Ok(BucketFilter::High),
            "medium" => Ok(BucketFilter::Medium),
            "low" => Ok(BucketFilter::Low),
            other => Err(format!("Unknown filter: {other} (all|high|medium|low)")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    dir: PathBuf,
    file_stem: Option<OsString>, // None → page stem
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: None,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the stem defaults to the page name.
    pub fn out_path(&self, kind: PageKind) -> PathBuf {
        let stem = self
            .file_stem
            .as_ref()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!(kind.stem()));
        self.dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Parse user text into dir + stem. Ignores a pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.dir = parent.to_path_buf();
        }
        self.file_stem = p.file_stem().map(|s| s.to_os_string());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}
