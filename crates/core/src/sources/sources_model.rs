//! Source identities and load output shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combine::CombineOptions;
use crate::frame::Frame;
use crate::generator::SampleConfig;
use crate::pipeline::ProcessedData;

/// Which upstream a load was asked to read, and which one actually served it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    /// Seeded synthetic generator.
    Sample,
    /// Relational store via the repository traits.
    Database,
    /// Uploaded CSV files.
    Spreadsheet,
    /// Attribution partner reporting API.
    Attribution,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Sample => "sample",
            SourceKind::Database => "database",
            SourceKind::Spreadsheet => "spreadsheet",
            SourceKind::Attribution => "attribution",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw campaign and sales tables produced by one source adapter, before any
/// derivation or combination has run.
#[derive(Debug, Clone)]
pub struct RawDatasets {
    pub campaign: Frame,
    pub sales: Frame,
}

/// Non-fatal conditions raised while acquiring data, before the pipeline ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LoadWarning {
    /// The requested source failed and the seeded sample generator answered
    /// in its place.
    SourceSubstituted {
        requested: SourceKind,
        reason: String,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::SourceSubstituted { requested, reason } => write!(
                f,
                "substituted sample data for unavailable {} source: {}",
                requested, reason
            ),
        }
    }
}

/// Everything a finished load hands to consumers.
#[derive(Debug, Clone)]
pub struct LoadedData {
    /// Per-table and unified frames from the pipeline.
    pub data: ProcessedData,
    /// The source that actually produced the raw tables.
    pub origin: SourceKind,
    /// Acquisition-stage warnings; pipeline warnings live in `data`.
    pub warnings: Vec<LoadWarning>,
}

impl LoadedData {
    /// True when the raw tables did not come from the requested source.
    pub fn is_substituted(&self) -> bool {
        self.warnings
            .iter()
            .any(|warning| matches!(warning, LoadWarning::SourceSubstituted { .. }))
    }
}

/// Tuning knobs for a [`LoadService`](crate::sources::LoadService) load.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Substitute the seeded generator when the requested source is
    /// unavailable. Disabled, the source error propagates to the caller.
    pub fallback_to_sample: bool,
    /// Generator configuration used for sample loads and substitutions.
    pub sample: SampleConfig,
    /// Combination options forwarded to the pipeline.
    pub combine: CombineOptions,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            fallback_to_sample: true,
            sample: SampleConfig::default(),
            combine: CombineOptions::default(),
        }
    }
}
