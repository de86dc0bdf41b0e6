// SPDX-License-Identifier: MPL-2.0
//! Pandemic record types.
//!
//! Records are plain data: every free-text figure (deaths, affected
//! population, period) is kept as written in the source material and is never
//! parsed. Only `year` and `severity` carry structure.

use super::century::compute_century;
use std::fmt;

// =============================================================================
// RecordId
// =============================================================================

/// Identifier of a record, unique within the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(&'static str);

impl RecordId {
    /// Wraps a static identifier.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// =============================================================================
// Severity
// =============================================================================

/// Label shown for a severity tag that is not one of the known tiers.
pub const UNKNOWN_SEVERITY_LABEL: &str = "Неизвестно";

/// Coarse impact classification attached to each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Moderate,
}

impl Severity {
    /// All tiers, most severe first.
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::High, Severity::Moderate];

    /// Returns the lowercase tag (`critical`, `high`, `moderate`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Moderate => "moderate",
        }
    }

    /// Parses a lowercase tag. Returns `None` for anything else.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|severity| severity.tag() == tag)
    }

    /// Returns the display label of this tier.
    #[must_use]
    pub fn label(self) -> &'static str {
        severity_label(self.tag())
    }

    /// Returns the i18n message key for the statistics caption of this tier.
    #[must_use]
    pub fn caption_key(self) -> &'static str {
        match self {
            Severity::Critical => "stats-caption-critical",
            Severity::High => "stats-caption-high",
            Severity::Moderate => "stats-caption-moderate",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Maps a severity tag to its display label.
///
/// Labels belong to the dataset (they are written in the dataset's language),
/// not to the UI chrome. Unrecognized tags map to [`UNKNOWN_SEVERITY_LABEL`].
#[must_use]
pub fn severity_label(tag: &str) -> &'static str {
    match tag {
        "critical" => "Критический",
        "high" => "Высокий",
        "moderate" => "Умеренный",
        _ => UNKNOWN_SEVERITY_LABEL,
    }
}

// =============================================================================
// PandemicRecord
// =============================================================================

/// One historical pandemic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PandemicRecord {
    pub id: RecordId,
    pub name: &'static str,
    /// Recorded start year.
    pub year: i32,
    pub period: &'static str,
    pub deaths: &'static str,
    pub affected: &'static str,
    pub description: &'static str,
    pub region: &'static str,
    pub severity: Severity,
}

impl PandemicRecord {
    /// Century the record started in.
    #[must_use]
    pub fn century(&self) -> i32 {
        compute_century(self.year)
    }
}
