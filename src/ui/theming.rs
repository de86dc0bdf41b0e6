// SPDX-License-Identifier: MPL-2.0
//! Theme mode management.

use crate::domain::Severity;
use crate::ui::design_tokens::palette;
use dark_light;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Returns the Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Accent color of a severity tier.
#[must_use]
pub fn severity_accent(severity: Severity) -> Color {
    match severity {
        Severity::Critical => palette::SEVERITY_CRITICAL,
        Severity::High => palette::SEVERITY_HIGH,
        Severity::Moderate => palette::SEVERITY_MODERATE,
    }
}
