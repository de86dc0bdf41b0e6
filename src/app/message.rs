// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::CenturyFilter;
use crate::ui::browser;
use crate::ui::qr_dialog;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Browser(browser::Message),
    QrDialog(qr_dialog::Message),
    /// Hide the configuration warning banner.
    DismissWarning,
    /// Escape was pressed while an overlay is open.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Optional page address encoded by the QR dialog.
    pub page_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PANDEMIC_ATLAS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional century filter applied at startup.
    pub initial_century: Option<CenturyFilter>,
}
