// SPDX-License-Identifier: MPL-2.0
//! Resolution of the address encoded by the QR dialog.
//!
//! A desktop window has no page URL of its own, so the address comes from
//! the first non-empty source among:
//! 1. `--url` on the command line
//! 2. `PANDEMIC_ATLAS_PAGE_URL` environment variable (read on every call)
//! 3. `[share] page_url` in `settings.toml`

use crate::config::ENV_PAGE_URL;

/// Sources the page address can come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUrlSources {
    /// Value of `--url`.
    pub cli: Option<String>,
    /// Value of `[share] page_url`.
    pub config: Option<String>,
}

impl PageUrlSources {
    /// Returns the current page address, re-reading the environment.
    #[must_use]
    pub fn current_page_url(&self) -> Option<String> {
        let env = std::env::var(ENV_PAGE_URL).ok();
        resolve_page_url(self.cli.as_deref(), env.as_deref(), self.config.as_deref())
    }
}

/// Picks the first non-blank address, trimmed.
#[must_use]
pub fn resolve_page_url(
    cli: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> Option<String> {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map(str::to_string)
}
