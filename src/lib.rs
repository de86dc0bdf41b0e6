// SPDX-License-Identifier: MPL-2.0
//! `pandemic_atlas` is an illustrated chronicle of the most devastating
//! pandemics in human history, built with the Iced GUI framework.
//!
//! Records can be filtered by century and expanded for details, severity
//! statistics summarize the whole dataset, and the page address can be shared
//! through a QR code.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
