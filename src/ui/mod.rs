// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`browser`] - Century filters, record cards and severity statistics
//! - [`qr_dialog`] - Modal dialog sharing the page address as a QR code
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and severity accents

pub mod browser;
pub mod design_tokens;
pub mod qr_dialog;
pub mod styles;
pub mod theming;
