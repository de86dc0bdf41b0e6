// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Localization**: Fallback locale
//! - **Sharing**: QR code rendering
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS locale match an
/// embedded translation. The dataset itself is written in this language.
pub const DEFAULT_LOCALE: &str = "ru";

// ==========================================================================
// Sharing Defaults
// ==========================================================================

/// Environment variable holding the address encoded in the QR dialog.
pub const ENV_PAGE_URL: &str = "PANDEMIC_ATLAS_PAGE_URL";

/// Rendered side length of the QR code, in logical pixels.
pub const QR_CODE_SIZE: f32 = 256.0;

/// Quiet zone around the QR code, in logical pixels.
pub const QR_CODE_MARGIN: f32 = 24.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Maximum width of the main content column.
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(QR_CODE_SIZE > 0.0);
    assert!(QR_CODE_MARGIN >= 0.0);

    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(CONTENT_MAX_WIDTH >= MIN_WINDOW_WIDTH);

    // Dialog must fit in the smallest window.
    assert!(QR_CODE_SIZE + 2.0 * QR_CODE_MARGIN < MIN_WINDOW_WIDTH);
};
