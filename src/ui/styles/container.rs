// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::Severity;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::severity_accent;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface (statistics panel, dialog card).
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Muted box holding one figure (deaths, affected) inside a card.
pub fn metric(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill-shaped severity badge.
pub fn badge(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| tinted(severity, radius::FULL, border::WIDTH_SM)
}

/// Statistics tile of one severity tier.
pub fn stats_tile(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| tinted(severity, radius::MD, border::WIDTH_MD)
}

fn tinted(severity: Severity, corner: f32, width: f32) -> container::Style {
    let accent = severity_accent(severity);

    container::Style {
        text_color: Some(accent),
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..accent
        })),
        border: Border {
            color: Color {
                a: opacity::BORDER_SOFT,
                ..accent
            },
            width,
            radius: corner.into(),
        },
        ..Default::default()
    }
}

/// White quiet zone behind the QR code, whatever the theme.
pub fn qr_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind modal dialogs.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Warning banner shown above the content.
pub fn warning_banner(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::GRAY_900),
        background: Some(Background::Color(palette::WARNING_500)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_text_uses_severity_accent() {
        let style = badge(Severity::High)(&Theme::Dark);
        assert_eq!(style.text_color, Some(palette::SEVERITY_HIGH));
    }

    #[test]
    fn stats_tile_background_is_translucent() {
        let style = stats_tile(Severity::Critical)(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn qr_surface_is_white_in_dark_theme() {
        let style = qr_surface(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(palette::WHITE)));
    }
}
