// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (QR trigger, active filter).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Inactive entry of a toggle group (century filters).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Filter button style: [`primary`] when active, [`secondary`] otherwise.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            primary(theme, status)
        } else {
            secondary(theme, status)
        }
    }
}

/// Clickable record card. The selected card gets a brand border and a
/// stronger shadow.
pub fn card(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

        let border_color = if selected {
            palette::PRIMARY_500
        } else if hovered {
            extended.background.strong.color
        } else {
            Color {
                a: opacity::BORDER_SOFT,
                ..extended.background.strong.color
            }
        };

        button::Style {
            background: Some(Background::Color(extended.background.base.color)),
            text_color: extended.background.base.text,
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: if selected || hovered {
                shadow::LG
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

/// Borderless text-like button (dialog close, banner dismiss).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_toggle_uses_brand_background() {
        let style = toggle(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn inactive_toggle_follows_theme_background() {
        let style = toggle(false)(&Theme::Light, button::Status::Active);
        assert_ne!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn selected_card_has_brand_border() {
        let selected = card(true)(&Theme::Dark, button::Status::Active);
        let idle = card(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(selected.border.color, palette::PRIMARY_500);
        assert_ne!(idle.border.color, palette::PRIMARY_500);
    }
}
