// SPDX-License-Identifier: MPL-2.0
//! Page header: title, subtitle and the QR code trigger.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{button, text, Column, Text},
    Element, Font, Length,
};

pub(super) fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("app-title"))
        .size(typography::DISPLAY)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let subtitle = Text::new(i18n.tr("app-subtitle"))
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center);

    let qr_button = button(text(format!("▦ {}", i18n.tr("qr-button"))).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary)
        .on_press(Message::ShowQrCode);

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(qr_button)
        .into()
}
