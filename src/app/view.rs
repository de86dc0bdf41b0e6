// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the browser inside a centered, scrollable column, the optional
//! configuration warning above it, and the QR dialog as a modal overlay.

use super::Message;
use crate::config::CONTENT_MAX_WIDTH;
use crate::i18n::fluent::I18n;
use crate::ui::browser::{self, ViewContext as BrowserViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::qr_dialog::{self, ViewContext as QrDialogViewContext};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, scrollable, text, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub browser: &'a browser::State,
    pub qr_dialog: Option<&'a qr_dialog::State>,
    /// i18n key of the warning to display, if any.
    pub warning: Option<&'a str>,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::LG).width(Length::Fill);

    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, key));
    }

    column = column.push(
        browser::view(BrowserViewContext {
            i18n: ctx.i18n,
            state: ctx.browser,
        })
        .map(Message::Browser),
    );

    let page = Container::new(column)
        .max_width(CONTENT_MAX_WIDTH)
        .padding([spacing::XXL, spacing::MD]);

    let base: Element<'_, Message> = scrollable(
        container(page)
            .center_x(Length::Fill)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into();

    match ctx.qr_dialog {
        Some(state) => qr_dialog::modal(
            base,
            qr_dialog::view(QrDialogViewContext {
                i18n: ctx.i18n,
                state,
            })
            .map(Message::QrDialog),
            Message::QrDialog(qr_dialog::Message::Close),
        ),
        None => base,
    }
}

fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(text(i18n.tr("notification-dismiss")).size(typography::BODY))
        .style(styles::button::ghost)
        .on_press(Message::DismissWarning);

    container(
        Row::new()
            .align_y(Vertical::Center)
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr(key)).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(dismiss),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::warning_banner)
    .into()
}
