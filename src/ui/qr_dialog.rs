// SPDX-License-Identifier: MPL-2.0
//! QR code dialog sharing the page address.
//!
//! The encoded payload lives in [`State`] because the QR widget borrows it
//! for the lifetime of the rendered element. A new state is built every time
//! the dialog opens, so the address is re-read on each opening.

use crate::config::{QR_CODE_MARGIN, QR_CODE_SIZE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{
        button, container, mouse_area, opaque,
        qr_code::{self, ErrorCorrection},
        text, Column, QRCode, Row, Space, Stack, Text,
    },
    Element, Font, Length, Theme,
};
use std::fmt;

/// What the dialog shows.
pub enum Content {
    /// No address could be resolved.
    Unavailable,
    /// Address encoded successfully.
    Encoded { url: String, data: qr_code::Data },
    /// Address does not fit in a QR symbol.
    TooLong { url: String },
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Unavailable => f.write_str("Unavailable"),
            Content::Encoded { url, .. } => f.debug_struct("Encoded").field("url", url).finish(),
            Content::TooLong { url } => f.debug_struct("TooLong").field("url", url).finish(),
        }
    }
}

/// State of an open dialog.
#[derive(Debug)]
pub struct State {
    content: Content,
}

impl State {
    /// Builds the dialog for `url`, encoding it with high error correction.
    #[must_use]
    pub fn open(url: Option<String>) -> Self {
        let content = match url {
            None => {
                tracing::info!("no page address configured, QR code unavailable");
                Content::Unavailable
            }
            Some(url) => match qr_code::Data::with_error_correction(&url, ErrorCorrection::High)
            {
                Ok(data) => Content::Encoded { url, data },
                Err(err) => {
                    tracing::warn!(%url, error = %err, "failed to encode page address");
                    Content::TooLong { url }
                }
            },
        };

        Self { content }
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Address shown under the code, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.content {
            Content::Unavailable => None,
            Content::Encoded { url, .. } | Content::TooLong { url } => Some(url),
        }
    }

    #[must_use]
    pub fn is_encoded(&self) -> bool {
        matches!(self.content, Content::Encoded { .. })
    }
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the dialog card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("qr-dialog-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let close = button(text("✕").size(typography::BODY_LG))
        .style(styles::button::ghost)
        .on_press(Message::Close);

    let heading = Row::new()
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let hint = Text::new(ctx.i18n.tr("qr-dialog-hint")).size(typography::BODY);

    let body: Element<'a, Message> = match ctx.state.content() {
        Content::Encoded { data, .. } => container(
            QRCode::new(data)
                .total_size(QR_CODE_SIZE)
                .style(|_theme: &Theme| qr_code::Style {
                    cell: palette::QR_INK,
                    background: palette::WHITE,
                }),
        )
        .padding(QR_CODE_MARGIN)
        .style(styles::container::qr_surface)
        .into(),
        Content::TooLong { .. } => Text::new(ctx.i18n.tr("qr-encode-error"))
            .size(typography::BODY_LG)
            .into(),
        Content::Unavailable => Text::new(ctx.i18n.tr("qr-url-unavailable"))
            .size(typography::BODY_LG)
            .into(),
    };

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(hint)
        .push(body);

    if let Some(url) = ctx.state.url() {
        column = column.push(Text::new(url).size(typography::BODY));
    }

    container(column)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .style(styles::container::panel)
        .into()
}

/// Stacks `dialog` over a dimmed `base`. Clicking the backdrop emits
/// `on_blur`.
pub fn modal<'a, M>(base: Element<'a, M>, dialog: Element<'a, M>, on_blur: M) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let backdrop = container(opaque(dialog))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::backdrop);

    Stack::new()
        .push(base)
        .push(opaque(mouse_area(backdrop).on_press(on_blur)))
        .into()
}
