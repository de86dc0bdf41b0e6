// SPDX-License-Identifier: MPL-2.0
//! Severity statistics panel. Counts always cover the whole dataset.

use super::Message;
use crate::domain::{Severity, SeverityCounts};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    font::Weight,
    widget::{container, Column, Row, Text},
    Element, Font, Length,
};

pub(super) fn view<'a>(i18n: &I18n, counts: SeverityCounts) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("stats-title"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let tiles = Severity::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::LG), |row, severity| {
            row.push(tile(i18n, severity, counts.get(severity)))
        })
        .wrap();

    container(
        Column::new()
            .spacing(spacing::LG)
            .push(title)
            .push(tiles),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn tile<'a>(i18n: &I18n, severity: Severity, count: usize) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(severity.label()).size(typography::TITLE_SM).font(bold))
        .push(Text::new(count.to_string()).size(typography::TITLE_LG).font(bold))
        .push(Text::new(i18n.tr(severity.caption_key())).size(typography::BODY));

    container(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::STATS_TILE_MIN_WIDTH))
        .style(styles::container::stats_tile(severity))
        .into()
}
