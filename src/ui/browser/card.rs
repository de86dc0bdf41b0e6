// SPDX-License-Identifier: MPL-2.0
//! Record card. Clicking the card toggles its description.

use super::Message;
use crate::domain::PandemicRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, container, rule, Column, Row, Space, Text},
    Element, Font, Length,
};

pub(super) fn view<'a>(
    i18n: &I18n,
    record: &'static PandemicRecord,
    selected: bool,
) -> Element<'a, Message> {
    let title = Text::new(record.name)
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });
    let subtitle = Text::new(format!("{} • {}", record.period, record.region))
        .size(typography::BODY_LG);

    let badge = container(Text::new(record.severity.label()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(record.severity));

    let heading = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Top)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(title)
                .push(subtitle),
        )
        .push(badge);

    let figures = Row::new()
        .spacing(spacing::LG)
        .push(metric(i18n.tr("card-deaths-label"), record.deaths))
        .push(metric(i18n.tr("card-affected-label"), record.affected));

    let start_year = Text::new(i18n.tr_with_args(
        "card-start-year",
        &[("year", FluentValue::from(record.year.to_string()))],
    ))
    .size(typography::BODY);
    let indicator = Text::new(if selected { "▲" } else { "▼" }).size(typography::BODY);

    let footer = Row::new()
        .align_y(Vertical::Center)
        .push(start_year)
        .push(Space::new().width(Length::Fill))
        .push(indicator);

    let mut body = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(figures);

    if selected {
        body = body
            .push(rule::horizontal(1))
            .push(Text::new(record.description).size(typography::BODY_LG));
    }

    button(body.push(footer))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::button::card(selected))
        .on_press(Message::SelectRecord(record.id))
        .into()
}

fn metric<'a>(label: String, value: &'static str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(
            Text::new(value)
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                }),
        );

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::metric)
        .into()
}
