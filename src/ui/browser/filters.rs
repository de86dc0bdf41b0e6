// SPDX-License-Identifier: MPL-2.0
//! Century filter row.

use super::Message;
use crate::domain::CenturyFilter;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::{
    widget::{button, text, Row},
    Element,
};

pub(super) fn view<'a>(
    i18n: &I18n,
    centuries: &[i32],
    active: CenturyFilter,
) -> Element<'a, Message> {
    let all = filter_button(i18n.tr("filter-all"), CenturyFilter::All, active);

    centuries
        .iter()
        .fold(Row::new().spacing(spacing::XS).push(all), |row, &century| {
            let label =
                i18n.tr_with_args("filter-century", &[("century", FluentValue::from(century))]);
            row.push(filter_button(label, CenturyFilter::Century(century), active))
        })
        .wrap()
        .into()
}

fn filter_button<'a>(
    label: String,
    filter: CenturyFilter,
    active: CenturyFilter,
) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::toggle(filter == active))
        .on_press(Message::SetFilter(filter))
        .into()
}
