// SPDX-License-Identifier: MPL-2.0
//! Pandemic browser: the century filter row, the record cards and the
//! severity statistics.
//!
//! The browser owns only two pieces of transient state, the selected record
//! and the active century filter. Everything it renders is derived from the
//! fixed dataset on every frame.

mod card;
mod filters;
mod header;
mod statistics;

use crate::domain::{
    distinct_centuries, visible_records, CenturyFilter, PandemicRecord, RecordId,
    SeverityCounts, PANDEMICS,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{Column, Text},
    Element, Length,
};

/// Browser state.
#[derive(Debug, Clone)]
pub struct State {
    selected_id: Option<RecordId>,
    active_filter: CenturyFilter,
    /// Distinct centuries of the dataset, computed once.
    centuries: Vec<i32>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates a browser with nothing selected and every century shown.
    #[must_use]
    pub fn new() -> Self {
        Self::with_filter(CenturyFilter::All)
    }

    /// Creates a browser starting on `filter`.
    #[must_use]
    pub fn with_filter(active_filter: CenturyFilter) -> Self {
        Self {
            selected_id: None,
            active_filter,
            centuries: distinct_centuries(&PANDEMICS),
        }
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected_id
    }

    #[must_use]
    pub fn active_filter(&self) -> CenturyFilter {
        self.active_filter
    }

    #[must_use]
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected_id == Some(id)
    }

    /// Toggles the selection: selecting the selected record clears it,
    /// selecting any other record replaces it.
    pub fn select_record(&mut self, id: RecordId) {
        self.selected_id = if self.is_selected(id) { None } else { Some(id) };
    }

    /// Changes the active filter. The selection is kept as is.
    pub fn set_filter(&mut self, filter: CenturyFilter) {
        self.active_filter = filter;
    }

    /// Records passing the active filter, in dataset order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&'static PandemicRecord> {
        visible_records(&PANDEMICS, self.active_filter)
    }

    /// Distinct centuries of the whole dataset, ascending.
    #[must_use]
    pub fn distinct_centuries(&self) -> &[i32] {
        &self.centuries
    }

    /// Severity counts over the whole dataset, regardless of the filter.
    #[must_use]
    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::tally(&PANDEMICS)
    }
}

/// Messages emitted by the browser.
#[derive(Debug, Clone)]
pub enum Message {
    SelectRecord(RecordId),
    SetFilter(CenturyFilter),
    ShowQrCode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenQrDialog,
}

/// Process a browser message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectRecord(id) => {
            state.select_record(id);
            tracing::debug!(record = %id, selected = state.is_selected(id), "toggled record");
            Event::None
        }
        Message::SetFilter(filter) => {
            state.set_filter(filter);
            tracing::debug!(%filter, "changed century filter");
            Event::None
        }
        Message::ShowQrCode => Event::OpenQrDialog,
    }
}

/// Contextual data needed to render the browser.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the browser: header, filters, cards, statistics and footer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let records = ctx.state.visible_records();

    let cards: Element<'a, Message> = if records.is_empty() {
        Text::new(ctx.i18n.tr("card-empty"))
            .size(typography::BODY_LG)
            .into()
    } else {
        records
            .into_iter()
            .fold(Column::new().spacing(spacing::LG), |column, record| {
                column.push(card::view(
                    ctx.i18n,
                    record,
                    ctx.state.is_selected(record.id),
                ))
            })
            .width(Length::Fill)
            .into()
    };

    let footer = Text::new(ctx.i18n.tr("footer-text")).size(typography::BODY);

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(header::view(ctx.i18n))
        .push(filters::view(
            ctx.i18n,
            ctx.state.distinct_centuries(),
            ctx.state.active_filter(),
        ))
        .push(cards)
        .push(statistics::view(ctx.i18n, ctx.state.severity_counts()))
        .push(footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_selection_and_all_filter() {
        let state = State::new();
        assert_eq!(state.selected_id(), None);
        assert_eq!(state.active_filter(), CenturyFilter::All);
    }

    #[test]
    fn selecting_twice_restores_no_selection() {
        let mut state = State::new();
        let id = RecordId::new("4");
        state.select_record(id);
        assert_eq!(state.selected_id(), Some(id));
        state.select_record(id);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn selecting_selected_record_twice_keeps_it_selected() {
        let mut state = State::new();
        let id = RecordId::new("2");
        state.select_record(id);
        state.select_record(id);
        state.select_record(id);
        assert_eq!(state.selected_id(), Some(id));
    }

    #[test]
    fn selection_is_exclusive() {
        let mut state = State::new();
        state.select_record(RecordId::new("3"));
        state.select_record(RecordId::new("5"));
        assert_eq!(state.selected_id(), Some(RecordId::new("5")));
        assert!(!state.is_selected(RecordId::new("3")));
    }

    #[test]
    fn filter_change_keeps_selection() {
        let mut state = State::new();
        state.select_record(RecordId::new("1"));
        state.set_filter(CenturyFilter::Century(21));
        assert_eq!(state.selected_id(), Some(RecordId::new("1")));
        assert!(state
            .visible_records()
            .iter()
            .all(|record| record.id != RecordId::new("1")));
    }

    #[test]
    fn severity_counts_ignore_filter() {
        let mut state = State::new();
        let all = state.severity_counts();
        state.set_filter(CenturyFilter::Century(6));
        assert_eq!(state.severity_counts(), all);
        assert_eq!(state.visible_records().len(), 1);
    }

    #[test]
    fn distinct_centuries_do_not_depend_on_filter() {
        let mut state = State::new();
        state.set_filter(CenturyFilter::Century(14));
        assert_eq!(state.distinct_centuries(), &[6, 14, 16, 19, 20, 21]);
    }

    #[test]
    fn update_routes_messages() {
        let mut state = State::new();
        assert_eq!(
            update(&mut state, Message::SetFilter(CenturyFilter::Century(20))),
            Event::None
        );
        assert_eq!(state.active_filter(), CenturyFilter::Century(20));

        assert_eq!(
            update(&mut state, Message::SelectRecord(RecordId::new("6"))),
            Event::None
        );
        assert_eq!(state.selected_id(), Some(RecordId::new("6")));

        assert_eq!(update(&mut state, Message::ShowQrCode), Event::OpenQrDialog);
    }
}
