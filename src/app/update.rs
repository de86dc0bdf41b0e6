// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::page_url::PageUrlSources;
use super::Message;
use crate::ui::browser::{self, Event as BrowserEvent};
use crate::ui::qr_dialog;
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub browser: &'a mut browser::State,
    pub qr_dialog: &'a mut Option<qr_dialog::State>,
    pub page_url: &'a PageUrlSources,
    pub warning: &'a mut Option<String>,
}

pub fn handle_browser_message(
    ctx: &mut UpdateContext<'_>,
    message: browser::Message,
) -> Task<Message> {
    match browser::update(ctx.browser, message) {
        BrowserEvent::None => {}
        BrowserEvent::OpenQrDialog => open_qr_dialog(ctx),
    }
    Task::none()
}

pub fn handle_qr_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: qr_dialog::Message,
) -> Task<Message> {
    match message {
        qr_dialog::Message::Close => close_qr_dialog(ctx),
    }
    Task::none()
}

pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    close_qr_dialog(ctx);
    Task::none()
}

pub fn handle_dismiss_warning(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.warning = None;
    Task::none()
}

fn open_qr_dialog(ctx: &mut UpdateContext<'_>) {
    let url = ctx.page_url.current_page_url();
    tracing::debug!(url = url.as_deref().unwrap_or("<none>"), "opening QR dialog");
    *ctx.qr_dialog = Some(qr_dialog::State::open(url));
}

fn close_qr_dialog(ctx: &mut UpdateContext<'_>) {
    if ctx.qr_dialog.take().is_some() {
        tracing::debug!("closed QR dialog");
    }
}
