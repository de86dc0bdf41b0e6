// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the browser and the QR
//! dialog.
//!
//! The `App` struct wires together localization, the persisted configuration,
//! the pandemic browser and the share dialog, and routes every message through
//! a single update entrypoint.

mod message;
pub mod page_url;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::ui::browser;
use crate::ui::qr_dialog;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use page_url::PageUrlSources;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    browser: browser::State,
    /// Open share dialog, if any.
    qr_dialog: Option<qr_dialog::State>,
    page_url: PageUrlSources,
    /// i18n key of a startup warning not yet dismissed.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("browser", &self.browser)
            .field("qr_dialog_open", &self.qr_dialog.is_some())
            .field("warning", &self.warning)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            browser: browser::State::new(),
            qr_dialog: None,
            page_url: PageUrlSources::default(),
            warning: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the persisted configuration and
    /// the launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let initial_filter = flags
            .initial_century
            .or(config.browser.initial_century)
            .unwrap_or_default();

        if let Some(key) = &config_warning {
            tracing::warn!(key = %key, "configuration could not be loaded");
        }

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            browser: browser::State::with_filter(initial_filter),
            qr_dialog: None,
            page_url: PageUrlSources {
                cli: flags.page_url,
                config: config.share.page_url,
            },
            warning: config_warning,
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            filter = %initial_filter,
            "application started"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.qr_dialog.is_some())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            browser: &mut self.browser,
            qr_dialog: &mut self.qr_dialog,
            page_url: &self.page_url,
            warning: &mut self.warning,
        };

        match message {
            Message::Browser(browser_message) => {
                update::handle_browser_message(&mut ctx, browser_message)
            }
            Message::QrDialog(dialog_message) => {
                update::handle_qr_dialog_message(&mut ctx, dialog_message)
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::DismissWarning => update::handle_dismiss_warning(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            browser: &self.browser,
            qr_dialog: self.qr_dialog.as_ref(),
            warning: self.warning.as_deref(),
        })
    }
}
