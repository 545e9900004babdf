// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the browser state machine to its two collaborators:
//! the artwork API client (the only source of side effects) and the toast
//! notification manager. The update loop translates browser events into
//! `Task`s and feeds their completions back into the state machine.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::ArtworkClient;
use crate::browser;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    browser: browser::State,
    client: ArtworkClient,
    notifications: notifications::Manager,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("page", &self.browser.page())
            .field("selected", &self.browser.selected_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
    /// Creates the initial state and kicks off the fetch for page 1.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let client = match flags.api_base {
            Some(base) => ArtworkClient::new(base),
            None => ArtworkClient::default_endpoint(),
        }
        .expect("Failed to build HTTP client");

        let mut browser = browser::State::new();
        let seq = browser.begin_fetch(1);
        let boot_task = update::fetch_page_task(client.clone(), seq, 1);

        let app = Self {
            browser,
            client,
            notifications: notifications::Manager::new(),
        };

        (app, boot_task)
    }

    pub fn title(&self) -> String {
        String::from("Artic Table")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }
}
