// SPDX-License-Identifier: MPL-2.0
//! Update logic: translates messages into state transitions and `Task`s.
//!
//! Both failure kinds — a single page load and a page inside the bulk
//! selection loop — are handled the same way: log for diagnostics, show a
//! blocking error toast, release the loading flag, touch nothing else.
//! Neither is retried.

use super::{App, Message};
use crate::api::{ArtworkClient, ArtworkSource};
use crate::browser::{self, bulk, Event};
use crate::ui::notifications::Notification;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Browser(msg) => match browser::update(&mut app.browser, msg) {
            Event::None => Task::none(),
            Event::FetchPage(page) => {
                let seq = app.browser.begin_fetch(page);
                fetch_page_task(app.client.clone(), seq, page)
            }
            Event::BulkSelect(target) => {
                app.browser.begin_bulk();
                bulk_select_task(app.client.clone(), target)
            }
        },

        Message::PageLoaded { seq, result } => {
            match result {
                Ok(response) => {
                    app.browser.apply_page(seq, response);
                }
                Err(err) => {
                    eprintln!("Failed to fetch artwork page: {err}");
                    // A stale failure was superseded by a newer request;
                    // only a current one is worth telling the user about.
                    if app.browser.fetch_failed(seq) {
                        app.notifications.push(Notification::error(
                            "Something went wrong while fetching the data. Please try again later.",
                        ));
                    }
                }
            }
            Task::none()
        }

        Message::BulkSelectFinished(result) => {
            match result {
                Ok(ids) => {
                    let count = ids.len();
                    app.browser.bulk_finished(ids);
                    app.notifications
                        .push(Notification::success(format!("Selected {count} rows")));
                }
                Err(err) => {
                    eprintln!("Row selection failed: {err}");
                    app.browser.bulk_failed();
                    app.notifications.push(Notification::error(
                        "There was an issue selecting the rows. Please try again.",
                    ));
                }
            }
            Task::none()
        }

        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }

        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

/// Fetches one page; the completion carries `seq` so the state machine can
/// drop it if a later request superseded it.
pub fn fetch_page_task(client: ArtworkClient, seq: u64, page: u32) -> Task<Message> {
    Task::perform(
        async move { client.fetch_page(page, browser::PAGE_SIZE).await },
        move |result| Message::PageLoaded { seq, result },
    )
}

fn bulk_select_task(client: ArtworkClient, target: usize) -> Task<Message> {
    Task::perform(
        async move { bulk::select_across_pages(&client, target, browser::PAGE_SIZE).await },
        Message::BulkSelectFinished,
    )
}
