// SPDX-License-Identifier: MPL-2.0
//! View rendering: the table, the dialog overlay, and the toast layer.

use super::{App, Message};
use crate::ui::notifications::Toast;
use crate::ui::{dialog, table};
use iced::widget::Stack;
use iced::Element;

pub fn view(app: &App) -> Element<'_, Message> {
    let table_view = dialog::wrap(table::view(&app.browser), &app.browser).map(Message::Browser);
    let toast_overlay = Toast::view_overlay(&app.notifications).map(Message::Notification);

    Stack::new().push(table_view).push(toast_overlay).into()
}
