// SPDX-License-Identifier: MPL-2.0
//! Modal dialog for the cross-page bulk selection.
//!
//! Rendered as a `Stack` layer over the table: a dim backdrop (click to
//! dismiss) with a centered card holding the target-count input. The card is
//! opaque so its own clicks never reach the backdrop.

use crate::browser::{Dialog, Message, State};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, opaque, text, text_input, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Wraps `base` with the dialog overlay when the dialog is open.
pub fn wrap<'a>(base: Element<'a, Message>, state: &'a State) -> Element<'a, Message> {
    if state.dialog() != Dialog::Open {
        return base;
    }

    let backdrop = Container::new(opaque(card(state)))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop);

    let overlay = opaque(mouse_area(backdrop).on_press(Message::DismissDialog));

    Stack::new().push(base).push(overlay).into()
}

fn card(state: &State) -> Element<'_, Message> {
    let title = text("Select Rows Across Pages").size(typography::TITLE_MD);
    let prompt = text("Enter number of rows to select:").size(typography::BODY);

    let input = text_input("Enter number of rows", state.dialog_input())
        .on_input(Message::DialogInputChanged)
        .on_submit(Message::SubmitDialog)
        .size(typography::BODY)
        .padding(spacing::XS);

    let bound_hint = text(format!("1 – {}", state.total())).size(typography::CAPTION);

    let cancel = button(text("Cancel").size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::DismissDialog);

    let submit = {
        let button = button(text("Submit").size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button_primary);
        if state.dialog_target().is_some() && !state.is_loading() {
            button.on_press(Message::SubmitDialog)
        } else {
            button
        }
    };

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(cancel)
        .push(submit);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(prompt)
        .push(input)
        .push(bound_hint)
        .push(
            Container::new(footer)
                .align_x(Horizontal::Right)
                .width(Length::Fill),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}
