// SPDX-License-Identifier: MPL-2.0
//! The artwork table: selection summary bar, header row, data rows, pager.
//!
//! Rendering only; every interaction is forwarded to the browser state
//! machine as a [`Message`].

use crate::browser::{Message, State};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, checkbox, container, mouse_area, scrollable, text, Column, Container, Row};
use iced::{Element, Length, Theme};

/// Renders the whole table screen.
pub fn view(state: &State) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(summary_bar(state))
        .push(header_row(state))
        .push(body(state))
        .push(pager(state));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// "Total selected: N" plus the clear button, which is only rendered while
/// the selection is non-empty.
fn summary_bar(state: &State) -> Element<'_, Message> {
    let mut bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            text(format!("Total selected: {}", state.selected_count()))
                .size(typography::TITLE_SM),
        );

    if state.selected_count() > 0 {
        bar = bar.push(
            button(text("Clear Selection").size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button_danger)
                .on_press(Message::ClearSelection),
        );
    }

    if state.is_loading() {
        bar = bar.push(text("Loading…").size(typography::BODY));
    }

    bar.into()
}

fn header_row(state: &State) -> Element<'_, Message> {
    let select_all = checkbox(state.page_fully_selected()).on_toggle(Message::PageToggled);

    // Header trigger for the cross-page selection dialog.
    let bulk_trigger = button(text("⌄").size(typography::BODY))
        .padding(spacing::XXS)
        .on_press(Message::OpenDialog);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(select_all).width(Length::Fixed(sizing::CHECKBOX_COLUMN_WIDTH)),
        )
        .push(Container::new(bulk_trigger).width(Length::Fixed(sizing::CHECKBOX_COLUMN_WIDTH)))
        .push(header_cell("ID", Length::Fixed(sizing::ID_COLUMN_WIDTH)))
        .push(header_cell("Title", Length::FillPortion(3)))
        .push(header_cell("Place of Origin", Length::FillPortion(2)))
        .push(header_cell("Artist", Length::FillPortion(3)))
        .push(header_cell("Inscriptions", Length::FillPortion(3)))
        .push(header_cell("Start", Length::Fixed(sizing::DATE_COLUMN_WIDTH)))
        .push(header_cell("End", Length::Fixed(sizing::DATE_COLUMN_WIDTH)))
        .push(header_cell("Image", Length::FillPortion(3)));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XXS, 0.0])
        .into()
}

fn body(state: &State) -> Element<'_, Message> {
    let mut rows = Column::new().spacing(0);
    for (index, artwork) in state.artworks().iter().enumerate() {
        rows = rows.push(data_row(state, artwork, index));
    }

    scrollable(rows).height(Length::Fill).width(Length::Fill).into()
}

fn data_row<'a>(
    state: &'a State,
    artwork: &'a crate::api::Artwork,
    index: usize,
) -> Element<'a, Message> {
    let id = artwork.id;
    let selected = state.is_selected(id);

    let row_checkbox = checkbox(selected).on_toggle(move |checked| Message::RowToggled(id, checked));

    let cells = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Container::new(row_checkbox).width(Length::Fixed(sizing::CHECKBOX_COLUMN_WIDTH)))
        .push(Container::new(text("")).width(Length::Fixed(sizing::CHECKBOX_COLUMN_WIDTH)))
        .push(body_cell(id.to_string(), Length::Fixed(sizing::ID_COLUMN_WIDTH)))
        .push(body_cell(display(&artwork.title), Length::FillPortion(3)))
        .push(body_cell(display(&artwork.place_of_origin), Length::FillPortion(2)))
        .push(body_cell(display(&artwork.artist_display), Length::FillPortion(3)))
        .push(body_cell(display(&artwork.inscriptions), Length::FillPortion(3)))
        .push(body_cell(
            display_date(artwork.date_start),
            Length::Fixed(sizing::DATE_COLUMN_WIDTH),
        ))
        .push(body_cell(
            display_date(artwork.date_end),
            Length::Fixed(sizing::DATE_COLUMN_WIDTH),
        ))
        // The IIIF URL is displayed, never fetched; a missing token simply
        // yields a URL that would not resolve.
        .push(
            Container::new(text(artwork.image_url()).size(typography::CAPTION))
                .width(Length::FillPortion(3)),
        );

    let striped = index % 2 == 1;
    let styled = Container::new(cells)
        .width(Length::Fill)
        .padding([spacing::XXS, 0.0])
        .style(move |theme: &Theme| {
            if selected {
                styles::container::table_row_selected(theme)
            } else {
                styles::container::table_row(theme, striped)
            }
        });

    // Clicks anywhere on the row (outside the checkbox) feed double-click
    // detection for the isolate-selection gesture.
    mouse_area(styled).on_press(Message::RowClicked(id)).into()
}

fn pager(state: &State) -> Element<'_, Message> {
    let previous = {
        let button = button(text("◀").size(typography::BODY)).style(styles::button_primary);
        if state.page() > 1 && !state.is_loading() {
            button.on_press(Message::PreviousPage)
        } else {
            button
        }
    };

    let next = {
        let button = button(text("▶").size(typography::BODY)).style(styles::button_primary);
        if state.page() < state.total_pages() && !state.is_loading() {
            button.on_press(Message::NextPage)
        } else {
            button
        }
    };

    let label = text(format!(
        "Page {} of {} — {} records",
        state.page(),
        state.total_pages(),
        state.total()
    ))
    .size(typography::BODY);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(label)
        .push(next);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn header_cell(label: &str, width: Length) -> Element<'_, Message> {
    container(text(label).size(typography::BODY)).width(width).into()
}

fn body_cell<'a>(content: String, width: Length) -> Element<'a, Message> {
    container(text(content).size(typography::BODY)).width(width).into()
}

fn display(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

fn display_date(field: Option<i64>) -> String {
    field.map(|date| date.to_string()).unwrap_or_default()
}
