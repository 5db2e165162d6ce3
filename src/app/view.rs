// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A control panel to raise notifications, with the toast overlay stacked
//! on top of it.

use super::Message;
use crate::notifications::{Category, Notifier};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast::Toast;
use iced::widget::{button, stack, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub notifier: &'a Notifier,
    pub max_visible: usize,
}

/// Renders the control panel with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay = Toast::view_overlay(ctx.notifier, ctx.max_visible).map(Message::Toast);

    stack![controls(ctx.notifier), overlay]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls(notifier: &Notifier) -> Element<'_, Message> {
    let title = Text::new("Notifications").size(typography::TITLE_MD);

    let raise_row = Category::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, category| {
            row.push(action_button(
                capitalize(category.as_str()),
                Message::Raise(*category),
            ))
        });

    let extra_row = Row::new()
        .spacing(spacing::XS)
        .push(action_button(
            "Persistent".to_string(),
            Message::RaisePersistent(Category::Warning),
        ))
        .push(action_button("Clear all".to_string(), Message::ClearAll));

    let status = Text::new(format!(
        "{} active, {} expiring",
        notifier.len(),
        notifier.pending_expiries()
    ))
    .size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Left)
        .push(title)
        .push(raise_row)
        .push(extra_row)
        .push(status);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn action_button(label: String, message: Message) -> Element<'static, Message> {
    button(
        Container::new(Text::new(label).size(typography::BODY))
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([0.0, spacing::SM])
    .on_press(message)
    .into()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
