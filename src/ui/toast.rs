// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with category-colored accents and a dismiss button.

use crate::notifications::{Category, Notification, NotificationId, Notifier};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Applies a toast message to the notifier.
pub fn handle_message(notifier: &mut Notifier, message: &Message) {
    match message {
        Message::Dismiss(id) => {
            notifier.dismiss(*id);
        }
    }
}

/// Returns the accent color for a category.
#[must_use]
pub fn accent_color(category: Category) -> Color {
    match category {
        Category::Success => palette::SUCCESS_500,
        Category::Info => palette::INFO_500,
        Category::Warning => palette::WARNING_500,
        Category::Error => palette::ERROR_500,
    }
}

/// The notifications the overlay shows: the newest `max_visible`, oldest first.
pub fn visible(notifier: &Notifier, max_visible: usize) -> impl Iterator<Item = &Notification> {
    let hidden = notifier.len().saturating_sub(max_visible);
    notifier.iter().skip(hidden)
}

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let category = notification.category();
        let accent = accent_color(category);

        let label = Text::new(category.as_str().to_uppercase())
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let mut body = Column::new()
            .spacing(spacing::XXS)
            .push(label)
            .push(message_widget);

        if let Some(remaining) = notification.remaining() {
            body = body.push(
                Text::new(format!("{:.1}s", remaining.as_secs_f32()))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(Color {
                            a: opacity::OVERLAY_MEDIUM,
                            ..theme.palette().text
                        }),
                    }),
            );
        }

        let dismiss_button = button(text("×").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [label + message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders the toast overlay with the visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay(notifier: &Notifier, max_visible: usize) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> =
            visible(notifier, max_visible).map(Self::view).collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            shadow: shadow::NONE,
            ..button::Style::default()
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        },
    }
}
