use iced::widget::{button, container, scrollable, text, tooltip::Position};

use crate::style;
use iced::Element;

pub const DEFAULT_TOOLTIP_DELAY: std::time::Duration = std::time::Duration::from_millis(500);

/// ایجاد یک تولتیپ (Tooltip) ساده برای یک عنصر
pub fn tooltip<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tooltip: Option<&'a str>,
    position: Position,
) -> Element<'a, Message> {
    match tooltip {
        Some(tooltip) => iced::widget::tooltip(
            content,
            container(text(tooltip)).style(style::tooltip).padding(8),
            position,
        )
        .delay(DEFAULT_TOOLTIP_DELAY)
        .into(),
        None => content.into(),
    }
}

/// دکمه‌ای که همراه با تولتیپ نمایش داده می‌شود
pub fn button_with_tooltip<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    message: Message,
    tooltip_text: Option<&'a str>,
    position: Position,
    style: impl Fn(&iced::Theme, button::Status) -> button::Style + 'a,
) -> Element<'a, Message> {
    let btn = button(content).style(style).on_press(message);

    tooltip(btn, tooltip_text, position)
}

/// ایجاد یک محتوای قابل اسکرول (عمودی)
pub fn scrollable_content<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    scrollable::Scrollable::with_direction(
        content,
        scrollable::Direction::Vertical(scrollable::Scrollbar::new().width(4).scroller_width(4)),
    )
    .style(style::scroll_bar)
    .into()
}
