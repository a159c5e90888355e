use data::{CategoryId, Widget, WidgetData, WidgetKind};
use iced::widget::tooltip::Position;
use iced::widget::{button, center, column, container, row, space, text};
use iced::{Alignment, Element, Length};

use super::Message;
use crate::chart;
use crate::style::{self, Icon, icon_text};
use crate::widget::tooltip;

pub const CARD_WIDTH: f32 = 420.0;
pub const CARD_HEIGHT: f32 = 240.0;

/// آنچه در بدنه کارت نمایش داده می‌شود
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body<'a> {
    Donut(&'a WidgetData),
    Progress(&'a WidgetData),
    Empty,
    /// عدد اصلی با حروف درشت و متن کامل زیر آن
    Headline { value: &'a str, caption: &'a str },
}

impl<'a> From<&'a Widget> for Body<'a> {
    fn from(widget: &'a Widget) -> Self {
        match &widget.kind {
            WidgetKind::Donut(data) => Body::Donut(data),
            WidgetKind::Progress(data) => Body::Progress(data),
            WidgetKind::Empty => Body::Empty,
            WidgetKind::Text => Body::Headline {
                value: data::chart::headline(&widget.text),
                caption: &widget.text,
            },
        }
    }
}

impl<'a> Body<'a> {
    fn view(self) -> Element<'a, Message> {
        match self {
            Body::Donut(data) => chart::donut::view(data),
            Body::Progress(data) => chart::progress::view(data),
            Body::Empty => center(chart::empty::view()).into(),
            Body::Headline { value, caption } => center(
                column![
                    text(value).size(36).font(style::BOLD),
                    text(caption).size(13),
                ]
                .spacing(6)
                .align_x(Alignment::Center),
            )
            .into(),
        }
    }
}

/// کارت یک ویجت با نوار عنوان و دکمه حذف
pub fn view<'a>(category: &'a CategoryId, widget: &'a Widget) -> Element<'a, Message> {
    let remove = button(icon_text(Icon::Close, 16))
        .padding([0, 6])
        .style(style::button::remove)
        .on_press(Message::RemoveWidget {
            category: category.clone(),
            widget: widget.id.clone(),
        });

    let title_bar = row![
        text(&widget.title).size(14).font(style::BOLD),
        space::horizontal(),
        tooltip(remove, Some("Remove widget"), Position::Left),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            title_bar,
            container(Body::from(widget).view())
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Alignment::Center),
        ]
        .spacing(12),
    )
    .padding(16)
    .width(CARD_WIDTH)
    .height(CARD_HEIGHT)
    .style(style::widget_card)
    .into()
}
