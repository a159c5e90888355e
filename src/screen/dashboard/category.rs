use data::board::CategoryView;
use iced::widget::{Row, button, center, column, row, text};
use iced::Element;

use super::{Message, card};
use crate::style::{self, Icon, icon_text};

/// یک بخش دسته: عنوان، کارت‌های ویجت و کاشی «افزودن ویجت» در انتها
pub fn view(view: CategoryView<'_>) -> Element<'_, Message> {
    let category = view.category;

    let cards = view
        .widgets
        .into_iter()
        .map(|widget| card::view(&category.id, widget));

    let grid = Row::with_children(cards)
        .push(add_tile())
        .spacing(16)
        .wrap()
        .vertical_spacing(16);

    column![text(&category.name).size(15).font(style::BOLD), grid]
        .spacing(10)
        .into()
}

fn add_tile<'a>() -> Element<'a, Message> {
    button(center(
        row![icon_text(Icon::Plus, 16), text("Add Widget").size(14)].spacing(6),
    ))
    .width(card::CARD_WIDTH)
    .height(card::CARD_HEIGHT)
    .style(style::button::add_tile)
    .on_press(Message::AddWidgetRequested)
    .into()
}
