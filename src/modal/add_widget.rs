use data::board::WidgetEntry;
use data::{Board, Tab, WidgetId};
use iced::widget::{
    Column, Row, button, checkbox, column, container, row, rule, space, text,
    tooltip::Position,
};
use iced::{Alignment, Element, Length};

use crate::style::{self, Icon, icon_text};
use crate::widget::{scrollable_content, tooltip};

const PANEL_WIDTH: f32 = 480.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TabSelected(Tab),
    Toggled(WidgetId, bool),
    Confirm,
    Cancel,
}

/// پنل «افزودن ویجت»: زبانه‌ها، فهرست ویجت‌های دسته انتخاب‌شده و دکمه‌های پایین
///
/// هر تیک مستقیماً وضعیت نمایش ویجت را تغییر می‌دهد؛ تایید و انصراف فقط پنل را می‌بندند.
pub fn view(board: &Board) -> Element<'_, Message> {
    let header = container(
        row![
            text("Add Widget").size(15).font(style::BOLD),
            space::horizontal(),
            tooltip(
                button(icon_text(Icon::Close, 16))
                    .style(style::button::remove)
                    .on_press(Message::Cancel),
                Some("Close"),
                Position::Left,
            ),
        ]
        .align_y(Alignment::Center),
    )
    .padding([10, 16])
    .style(style::modal_header);

    let intro = text("Personalise your dashboard by adding the following widget").size(13);

    let entries = board.tab_entries();
    let list: Element<'_, Message> = if entries.is_empty() {
        container(text("No widgets in this category").size(13))
            .padding(8)
            .into()
    } else {
        Column::with_children(entries.into_iter().map(|entry| entry_row(board, entry)))
            .spacing(8)
            .into()
    };

    let footer = row![
        space::horizontal(),
        button(text("Cancel"))
            .padding([6, 16])
            .style(style::button::cancel)
            .on_press(Message::Cancel),
        button(text("Confirm"))
            .padding([6, 16])
            .style(style::button::confirm)
            .on_press(Message::Confirm),
    ]
    .spacing(8)
    .padding(16);

    container(column![
        header,
        column![
            intro,
            column![tab_strip(board.selected_tab()), rule::horizontal(1.0)],
            scrollable_content(list),
        ]
        .spacing(12)
        .padding(16)
        .height(Length::Fill),
        rule::horizontal(1.0),
        footer,
    ])
    .width(PANEL_WIDTH)
    .height(Length::Fill)
    .style(style::dashboard_modal)
    .into()
}

fn tab_strip<'a>(selected: Tab) -> Element<'a, Message> {
    Row::with_children(Tab::ALL.iter().map(|&tab| {
        button(text(tab.label()).size(13))
            .padding([6, 14])
            .style(move |theme, status| style::button::tab(theme, status, tab == selected))
            .on_press(Message::TabSelected(tab))
            .into()
    }))
    .spacing(4)
    .into()
}

fn entry_row<'a>(board: &Board, entry: WidgetEntry<'a>) -> Element<'a, Message> {
    let id = entry.widget.id.clone();

    container(
        checkbox(board.is_visible(&entry.widget.id))
            .label(entry.widget.title.as_str())
            .on_toggle(move |checked| Message::Toggled(id.clone(), checked)),
    )
    .padding(8)
    .width(Length::Fill)
    .style(style::modal_container)
    .into()
}
