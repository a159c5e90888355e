pub mod card;
pub mod category;

use data::{Board, CategoryId, Tab, WidgetId};
use iced::widget::{Column, button, column, container, row, space, text, text_input};
use iced::widget::tooltip::Position;
use iced::{Alignment, Element, Length};

use crate::modal::{self, add_widget};
use crate::style::{self, Icon, icon_text};
use crate::widget::{button_with_tooltip, scrollable_content, tooltip};

/// صفحه اصلی داشبورد که وضعیت آن در یک `data::Board` نگه داشته می‌شود
pub struct Dashboard {
    board: Board,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    SearchCleared,
    RemoveWidget {
        category: CategoryId,
        widget: WidgetId,
    },
    AddWidgetRequested,
    ModalClosed,
    TabSelected(Tab),
    VisibilityToggled(WidgetId, bool),
    DataFolderRequested,
    AddWidget(add_widget::Message),
}

/// کارهایی که خارج از داشبورد باید انجام شوند
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenDataFolder,
}

impl Dashboard {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn update(&mut self, message: Message) -> Option<Action> {
        match message {
            Message::SearchChanged(term) => self.board.set_search_term(term),
            Message::SearchCleared => self.board.set_search_term(String::new()),
            Message::RemoveWidget { category, widget } => {
                self.board.remove_widget(&category, &widget);
            }
            Message::AddWidgetRequested => self.board.open_modal(),
            Message::ModalClosed => self.board.close_modal(),
            Message::TabSelected(tab) => self.board.set_selected_tab(tab),
            Message::VisibilityToggled(widget, visible) => {
                self.board.set_widget_visible(&widget, visible);
            }
            Message::DataFolderRequested => return Some(Action::OpenDataFolder),
            Message::AddWidget(msg) => {
                return self.update(match msg {
                    add_widget::Message::TabSelected(tab) => Message::TabSelected(tab),
                    add_widget::Message::Toggled(widget, visible) => {
                        Message::VisibilityToggled(widget, visible)
                    }
                    add_widget::Message::Confirm | add_widget::Message::Cancel => {
                        Message::ModalClosed
                    }
                });
            }
        }

        None
    }

    /// پاسخ به کلید Esc: ابتدا پنل باز بسته می‌شود، سپس جستجو پاک می‌شود
    ///
    /// اگر کاری برای انجام نبود `false` برمی‌گرداند.
    pub fn go_back(&mut self) -> bool {
        if self.board.is_modal_open() {
            self.board.close_modal();
            true
        } else if !self.board.search_term().is_empty() {
            self.board.set_search_term(String::new());
            true
        } else {
            false
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let categories = self.board.filtered();

        let body: Element<'_, Message> = if categories.is_empty() {
            container(text("No widgets match your search").size(14))
                .center_x(Length::Fill)
                .padding(40)
                .into()
        } else {
            Column::with_children(categories.into_iter().map(category::view))
                .spacing(24)
                .padding(20)
                .into()
        };

        let base = column![self.header(), scrollable_content(body)];

        if self.board.is_modal_open() {
            modal::side_panel_modal(
                base,
                add_widget::view(&self.board).map(Message::AddWidget),
                Message::ModalClosed,
            )
        } else {
            base.into()
        }
    }

    fn header(&self) -> Element<'_, Message> {
        let term = self.board.search_term();

        let mut search = row![
            icon_text(Icon::Search, 14),
            text_input("Search anything...", term)
                .on_input(Message::SearchChanged)
                .padding(6)
                .width(320)
                .style(style::search_input),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        if !term.is_empty() {
            search = search.push(tooltip(
                button(icon_text(Icon::Close, 14))
                    .style(style::button::remove)
                    .on_press(Message::SearchCleared),
                Some("Clear search"),
                Position::Bottom,
            ));
        }

        let title = column![
            text("Home > Dashboard V2").size(11),
            text("CNAPP Dashboard").size(18).font(style::BOLD),
        ]
        .spacing(2);

        container(
            row![
                title,
                space::horizontal(),
                search,
                button(row![icon_text(Icon::Plus, 14), text("Add Widget")].spacing(4))
                    .padding([6, 12])
                    .style(style::button::transparent)
                    .on_press(Message::AddWidgetRequested),
                button_with_tooltip(
                    text("Open data folder"),
                    Message::DataFolderRequested,
                    Some("Config, dataset and logs live here"),
                    Position::Bottom,
                    style::button::transparent,
                ),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .padding([12, 20])
        .width(Length::Fill)
        .style(style::header)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::new(Board::new(data::dataset::sample()))
    }

    #[test]
    fn search_flows_into_board() {
        let mut dashboard = dashboard();

        dashboard.update(Message::SearchChanged("Cloud".to_string()));
        assert_eq!(dashboard.board().visible_count(), 2);

        dashboard.update(Message::SearchCleared);
        assert_eq!(dashboard.board().search_term(), "");
    }

    #[test]
    fn confirm_and_cancel_only_close_the_panel() {
        let mut dashboard = dashboard();
        let w1 = WidgetId::from("w1");

        dashboard.update(Message::AddWidgetRequested);
        dashboard.update(Message::AddWidget(add_widget::Message::Toggled(w1.clone(), false)));
        dashboard.update(Message::AddWidget(add_widget::Message::Cancel));

        assert!(!dashboard.board().is_modal_open());
        assert!(!dashboard.board().is_visible(&w1));

        dashboard.update(Message::AddWidgetRequested);
        dashboard.update(Message::AddWidget(add_widget::Message::Confirm));
        assert!(!dashboard.board().is_modal_open());
        assert!(!dashboard.board().is_visible(&w1));
    }

    #[test]
    fn panel_tab_selection_updates_board() {
        let mut dashboard = dashboard();

        dashboard.update(Message::AddWidget(add_widget::Message::TabSelected(Tab::Cwpp)));
        assert_eq!(dashboard.board().selected_tab(), Tab::Cwpp);
    }

    #[test]
    fn remove_from_card() {
        let mut dashboard = dashboard();

        dashboard.update(Message::RemoveWidget {
            category: CategoryId::from("registry"),
            widget: WidgetId::from("w7"),
        });

        assert_eq!(dashboard.board().data().widget_count(), 6);
    }

    #[test]
    fn data_folder_is_delegated() {
        let mut dashboard = dashboard();

        assert_eq!(
            dashboard.update(Message::DataFolderRequested),
            Some(Action::OpenDataFolder)
        );
    }

    #[test]
    fn escape_closes_panel_then_clears_search() {
        let mut dashboard = dashboard();

        dashboard.update(Message::SearchChanged("image".to_string()));
        dashboard.update(Message::AddWidgetRequested);

        assert!(dashboard.go_back());
        assert!(!dashboard.board().is_modal_open());
        assert_eq!(dashboard.board().search_term(), "image");

        assert!(dashboard.go_back());
        assert_eq!(dashboard.board().search_term(), "");

        assert!(!dashboard.go_back());
    }
}
