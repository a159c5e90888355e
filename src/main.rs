// غیرفعال کردن کنسول در ویندوز برای نسخه‌های ریلیز
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod chart; // نمایش‌دهنده‌های نمودار
mod logger; // سیستم ثبت وقایع (Log)
mod modal; // پنل‌های شناور
mod screen; // صفحه داشبورد
mod style; // استایل‌ها و آیکون‌ها
mod widget; // ویجت‌های کمکی رابط کاربری

use screen::dashboard::{self, Dashboard};

use iced::{Element, Size, Subscription, Task, keyboard};

fn main() {
    logger::setup(cfg!(debug_assertions)).expect("Failed to initialize logger");

    let _ = iced::application(Cloudboard::new, Cloudboard::update, Cloudboard::view)
        .settings(iced::Settings {
            antialiasing: true,
            default_text_size: iced::Pixels(13.0),
            ..Default::default()
        })
        .window(iced::window::Settings {
            size: Size::new(1360.0, 860.0),
            min_size: Some(Size::new(720.0, 480.0)),
            ..Default::default()
        })
        .title(Cloudboard::title)
        .theme(Cloudboard::theme)
        .scale_factor(Cloudboard::scale_factor)
        .subscription(Cloudboard::subscription)
        .run();
}

/// وضعیت کل برنامه
struct Cloudboard {
    dashboard: Dashboard,
    theme: data::Theme,
    ui_scale_factor: data::ScaleFactor,
}

#[derive(Debug, Clone)]
enum Message {
    Dashboard(dashboard::Message),
    GoBack, // کلید Esc
    DataFolderRequested,
}

impl Cloudboard {
    fn new() -> (Self, Task<Message>) {
        let settings = data::load_settings();
        let dataset = data::dataset::resolve(&settings);

        log::info!(
            "Starting with {} widgets in {} categories",
            dataset.widget_count(),
            dataset.categories.len()
        );

        let tabs = data::tab::TabTable::default().with_overrides(&settings.tabs);

        let state = Self {
            dashboard: Dashboard::new(data::Board::with_tabs(dataset, tabs)),
            theme: settings.theme,
            ui_scale_factor: settings.scale_factor,
        };

        (state, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dashboard(msg) => {
                if let Some(action) = self.dashboard.update(msg) {
                    match action {
                        dashboard::Action::OpenDataFolder => {
                            return Task::done(Message::DataFolderRequested);
                        }
                    }
                }
            }
            Message::GoBack => {
                self.dashboard.go_back();
            }
            Message::DataFolderRequested => {
                if let Err(err) = data::open_data_folder() {
                    log::error!("Failed to open data folder: {err}");
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        self.dashboard.view().map(Message::Dashboard)
    }

    fn theme(&self) -> iced_core::Theme {
        self.theme.clone().into()
    }

    /// عنوان پنجره همراه با تعداد ویجت‌های قابل مشاهده
    fn title(&self) -> String {
        format!("Cloudboard [{} widgets]", self.dashboard.board().visible_count())
    }

    fn scale_factor(&self) -> f32 {
        self.ui_scale_factor.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().filter_map(|event| {
            let keyboard::Event::KeyPressed { key, .. } = event else {
                return None;
            };
            match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::GoBack),
                _ => None,
            }
        })
    }
}
