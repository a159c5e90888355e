use iced::font::Weight;
use iced::widget::Text;
use iced::widget::container::Style;
use iced::widget::scrollable::{AutoScroll, Rail, Scroller};
use iced::{Border, Color, Font, Renderer, Shadow, Theme, widget};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// آیکون‌های رابط کاربری که با کاراکترهای یونیکد فونت پیش‌فرض رسم می‌شوند
pub enum Icon {
    Close,  // بستن / حذف
    Plus,   // افزودن
    Search, // جستجو
}

impl From<Icon> for char {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Close => '\u{00D7}',
            Icon::Plus => '+',
            Icon::Search => '\u{2315}',
        }
    }
}

/// ایجاد یک ویجت متن حاوی آیکون
pub fn icon_text<'a>(icon: Icon, size: u16) -> Text<'a, Theme, Renderer> {
    iced::widget::text(char::from(icon).to_string()).size(iced::Pixels(size.into()))
}

fn card_color(theme: &Theme) -> Color {
    let palette = theme.extended_palette();

    if palette.is_dark {
        palette.background.weak.color
    } else {
        Color::WHITE
    }
}

/// استایل مربوط به تولتیپ‌ها (Tooltip)
pub fn tooltip(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        text_color: Some(palette.background.base.text),
        background: Some(card_color(theme).into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub mod button {
    use iced::{
        Border, Color, Theme,
        widget::button::{Status, Style},
    };

    /// استایل دکمه تایید
    pub fn confirm(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: palette.primary.base.text,
            background: Some(
                match status {
                    Status::Hovered => palette.primary.strong.color,
                    Status::Pressed => palette.primary.weak.color,
                    Status::Active | Status::Disabled => palette.primary.base.color,
                }
                .into(),
            ),
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// استایل دکمه انصراف
    pub fn cancel(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: palette.primary.base.color,
            background: match status {
                Status::Hovered | Status::Pressed => {
                    Some(palette.primary.base.color.scale_alpha(0.08).into())
                }
                Status::Active | Status::Disabled => None,
            },
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: palette.primary.base.color,
            },
            ..Default::default()
        }
    }

    /// استایل دکمه شفاف
    pub fn transparent(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: palette.background.base.text,
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: palette.background.strong.color,
            },
            background: match status {
                Status::Pressed => Some(palette.background.strong.color.into()),
                Status::Hovered => Some(palette.background.weak.color.into()),
                Status::Active | Status::Disabled => Some(super::card_color(theme).into()),
            },
            ..Default::default()
        }
    }

    /// دکمه حذف ویجت (×) در نوار عنوان کارت
    pub fn remove(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: match status {
                Status::Hovered | Status::Pressed => palette.danger.base.color,
                Status::Active | Status::Disabled => palette.background.strongest.color,
            },
            background: match status {
                Status::Hovered => Some(palette.danger.base.color.scale_alpha(0.1).into()),
                _ => None,
            },
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// زبانه‌های پنل افزودن ویجت؛ زبانه انتخاب‌شده خط زیرین پررنگ دارد
    pub fn tab(theme: &Theme, status: Status, is_selected: bool) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: if is_selected {
                palette.primary.base.color
            } else {
                palette.background.base.text
            },
            background: match status {
                Status::Hovered | Status::Pressed => Some(palette.background.weak.color.into()),
                Status::Active | Status::Disabled => Some(Color::TRANSPARENT.into()),
            },
            border: Border {
                radius: 0.0.into(),
                width: if is_selected { 2.0 } else { 0.0 },
                color: palette.primary.base.color,
            },
            ..Default::default()
        }
    }

    /// کاشی «افزودن ویجت» در انتهای هر دسته
    pub fn add_tile(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        let border_color = match status {
            Status::Hovered | Status::Pressed => palette.primary.base.color,
            Status::Active | Status::Disabled => palette.background.strong.color,
        };

        Style {
            text_color: palette.background.strongest.color,
            background: Some(super::card_color(theme).scale_alpha(0.6).into()),
            border: Border {
                radius: 12.0.into(),
                width: 1.0,
                color: border_color,
            },
            ..Default::default()
        }
    }
}

/// استایل کارت هر ویجت
pub fn widget_card(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        text_color: Some(palette.background.base.text),
        background: Some(card_color(theme).into()),
        border: Border {
            width: 1.0,
            color: palette.background.weak.color,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            offset: iced::Vector { x: 0.0, y: 1.0 },
            blur_radius: 4.0,
            color: Color::BLACK.scale_alpha(if palette.is_dark { 0.4 } else { 0.08 }),
        },
        ..Default::default()
    }
}

/// استایل نوار بالای صفحه
pub fn header(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(card_color(theme).into()),
        border: Border {
            width: 1.0,
            color: palette.background.weak.color,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// استایل پنل کناری افزودن ویجت
pub fn dashboard_modal(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        text_color: Some(palette.background.base.text),
        background: Some(card_color(theme).into()),
        border: Border {
            width: 1.0,
            color: palette.background.weak.color,
            radius: 0.0.into(),
        },
        shadow: Shadow {
            offset: iced::Vector { x: 0.0, y: 0.0 },
            blur_radius: 20.0,
            color: Color::BLACK.scale_alpha(if palette.is_dark { 0.8 } else { 0.3 }),
        },
        ..Default::default()
    }
}

/// سربرگ پنل کناری
pub fn modal_header(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        text_color: Some(palette.primary.base.text),
        background: Some(palette.primary.base.color.into()),
        ..Default::default()
    }
}

/// استایل کانتینر ردیف‌های مودال
pub fn modal_container(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        text_color: Some(palette.background.base.text),
        background: Some(card_color(theme).into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// مربع رنگی کنار هر مورد در راهنمای نمودار
pub fn legend_swatch(theme: &Theme, color: Color) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(color.into()),
        border: Border {
            width: 1.0,
            color: palette.background.weak.color,
            radius: 2.0.into(),
        },
        snap: true,
        ..Default::default()
    }
}

/// استایل جعبه جستجو
pub fn search_input(
    theme: &Theme,
    status: widget::text_input::Status,
) -> widget::text_input::Style {
    let palette = theme.extended_palette();

    let (background, border_color) = match status {
        widget::text_input::Status::Active => {
            (palette.background.weakest.color, palette.background.strong.color)
        }
        widget::text_input::Status::Hovered => {
            (palette.background.weakest.color, palette.background.strongest.color)
        }
        widget::text_input::Status::Focused { .. } | widget::text_input::Status::Disabled => {
            (card_color(theme), palette.primary.base.color)
        }
    };

    widget::text_input::Style {
        background: background.into(),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color,
        },
        icon: palette.background.strong.text,
        placeholder: palette.background.strongest.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

// استایل‌های مربوط به اسکرول‌بار (Scrollable)
pub fn scroll_bar(theme: &Theme, status: widget::scrollable::Status) -> widget::scrollable::Style {
    let palette = theme.extended_palette();

    let scroller_bg = match status {
        widget::scrollable::Status::Hovered { .. } | widget::scrollable::Status::Dragged { .. } => {
            palette.background.strongest.color
        }
        _ => palette.background.strong.color,
    };

    let rail = Rail {
        background: None,
        border: Border {
            radius: 2.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        scroller: Scroller {
            background: iced::Background::Color(scroller_bg),
            border: Border {
                radius: 2.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
        },
    };

    let auto_scroll = AutoScroll {
        background: iced::Background::Color(palette.background.weakest.color),
        border: Border {
            radius: 2.0.into(),
            width: 1.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::TRANSPARENT,
            ..Default::default()
        },
        icon: palette.background.strong.color,
    };

    widget::scrollable::Style {
        container: Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll,
    }
}
