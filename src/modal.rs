// پنل‌های شناور روی داشبورد
pub mod add_widget;

use iced::widget::{container, mouse_area, opaque, stack};
use iced::{Alignment, Color, Element, Length};

/// پنل کناری که از سمت راست روی صفحه قرار می‌گیرد
///
/// کلیک روی پس‌زمینه تیره `on_blur` را ارسال می‌کند؛ کلیک‌های درون پنل به پس‌زمینه نمی‌رسند.
pub fn side_panel_modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(
                container(opaque(content))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Alignment::End)
                    .style(|_theme| container::Style {
                        background: Some(
                            Color {
                                a: 0.4,
                                ..Color::BLACK
                            }
                            .into(),
                        ),
                        ..container::Style::default()
                    })
            )
            .on_press(on_blur)
        )
    ]
    .into()
}
