use data::WidgetData;
use data::chart::{item_color, progress_segments};
use iced::widget::canvas::{self, Canvas, Frame, Path};
use iced::widget::{Row, column, row, text};
use iced::{Alignment, Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::style;

const BAR_HEIGHT: f32 = 14.0;

/// نوار پیشرفت چندبخشی با مجموع در بالا و راهنمای افقی در پایین
pub fn view<'a, Message: 'a>(data: &'a WidgetData) -> Element<'a, Message> {
    let summary = row![
        text(data.total.to_string()).size(20).font(style::BOLD),
        text("Total Vulnerabilities").size(12),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let legend = Row::with_children(data.items.iter().map(super::legend_entry))
        .spacing(14)
        .wrap()
        .vertical_spacing(6);

    column![
        summary,
        Canvas::new(Bar { data })
            .width(Length::Fill)
            .height(BAR_HEIGHT),
        legend,
    ]
    .spacing(12)
    .into()
}

struct Bar<'a> {
    data: &'a WidgetData,
}

impl<Message> canvas::Program<Message> for Bar<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let palette = theme.extended_palette();
        let mut frame = Frame::new(renderer, bounds.size());

        let (width, height) = (frame.width(), frame.height());

        frame.fill(
            &Path::rounded_rectangle(Point::ORIGIN, Size::new(width, height), (height / 2.0).into()),
            palette.background.weak.color,
        );

        for (segment, item) in progress_segments(self.data).iter().zip(&self.data.items) {
            if segment.width <= 0.0 {
                continue;
            }

            // بخش‌ها از لبه نوار بیرون نمی‌زنند
            let x = (segment.start / 100.0 * width).min(width);
            let w = (segment.width / 100.0 * width).min(width - x);

            frame.fill_rectangle(Point::new(x, 0.0), Size::new(w, height), item_color(item));
        }

        vec![frame.into_geometry()]
    }
}
