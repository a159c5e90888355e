// نمایش‌دهنده‌های بدنه کارت ویجت‌ها
pub mod donut;
pub mod empty;
pub mod progress;

use data::ChartItem;
use iced::widget::{Column, container, row, text};
use iced::{Alignment, Element, Point, Vector};

use crate::style;

const SWATCH_SIZE: f32 = 10.0;

/// یک ردیف راهنمای نمودار: مربع رنگی و برچسب `name (value)`
pub fn legend_entry<'a, Message: 'a>(item: &'a ChartItem) -> Element<'a, Message> {
    let color = data::chart::item_color(item);

    row![
        container(Column::new())
            .width(SWATCH_SIZE)
            .height(SWATCH_SIZE)
            .style(move |theme| style::legend_swatch(theme, color)),
        text(item.legend_label()).size(12),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

/// نقطه‌ای روی دایره با شعاع `radius` در زاویه `degrees` (صفر در سمت راست، ساعتگرد)
fn point_at(center: Point, radius: f32, degrees: f32) -> Point {
    let angle = degrees.to_radians();
    center + Vector::new(radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn angles_run_clockwise_from_the_right() {
        let center = Point::new(50.0, 50.0);

        assert!(close(point_at(center, 10.0, 0.0), Point::new(60.0, 50.0)));
        assert!(close(point_at(center, 10.0, 90.0), Point::new(50.0, 60.0)));
        assert!(close(point_at(center, 10.0, -90.0), Point::new(50.0, 40.0)));
    }
}
