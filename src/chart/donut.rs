use data::WidgetData;
use data::chart::{Arc, DONUT_INNER_RATIO, donut_arcs, item_color};
use iced::widget::canvas::{self, Canvas, Frame, Path, Stroke};
use iced::widget::{Column, column, container, row, text};
use iced::{Alignment, Element, Length, Point, Rectangle, Renderer, Theme, mouse};

use crate::style;

const RING_SIZE: f32 = 120.0;
// گام نمونه‌برداری کمان‌ها (درجه)
const ARC_STEP_DEGREES: f32 = 2.0;

/// نمودار حلقه‌ای: حلقه و مجموع در سمت چپ، راهنما در سمت راست
pub fn view<'a, Message: 'a>(data: &'a WidgetData) -> Element<'a, Message> {
    let ring = column![
        Canvas::new(Ring { data })
            .width(RING_SIZE)
            .height(RING_SIZE),
        text(data.total.to_string()).size(18).font(style::BOLD),
        text("Total").size(12),
    ]
    .spacing(2)
    .align_x(Alignment::Center);

    let legend = Column::with_children(data.items.iter().map(super::legend_entry)).spacing(6);

    row![
        container(ring).center_x(Length::FillPortion(1)),
        container(legend).width(Length::FillPortion(1)),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

struct Ring<'a> {
    data: &'a WidgetData,
}

impl<Message> canvas::Program<Message> for Ring<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let center = frame.center();
        let outer = (frame.width().min(frame.height()) / 2.0 - 1.0).max(0.0);
        let inner = outer * DONUT_INNER_RATIO;

        let arcs = donut_arcs(self.data);

        // بدون مقدار مثبت فقط مسیر خالی حلقه رسم می‌شود
        if arcs.iter().all(|arc| arc.sweep <= 0.0) {
            let palette = theme.extended_palette();

            frame.stroke(
                &Path::circle(center, (outer + inner) / 2.0),
                Stroke::default()
                    .with_width(outer - inner)
                    .with_color(palette.background.weak.color),
            );
        }

        for (arc, item) in arcs.iter().zip(&self.data.items) {
            if arc.sweep <= 0.0 {
                continue;
            }

            frame.fill(&sector(center, inner, outer, arc), item_color(item));
        }

        vec![frame.into_geometry()]
    }
}

/// مسیر بسته یک برش حلقه: کمان بیرونی ساعتگرد، سپس کمان داخلی برعکس
fn sector(center: Point, inner: f32, outer: f32, arc: &Arc) -> Path {
    let angles = sample_angles(arc);

    Path::new(|builder| {
        for (i, &angle) in angles.iter().enumerate() {
            let point = super::point_at(center, outer, angle);
            if i == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }

        for &angle in angles.iter().rev() {
            builder.line_to(super::point_at(center, inner, angle));
        }

        builder.close();
    })
}

/// زاویه‌های نمونه از ابتدا تا انتهای کمان، شامل هر دو سر
fn sample_angles(arc: &Arc) -> Vec<f32> {
    let steps = ((arc.sweep / ARC_STEP_DEGREES).ceil() as usize).max(1);

    (0..=steps)
        .map(|i| arc.start + arc.sweep * i as f32 / steps as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_cover_both_ends() {
        let arc = Arc {
            start: -90.0,
            sweep: 45.0,
        };
        let angles = sample_angles(&arc);

        assert_eq!(angles.first().copied(), Some(-90.0));
        assert!((angles.last().copied().unwrap() - arc.end()).abs() < 1e-4);
        assert!(angles.windows(2).all(|w| w[1] - w[0] <= ARC_STEP_DEGREES + 1e-4));
    }

    #[test]
    fn tiny_arc_still_has_two_points() {
        let arc = Arc {
            start: 0.0,
            sweep: 0.1,
        };
        assert_eq!(sample_angles(&arc).len(), 2);
    }
}
