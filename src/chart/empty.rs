use iced::widget::canvas::{self, Canvas, Frame, Path, Stroke};
use iced::widget::{column, text};
use iced::{Alignment, Element, Point, Rectangle, Renderer, Size, Theme, mouse};

const GLYPH_SIZE: f32 = 48.0;

// ارتفاع نسبی ستون‌های آیکون
const BARS: [f32; 3] = [0.45, 0.8, 0.6];

/// جایگزین ویجت‌هایی که داده نموداری ندارند
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    column![
        Canvas::new(Glyph).width(GLYPH_SIZE).height(GLYPH_SIZE),
        text("No Graph data available!").size(13),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

struct Glyph;

impl<Message> canvas::Program<Message> for Glyph {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let color = theme.extended_palette().background.strong.color;
        let mut frame = Frame::new(renderer, bounds.size());

        let (width, height) = (frame.width(), frame.height());
        let slot = width / BARS.len() as f32;
        let baseline = height - 2.0;

        for (i, ratio) in BARS.iter().enumerate() {
            let bar_height = baseline * ratio;
            frame.fill_rectangle(
                Point::new(slot * i as f32 + slot * 0.2, baseline - bar_height),
                Size::new(slot * 0.6, bar_height),
                color,
            );
        }

        frame.stroke(
            &Path::line(Point::new(0.0, baseline), Point::new(width, baseline)),
            Stroke::default().with_width(2.0).with_color(color),
        );

        vec![frame.into_geometry()]
    }
}
