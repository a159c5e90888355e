use std::sync::LazyLock;

use iced_core::Color;
use regex::Regex;

use crate::config::theme::hex_to_color;
use crate::dashboard::{ChartItem, WidgetData};

/// نسبت شعاع داخلی به شعاع خارجی حلقه دونات
pub const DONUT_INNER_RATIO: f32 = 0.625;
/// فاصله زاویه‌ای بین برش‌های دونات (درجه)
pub const DONUT_PAD_DEGREES: f32 = 2.0;
/// زاویه شروع اولین برش: بالای دایره، در جهت عقربه‌های ساعت
pub const DONUT_START_DEGREES: f32 = -90.0;

/// رنگ جایگزین برای توکن‌های رنگی که قابل تفسیر نیستند
pub const FALLBACK_COLOR: Color = Color::from_rgb(0.62, 0.65, 0.7);

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("valid number pattern"));

/// یک بخش از نوار پیشرفت، بر حسب درصد عرض نوار
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub width: f32,
}

/// یک برش دونات بر حسب درجه
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: f32,
    pub sweep: f32,
}

impl Arc {
    pub fn end(&self) -> f32 {
        self.start + self.sweep
    }
}

fn clamp_value(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// بخش‌های پیوسته نوار پیشرفت: عرض هر بخش `100 * value / total` درصد است
///
/// وقتی `total` صفر یا نامعتبر باشد همه بخش‌ها عرض صفر دارند.
pub fn progress_segments(data: &WidgetData) -> Vec<Segment> {
    let total = clamp_value(data.total);
    let mut start = 0.0_f32;

    data.items
        .iter()
        .map(|item| {
            let width = if total > 0.0 {
                (100.0 * clamp_value(item.value) / total) as f32
            } else {
                0.0
            };

            let segment = Segment { start, width };
            start += width;
            segment
        })
        .collect()
}

/// برش‌های دونات به ترتیب اقلام، متناسب با مجموع مقادیر
///
/// اقلام با مقدار صفر برشی با زاویه صفر می‌گیرند. با بیش از یک قلم، بعد از هر برش
/// `DONUT_PAD_DEGREES` فاصله قرار می‌گیرد.
pub fn donut_arcs(data: &WidgetData) -> Vec<Arc> {
    let sum: f64 = data.items.iter().map(|item| clamp_value(item.value)).sum();
    let count = data.items.len();

    let pad = if count > 1 { DONUT_PAD_DEGREES } else { 0.0 };
    let available = (360.0 - pad * count as f32).max(0.0);

    let mut start = DONUT_START_DEGREES;

    data.items
        .iter()
        .map(|item| {
            let sweep = if sum > 0.0 {
                (f64::from(available) * clamp_value(item.value) / sum) as f32
            } else {
                0.0
            };

            let arc = Arc { start, sweep };
            start += sweep + pad;
            arc
        })
        .collect()
}

/// رنگ نمایشی یک قلم؛ توکن‌های ناشناخته رنگ خنثی می‌گیرند
pub fn item_color(item: &ChartItem) -> Color {
    hex_to_color(&item.color).unwrap_or(FALLBACK_COLOR)
}

/// عدد اصلی ویجت متنی: اولین دنباله ارقام در متن، یا `"0"`
pub fn headline(text: &str) -> &str {
    FIRST_NUMBER.find(text).map_or("0", |m| m.as_str())
}
