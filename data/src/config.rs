use std::path::PathBuf;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::dashboard::CategoryId;
use crate::tab::Tab;
use crate::util::ok_or_default;

pub mod theme;

pub use theme::Theme;

pub const MIN_SCALE: f32 = 0.8;
pub const MAX_SCALE: f32 = 1.5;

/// ضریب مقیاس‌دهی رابط کاربری (UI Scale Factor)
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(from = "f32")]
pub struct ScaleFactor(f32);

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f32> for ScaleFactor {
    fn from(value: f32) -> Self {
        ScaleFactor(value.clamp(MIN_SCALE, MAX_SCALE))
    }
}

impl From<ScaleFactor> for f32 {
    fn from(value: ScaleFactor) -> Self {
        value.0
    }
}

/// تنظیمات برنامه که از `config.json` خوانده می‌شوند
///
/// این فایل فقط خوانده می‌شود؛ وضعیت ویجت‌ها هرگز روی دیسک ذخیره نمی‌شود.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "ok_or_default")]
    pub scale_factor: ScaleFactor,
    #[serde(deserialize_with = "ok_or_default")]
    pub theme: Theme,
    /// مسیر فایل داده‌های داشبورد؛ اگر خالی باشد `dashboard.json` در پوشه داده‌ها بررسی می‌شود
    #[serde(deserialize_with = "ok_or_default")]
    pub dataset: Option<PathBuf>,
    /// جایگزینی دسته هر زبانه پنل افزودن ویجت، مثلاً `{ "ticket": "tickets" }`
    #[serde(deserialize_with = "ok_or_default")]
    pub tabs: FxHashMap<Tab, CategoryId>,
}
