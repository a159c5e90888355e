// ماژول‌های کریت داده: مدل داشبورد، وضعیت، بارگذاری داده‌ها و تنظیمات
pub mod board;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod log;
pub mod tab;
pub mod util;

pub use board::Board;
pub use config::{ScaleFactor, Settings, theme::Theme};
pub use dashboard::{
    Category, CategoryId, ChartItem, DashboardData, Widget, WidgetData, WidgetId, WidgetKind,
};
pub use tab::Tab;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH: &str = "config.json";
pub const DATASET_PATH: &str = "dashboard.json";

/// متغیر محیطی برای تغییر مسیر پوشه داده‌ها
pub const DATA_PATH_ENV: &str = "CLOUDBOARD_DATA_PATH";

/// خطاهای مربوط به خواندن فایل‌های پیکربندی و داده
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// مسیر پوشه داده‌های برنامه (یا یک فایل درون آن)
pub fn data_path(path_name: Option<&str>) -> PathBuf {
    let base = match std::env::var_os(DATA_PATH_ENV) {
        Some(path) => PathBuf::from(path),
        None => dirs_next::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cloudboard"),
    };

    match path_name {
        Some(name) => base.join(name),
        None => base,
    }
}

/// خواندن و دی‌سریال‌سازی یک فایل JSON
pub fn read_from_file<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// بارگذاری تنظیمات از `config.json`؛ در صورت خطا مقادیر پیش‌فرض برگردانده می‌شوند
pub fn load_settings() -> Settings {
    let path = data_path(Some(CONFIG_PATH));

    match read_from_file(&path) {
        Ok(settings) => settings,
        Err(Error::NotFound(_)) => {
            ::log::info!("No config at {}, using defaults", path.display());
            Settings::default()
        }
        Err(err) => {
            ::log::error!("Failed to load config: {err}. Using defaults.");
            Settings::default()
        }
    }
}

/// باز کردن پوشه داده‌ها در مدیر فایل سیستم‌عامل
pub fn open_data_folder() -> Result<(), Error> {
    let path = data_path(None);

    if !path.exists() {
        fs::create_dir_all(&path)?;
    }

    open::that(&path)?;
    ::log::info!("Opened data folder: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let path = std::env::temp_dir().join("cloudboard-definitely-missing.json");
        let result: Result<Settings, Error> = read_from_file(&path);

        assert!(matches!(result, Err(Error::NotFound(p)) if p == path));
    }

    #[test]
    fn reads_json_file() {
        let path = std::env::temp_dir().join(format!(
            "cloudboard-read-test-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "scale_factor": 1.2 }"#).unwrap();

        let settings: Settings = read_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(f32::from(settings.scale_factor), 1.2);
    }
}
