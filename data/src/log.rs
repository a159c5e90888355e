use std::path::PathBuf;
use std::{fs, io};

use crate::data_path;

const LOG_FILE: &str = "cloudboard-current.log";
const PREVIOUS_LOG_FILE: &str = "cloudboard-previous.log";

/// دریافت مسیر کامل فایل لاگ و اطمینان از وجود پوشه مربوطه
pub fn path() -> Result<PathBuf, Error> {
    let full_path = data_path(Some(LOG_FILE));

    let parent = full_path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid log file path"))?;

    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    Ok(full_path)
}

/// مسیر فایل لاگ اجرای قبلی، در کنار فایل لاگ فعلی
pub fn previous_path(current: &std::path::Path) -> PathBuf {
    current
        .parent()
        .map_or_else(|| PathBuf::from(PREVIOUS_LOG_FILE), |dir| dir.join(PREVIOUS_LOG_FILE))
}

/// انواع خطاهای مربوط به سیستم لاگینگ
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    SetLog(#[from] log::SetLoggerError),
    #[error(transparent)]
    ParseLevel(#[from] log::ParseLevelError),
}
