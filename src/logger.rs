use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::mpsc,
    thread,
};

pub use data::log::Error;

// سقف اندازه فایل لاگ هر اجرا (50 مگابایت)
const MAX_LOG_FILE_SIZE: u64 = 50 * 1024 * 1024;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// پیام‌هایی که به ترد نویسنده لاگ فرستاده می‌شوند
enum LogMessage {
    Content(Vec<u8>),
    Flush,
    Shutdown,
}

/// راه‌اندازی لاگینگ برنامه
///
/// در حالت دیباگ خروجی به کنسول می‌رود و در غیر این صورت به فایل
/// `cloudboard-current.log` در پوشه داده‌ها. `RUST_LOG` سطح پیش‌فرض را تغییر می‌دهد.
pub fn setup(is_debug: bool) -> Result<(), Error> {
    // سطح پیش‌فرض: Debug در نسخه دیباگ و Info در نسخه ریلیز
    let default_level = if is_debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    // متغیر محیطی RUST_LOG در صورت وجود سطح را تعیین می‌کند
    let level_filter = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .map(str::parse::<log::Level>)
        .transpose()?
        .unwrap_or(default_level)
        .to_level_filter();

    // قالب هر خط: زمان محلی، سطح و متن پیام
    let mut io_sink = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}:{} -- {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            record.level(),
            message
        ));
    });

    if is_debug {
        // در حالت دیباگ، لاگ‌ها در کنسول نمایش داده می‌شوند
        io_sink = io_sink.chain(std::io::stdout());
    } else {
        // در حالت ریلیز، لاگ‌ها در فایل پوشه داده‌ها ذخیره می‌شوند
        let log_path = data::log::path()?;
        rotate(&log_path)?; // لاگ اجرای قبلی کنار گذاشته می‌شود

        let writer: Box<dyn Write + Send> = Box::new(BackgroundLogger::new(log_path)?);
        io_sink = io_sink.chain(writer);
    }

    // فقط کریت‌های برنامه با سطح انتخاب‌شده لاگ می‌گیرند
    fern::Dispatch::new()
        .level(log::LevelFilter::Off)
        .level_for("panic", log::LevelFilter::Error)
        .level_for("iced_wgpu", log::LevelFilter::Info)
        .level_for("cloudboard", level_filter)
        .level_for("cloudboard_data", level_filter)
        .chain(io_sink)
        .apply()?;

    Ok(())
}

/// لاگ اجرای قبلی جایگزین `cloudboard-previous.log` می‌شود
fn rotate(log_path: &Path) -> io::Result<()> {
    let previous = data::log::previous_path(log_path);

    // حذف فایل لاگ قبلی در صورت وجود
    if previous.exists() {
        fs::remove_file(&previous)?;
    }

    // تغییر نام فایل لاگ فعلی به فایل قبلی
    if log_path.exists() {
        fs::rename(log_path, &previous)?;
    }

    Ok(())
}

/// نوشتن لاگ در یک ترد جداگانه تا حلقه رابط کاربری منتظر دیسک نماند
struct BackgroundLogger {
    sender: mpsc::Sender<LogMessage>,       // ارسال‌کننده پیام به ترد لاگر
    _thread_handle: thread::JoinHandle<()>, // هندل ترد لاگر
}

impl BackgroundLogger {
    fn new(path: PathBuf) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel();

        let thread_handle = thread::Builder::new()
            .name("logger-thread".to_string())
            .spawn(move || {
                let mut file = match CappedFile::open(&path) {
                    Ok(file) => file,
                    Err(e) => {
                        eprintln!("Failed to open log file {}: {e}", path.display());
                        return;
                    }
                };

                // تا بسته شدن کانال یا دریافت Shutdown پیام‌ها پردازش می‌شوند
                while let Ok(message) = receiver.recv() {
                    let result = match message {
                        LogMessage::Content(data) => file.write_all(&data),
                        LogMessage::Flush => file.flush(),
                        LogMessage::Shutdown => break,
                    };

                    if let Err(e) = result {
                        eprintln!("Logging error: {e}");
                    }
                }

                // تخلیه بافر پیش از پایان ترد
                let _ = file.flush();
            })?;

        Ok(BackgroundLogger {
            sender,
            _thread_handle: thread_handle,
        })
    }

    fn send(&self, message: LogMessage) -> io::Result<()> {
        self.sender
            .send(message)
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "Logger thread disconnected"))
    }
}

impl Write for BackgroundLogger {
    /// ارسال داده برای نوشتن در فایل به صورت غیرهمزمان
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.send(LogMessage::Content(buf.to_vec()))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send(LogMessage::Flush)
    }
}

impl Drop for BackgroundLogger {
    /// ارسال سیگنال خاموشی به ترد لاگر هنگام حذف شیء
    fn drop(&mut self) {
        let _ = self.sender.send(LogMessage::Shutdown);
    }
}

/// فایل لاگی که پس از رسیدن به `MAX_LOG_FILE_SIZE` دیگر چیزی نمی‌پذیرد
struct CappedFile<W> {
    inner: W,
    written: u64,    // بایت‌های نوشته‌شده تا این لحظه، شامل محتوای قبلی فایل
    limit: u64,      // سقف اندازه فایل
    exhausted: bool, // پس از رسیدن به سقف، ورودی‌ها دور ریخته می‌شوند
}

impl CappedFile<fs::File> {
    fn open(path: &Path) -> io::Result<Self> {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        let written = file.metadata()?.len();

        Ok(Self::new(file, written, MAX_LOG_FILE_SIZE))
    }
}

impl<W: Write> CappedFile<W> {
    fn new(inner: W, written: u64, limit: u64) -> Self {
        Self {
            inner,
            written,
            limit,
            exhausted: false,
        }
    }
}

impl<W: Write> Write for CappedFile<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.exhausted {
            return Ok(buf.len());
        }

        // فقط یک بار اعلان رسیدن به سقف در فایل و stderr نوشته می‌شود
        if self.written + buf.len() as u64 > self.limit {
            self.exhausted = true;

            let notice = format!(
                "{}:WARN -- log file reached {} bytes, further output is dropped\n",
                chrono::Local::now().format(TIMESTAMP_FORMAT),
                self.limit
            );
            eprint!("{notice}");
            self.inner.write_all(notice.as_bytes())?;

            return Ok(buf.len());
        }

        let bytes = self.inner.write(buf)?;
        self.written += bytes as u64;

        Ok(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_file_stops_at_limit() {
        let mut file = CappedFile::new(Vec::new(), 0, 16);

        file.write_all(b"0123456789").unwrap();
        file.write_all(b"abcdefghij").unwrap();
        file.write_all(b"more").unwrap();

        let contents = String::from_utf8(file.inner).unwrap();
        assert!(contents.starts_with("0123456789"));
        assert!(!contents.contains("abcdefghij"));
        assert!(!contents.contains("more"));
        assert_eq!(contents.matches("further output is dropped").count(), 1);
    }

    #[test]
    fn capped_file_counts_existing_size() {
        let mut file = CappedFile::new(Vec::new(), 10, 12);

        file.write_all(b"abc").unwrap();
        assert!(file.exhausted);
    }

    #[test]
    fn rotation_moves_current_log_aside() {
        let dir = std::env::temp_dir().join(format!("cloudboard-rotate-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let current = dir.join("cloudboard-current.log");
        let previous = data::log::previous_path(&current);
        fs::write(&current, "old run").unwrap();
        fs::write(&previous, "older run").unwrap();

        rotate(&current).unwrap();

        assert!(!current.exists());
        assert_eq!(fs::read_to_string(&previous).unwrap(), "old run");

        fs::remove_dir_all(&dir).unwrap();
    }
}
