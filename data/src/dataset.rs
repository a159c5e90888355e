use std::path::{Path, PathBuf};

use crate::dashboard::{Category, ChartItem, DashboardData, Widget, WidgetData, WidgetKind};
use crate::{DATASET_PATH, Error, Settings, data_path, read_from_file};

/// بارگذاری داده‌های داشبورد از یک فایل JSON
pub fn load(path: &Path) -> Result<DashboardData, Error> {
    let data: DashboardData = read_from_file(path)?;

    log::info!(
        "Loaded {} widgets in {} categories from {}",
        data.widget_count(),
        data.categories.len(),
        path.display()
    );

    Ok(data)
}

/// مسیری که داده‌ها باید از آن خوانده شوند، اگر وجود داشته باشد
fn source(settings: &Settings) -> Option<PathBuf> {
    settings.dataset.clone().or_else(|| {
        let default = data_path(Some(DATASET_PATH));
        default.exists().then_some(default)
    })
}

/// تعیین داده‌های اولیه: فایل تنظیم‌شده، سپس `dashboard.json`، و در نهایت داده‌های نمونه
pub fn resolve(settings: &Settings) -> DashboardData {
    let Some(path) = source(settings) else {
        log::info!("No dataset file found, using the built-in sample");
        return sample();
    };

    match load(&path) {
        Ok(data) => data,
        Err(err) => {
            log::error!(
                "Failed to load dataset from {}: {err}. Using the built-in sample.",
                path.display()
            );
            sample()
        }
    }
}

fn items(entries: &[(&str, f64, &str)]) -> Vec<ChartItem> {
    entries
        .iter()
        .map(|&(name, value, color)| ChartItem::new(name, value, color))
        .collect()
}

/// داده‌های نمونه داخلی برنامه
pub fn sample() -> DashboardData {
    DashboardData {
        categories: vec![
            Category::new(
                "cspm",
                "CSPM Executive Dashboard",
                vec![
                    Widget::new(
                        "w1",
                        "Cloud Accounts",
                        "Connected (2), Not Connected (2)",
                        WidgetKind::Donut(WidgetData {
                            total: 4.0,
                            items: items(&[
                                ("Connected", 2.0, "#5B8FF9"),
                                ("Not Connected", 2.0, "#E3E8F0"),
                            ]),
                        }),
                    ),
                    Widget::new(
                        "w2",
                        "Cloud Account Risk Assessment",
                        "9659 total checks",
                        WidgetKind::Donut(WidgetData {
                            total: 9659.0,
                            items: items(&[
                                ("Failed", 1689.0, "#D32F2F"),
                                ("Warning", 681.0, "#FBC02D"),
                                ("Not available", 36.0, "#BDBDBD"),
                                ("Passed", 7253.0, "#388E3C"),
                            ]),
                        }),
                    ),
                ],
            ),
            Category::new(
                "cwpp",
                "CWPP Dashboard",
                vec![
                    Widget::new(
                        "w3",
                        "Top 5 Namespace Specific Alerts",
                        "No Graph data available!",
                        WidgetKind::Empty,
                    ),
                    Widget::new(
                        "w4",
                        "Workload Alerts",
                        "No Graph data available!",
                        WidgetKind::Empty,
                    ),
                ],
            ),
            Category::new(
                "registry",
                "Registry Scan",
                vec![
                    Widget::new(
                        "w5",
                        "Image Risk Assessment",
                        "1470 Total Vulnerabilities",
                        WidgetKind::Progress(WidgetData {
                            total: 1470.0,
                            items: items(&[
                                ("Critical", 9.0, "#8B0000"),
                                ("High", 150.0, "#FF4500"),
                                ("Medium", 612.0, "#FFA500"),
                                ("Low", 699.0, "#FFD54F"),
                            ]),
                        }),
                    ),
                    Widget::new(
                        "w6",
                        "Image Security Issues",
                        "2 Total Images",
                        WidgetKind::Progress(WidgetData {
                            total: 2.0,
                            items: items(&[("Critical", 1.0, "#8B0000"), ("High", 1.0, "#FF4500")]),
                        }),
                    ),
                    Widget::new(
                        "w7",
                        "Scanned Repositories",
                        "48 repositories scanned in the last 24 hours",
                        WidgetKind::Text,
                    ),
                ],
            ),
        ],
    }
}
