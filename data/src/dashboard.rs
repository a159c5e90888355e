use std::fmt;

use serde::Deserialize;

/// شناسه یکتای یک دسته (Category)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

/// شناسه یکتای یک ویجت در کل داده‌های داشبورد
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(CategoryId);
string_id!(WidgetId);

/// یک قلم داده در نمودار (برش دونات یا بخش نوار پیشرفت)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartItem {
    pub name: String,
    pub value: f64,
    /// رنگ نمایشی به صورت یک توکن متنی (مثلاً `#388E3C`)
    pub color: String,
    /// فیلدهای اضافی که تفسیر نمی‌شوند ولی حفظ می‌شوند
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChartItem {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// متن راهنمای نمودار به شکل `name (value)`
    pub fn legend_label(&self) -> String {
        format!("{} ({})", self.name, self.value)
    }
}

/// داده‌های نمودار یک ویجت: مقدار کل و اقلام به ترتیب ورودی
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetData {
    pub total: f64,
    #[serde(default)]
    pub items: Vec<ChartItem>,
}

/// نوع ویجت به همراه داده‌ای که آن نوع لازم دارد
///
/// نمودارهای دونات و پیشرفت بدون داده قابل ساختن نیستند.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    Donut(WidgetData),
    Progress(WidgetData),
    Empty,
    Text,
}

impl WidgetKind {
    pub fn tag(&self) -> &'static str {
        match self {
            WidgetKind::Donut(_) => "donut",
            WidgetKind::Progress(_) => "progress",
            WidgetKind::Empty => "empty",
            WidgetKind::Text => "text",
        }
    }
}

/// یک کاشی داشبورد
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawWidget")]
pub struct Widget {
    pub id: WidgetId,
    pub title: String,
    /// متن جایگزین که در حالت پیش‌فرض (متنی) نمایش داده می‌شود
    pub text: String,
    pub kind: WidgetKind,
}

impl Widget {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        kind: WidgetKind,
    ) -> Self {
        Self {
            id: WidgetId::new(id),
            title: title.into(),
            text: text.into(),
            kind,
        }
    }
}

/// شکل ذخیره‌شده ویجت در فایل JSON که `type` و `data` در آن جدا هستند
#[derive(Deserialize)]
struct RawWidget {
    id: WidgetId,
    title: String,
    #[serde(default)]
    text: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    data: Option<WidgetData>,
}

impl From<RawWidget> for Widget {
    fn from(raw: RawWidget) -> Self {
        let kind = match (raw.kind.as_deref(), raw.data) {
            (Some("donut"), Some(data)) => WidgetKind::Donut(data),
            (Some("progress"), Some(data)) => WidgetKind::Progress(data),
            (Some(kind @ ("donut" | "progress")), None) => {
                log::warn!(
                    "Widget {} is a {kind} chart without data, showing it as empty",
                    raw.id
                );
                WidgetKind::Empty
            }
            (Some("empty"), _) => WidgetKind::Empty,
            _ => WidgetKind::Text,
        };

        Widget {
            id: raw.id,
            title: raw.title,
            text: raw.text,
            kind,
        }
    }
}

/// گروهی نام‌دار و مرتب از ویجت‌ها
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            widgets,
        }
    }
}

/// ریشه داده‌های داشبورد: دسته‌ها به ترتیب نمایش
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl DashboardData {
    pub fn widget_count(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Widget {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn chart_kinds_carry_their_data() {
        let widget = parse(
            r##"{ "id": "w1", "title": "Cloud Accounts", "text": "", "type": "donut",
                 "data": { "total": 4, "items": [ { "name": "Connected", "value": 2, "color": "#5B8FF9" } ] } }"##,
        );

        let WidgetKind::Donut(data) = &widget.kind else {
            panic!("expected donut, got {:?}", widget.kind);
        };
        assert_eq!(data.total, 4.0);
        assert_eq!(data.items[0].legend_label(), "Connected (2)");
    }

    #[test]
    fn chart_without_data_becomes_empty() {
        let widget = parse(r#"{ "id": "w9", "title": "Broken", "type": "progress" }"#);
        assert_eq!(widget.kind, WidgetKind::Empty);
    }

    #[test]
    fn unknown_or_missing_type_is_text() {
        assert_eq!(
            parse(r#"{ "id": "a", "title": "A", "text": "12 hosts", "type": "gauge" }"#).kind,
            WidgetKind::Text
        );
        assert_eq!(parse(r#"{ "id": "b", "title": "B" }"#).kind, WidgetKind::Text);
    }

    #[test]
    fn empty_kind_ignores_data() {
        let widget = parse(
            r#"{ "id": "w3", "title": "Alerts", "type": "empty", "data": { "total": 1, "items": [] } }"#,
        );
        assert_eq!(widget.kind, WidgetKind::Empty);
    }

    #[test]
    fn extra_item_fields_are_kept() {
        let item: ChartItem = serde_json::from_str(
            r#"{ "name": "High", "value": 150, "color": "red", "severity": 3, "note": "x" }"#,
        )
        .unwrap();

        assert_eq!(item.extra.len(), 2);
        assert_eq!(item.extra["severity"], serde_json::json!(3));
        assert_eq!(item.legend_label(), "High (150)");
    }

    #[test]
    fn type_tags_map_to_kinds() {
        let json = r#"{ "id": "x", "title": "X", "type": "TAG",
                        "data": { "total": 1, "items": [] } }"#;

        for tag in ["donut", "progress", "empty", "text"] {
            let widget = parse(&json.replace("TAG", tag));
            assert_eq!(widget.kind.tag(), tag);
        }
    }

    #[test]
    fn dataset_parses_category_order() {
        let data: DashboardData = serde_json::from_str(
            r#"{ "categories": [
                { "id": "b", "name": "B", "widgets": [ { "id": "w2", "title": "Two" } ] },
                { "id": "a", "name": "A" } ] }"#,
        )
        .unwrap();

        assert_eq!(data.categories[0].id.as_str(), "b");
        assert!(data.categories[1].widgets.is_empty());
        assert_eq!(data.widget_count(), 1);
    }
}
