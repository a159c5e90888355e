use enum_map::{Enum, EnumMap, enum_map};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::dashboard::CategoryId;

/// زبانه‌های پنل افزودن ویجت، به ترتیب نمایش
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Enum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Cspm,
    Cwpp,
    Image,
    Ticket,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Cspm, Tab::Cwpp, Tab::Image, Tab::Ticket];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Cspm => "CSPM",
            Tab::Cwpp => "CWPP",
            Tab::Image => "Image",
            Tab::Ticket => "Ticket",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// جدول صریح نگاشت هر زبانه به دسته‌ای که فهرست آن را پر می‌کند
///
/// داده‌های نمونه دسته‌ای برای `Ticket` ندارند، پس این زبانه هم به `registry` اشاره می‌کند.
/// فیلد `tabs` در `config.json` می‌تواند هر ردیف را عوض کند.
#[derive(Debug, Clone)]
pub struct TabTable(EnumMap<Tab, CategoryId>);

impl Default for TabTable {
    fn default() -> Self {
        Self(enum_map! {
            Tab::Cspm => CategoryId::from("cspm"),
            Tab::Cwpp => CategoryId::from("cwpp"),
            Tab::Image => CategoryId::from("registry"),
            Tab::Ticket => CategoryId::from("registry"),
        })
    }
}

impl TabTable {
    pub fn category(&self, tab: Tab) -> &CategoryId {
        &self.0[tab]
    }

    /// جایگزین کردن دسته یک زبانه
    pub fn with(mut self, tab: Tab, category: CategoryId) -> Self {
        self.0[tab] = category;
        self
    }

    /// اعمال نگاشت‌های تنظیم‌شده کاربر روی جدول
    pub fn with_overrides(self, overrides: &FxHashMap<Tab, CategoryId>) -> Self {
        overrides.iter().fold(self, |table, (&tab, category)| {
            log::info!("Tab {tab} lists category {category}");
            table.with(tab, category.clone())
        })
    }
}
