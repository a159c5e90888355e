use rustc_hash::FxHashSet;

use crate::dashboard::{Category, CategoryId, DashboardData, Widget, WidgetId};
use crate::tab::{Tab, TabTable};
use crate::util::contains_lowercase;

/// یک ویجت در فهرست مسطح همه ویجت‌ها، همراه با دسته‌ای که به آن تعلق دارد
#[derive(Debug, Clone, Copy)]
pub struct WidgetEntry<'a> {
    pub category_id: &'a CategoryId,
    pub category_name: &'a str,
    pub widget: &'a Widget,
}

/// دسته‌ای که پس از فیلتر جستجو و ویجت‌های پنهان هنوز ویجتی دارد
#[derive(Debug, Clone)]
pub struct CategoryView<'a> {
    pub category: &'a Category,
    pub widgets: Vec<&'a Widget>,
}

/// وضعیت کامل داشبورد
///
/// تمام تغییرات فقط از طریق متدهای همین ساختار انجام می‌شوند و نماها
/// (`all_widgets`، `filtered`) در هر بار نیاز از روی وضعیت فعلی ساخته می‌شوند.
#[derive(Debug, Clone)]
pub struct Board {
    data: DashboardData,
    search: String,
    hidden: FxHashSet<WidgetId>,
    selected_tab: Tab,
    modal_open: bool,
    tabs: TabTable,
}

impl Board {
    pub fn new(data: DashboardData) -> Self {
        Self::with_tabs(data, TabTable::default())
    }

    pub fn with_tabs(data: DashboardData, tabs: TabTable) -> Self {
        Self {
            data,
            search: String::new(),
            hidden: FxHashSet::default(),
            selected_tab: Tab::default(),
            modal_open: false,
            tabs,
        }
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_visible(&self, widget: &WidgetId) -> bool {
        !self.hidden.contains(widget)
    }

    /// حذف دائمی یک ویجت از دسته‌اش
    ///
    /// اگر دسته یا ویجت وجود نداشته باشد کاری انجام نمی‌شود. مجموعه ویجت‌های پنهان دست نمی‌خورد.
    pub fn remove_widget(&mut self, category_id: &CategoryId, widget_id: &WidgetId) -> bool {
        let Some(category) = self
            .data
            .categories
            .iter_mut()
            .find(|category| &category.id == category_id)
        else {
            log::debug!("remove_widget: no category {category_id}");
            return false;
        };

        let Some(index) = category
            .widgets
            .iter()
            .position(|widget| &widget.id == widget_id)
        else {
            log::debug!("remove_widget: no widget {widget_id} in {category_id}");
            return false;
        };

        let widget = category.widgets.remove(index);
        log::debug!(
            "Removed {} widget {widget_id} from {category_id}",
            widget.kind.tag()
        );
        true
    }

    /// نمایش یا پنهان کردن یک ویجت؛ تکرار همان درخواست اثری ندارد
    pub fn set_widget_visible(&mut self, widget_id: &WidgetId, visible: bool) -> bool {
        let changed = if visible {
            self.hidden.remove(widget_id)
        } else {
            self.hidden.insert(widget_id.clone())
        };

        if changed {
            log::debug!(
                "Widget {widget_id} is now {}",
                if visible { "visible" } else { "hidden" }
            );
        }
        changed
    }

    pub fn set_selected_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// همه ویجت‌ها به ترتیب داده‌ها، هر کدام با شناسه و نام دسته‌اش
    pub fn all_widgets(&self) -> Vec<WidgetEntry<'_>> {
        self.data
            .categories
            .iter()
            .flat_map(|category| {
                category.widgets.iter().map(move |widget| WidgetEntry {
                    category_id: &category.id,
                    category_name: &category.name,
                    widget,
                })
            })
            .collect()
    }

    /// ویجت‌هایی که در فهرست زبانه انتخاب‌شده پنل افزودن ویجت نمایش داده می‌شوند
    pub fn tab_entries(&self) -> Vec<WidgetEntry<'_>> {
        let category_id = self.tabs.category(self.selected_tab);

        self.all_widgets()
            .into_iter()
            .filter(|entry| entry.category_id == category_id)
            .collect()
    }

    /// دسته‌ها و ویجت‌های قابل نمایش بر اساس جستجو و مجموعه پنهان
    ///
    /// دسته‌هایی که ویجتی برایشان نمی‌ماند حذف می‌شوند و ترتیب اصلی حفظ می‌شود.
    pub fn filtered(&self) -> Vec<CategoryView<'_>> {
        let needle = self.search.to_lowercase();

        self.data
            .categories
            .iter()
            .filter_map(|category| {
                let widgets: Vec<&Widget> = category
                    .widgets
                    .iter()
                    .filter(|widget| self.is_visible(&widget.id))
                    .filter(|widget| contains_lowercase(&widget.title, &needle))
                    .collect();

                (!widgets.is_empty()).then_some(CategoryView { category, widgets })
            })
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.filtered().iter().map(|view| view.widgets.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    fn ids(views: &[CategoryView<'_>]) -> Vec<String> {
        views
            .iter()
            .flat_map(|view| view.widgets.iter().map(|w| w.id.to_string()))
            .collect()
    }

    fn category_ids(views: &[CategoryView<'_>]) -> Vec<String> {
        views
            .iter()
            .map(|view| view.category.id.to_string())
            .collect()
    }

    fn sample_board() -> Board {
        Board::new(dataset::sample())
    }

    #[test]
    fn empty_search_shows_everything() {
        let board = sample_board();

        assert_eq!(board.visible_count(), board.data().widget_count());
        assert_eq!(category_ids(&board.filtered()), ["cspm", "cwpp", "registry"]);
    }

    #[test]
    fn search_is_case_insensitive_and_drops_empty_categories() {
        let mut board = sample_board();
        board.set_search_term("Cloud");

        let filtered = board.filtered();
        assert_eq!(category_ids(&filtered), ["cspm"]);
        assert_eq!(ids(&filtered), ["w1", "w2"]);

        board.set_search_term("cLoUd");
        assert_eq!(ids(&board.filtered()), ["w1", "w2"]);
    }

    #[test]
    fn every_filtered_title_contains_the_term() {
        let mut board = sample_board();

        for term in ["a", "Image", "alerts", "RISK", "zzz"] {
            board.set_search_term(term);
            let needle = term.to_lowercase();

            for view in board.filtered() {
                assert!(!view.widgets.is_empty());
                for widget in view.widgets {
                    assert!(widget.title.to_lowercase().contains(&needle));
                }
            }
        }
    }

    #[test]
    fn hidden_widget_is_excluded_regardless_of_search() {
        let mut board = sample_board();
        let w1 = WidgetId::from("w1");

        assert!(board.set_widget_visible(&w1, false));
        board.set_search_term("Cloud");
        assert_eq!(ids(&board.filtered()), ["w2"]);

        assert!(board.set_widget_visible(&w1, true));
        assert_eq!(ids(&board.filtered()), ["w1", "w2"]);
    }

    #[test]
    fn visibility_toggle_is_idempotent() {
        let mut board = sample_board();
        let w3 = WidgetId::from("w3");

        assert!(board.set_widget_visible(&w3, false));
        assert!(!board.set_widget_visible(&w3, false));
        assert!(!board.is_visible(&w3));

        assert!(board.set_widget_visible(&w3, true));
        assert!(!board.set_widget_visible(&w3, true));
        assert!(board.is_visible(&w3));
    }

    #[test]
    fn hiding_every_widget_of_a_category_drops_it() {
        let mut board = sample_board();
        board.set_widget_visible(&WidgetId::from("w3"), false);
        board.set_widget_visible(&WidgetId::from("w4"), false);

        assert_eq!(category_ids(&board.filtered()), ["cspm", "registry"]);
    }

    #[test]
    fn remove_only_touches_the_named_category() {
        let mut board = sample_board();
        let before = board.data().clone();

        assert!(board.remove_widget(&CategoryId::from("cspm"), &WidgetId::from("w1")));

        let data = board.data();
        assert_eq!(data.categories[0].widgets.len(), before.categories[0].widgets.len() - 1);
        assert_eq!(data.categories[1], before.categories[1]);
        assert_eq!(data.categories[2], before.categories[2]);

        assert!(!board.remove_widget(&CategoryId::from("cspm"), &WidgetId::from("w1")));
        assert!(board.all_widgets().iter().all(|e| e.widget.id.as_str() != "w1"));
    }

    #[test]
    fn remove_with_unknown_ids_is_a_noop() {
        let mut board = sample_board();
        let before = board.data().clone();

        assert!(!board.remove_widget(&CategoryId::from("cspm"), &WidgetId::from("w99")));
        assert!(!board.remove_widget(&CategoryId::from("nope"), &WidgetId::from("w1")));
        // w3 exists but belongs to cwpp
        assert!(!board.remove_widget(&CategoryId::from("cspm"), &WidgetId::from("w3")));

        assert_eq!(board.data(), &before);
    }

    #[test]
    fn remove_leaves_hidden_set_alone() {
        let mut board = sample_board();
        let w2 = WidgetId::from("w2");

        board.set_widget_visible(&w2, false);
        board.remove_widget(&CategoryId::from("cspm"), &w2);

        assert!(!board.is_visible(&w2));
    }

    #[test]
    fn all_widgets_is_flat_and_ordered() {
        let board = sample_board();
        let entries = board.all_widgets();

        assert_eq!(entries.len(), board.data().widget_count());
        assert_eq!(entries[0].widget.id.as_str(), "w1");
        assert_eq!(entries[0].category_id.as_str(), "cspm");
        assert_eq!(entries[0].category_name, "CSPM Executive Dashboard");

        let last = entries.last().unwrap();
        assert_eq!(last.category_id.as_str(), "registry");
    }

    #[test]
    fn all_widgets_includes_hidden_ones() {
        let mut board = sample_board();
        board.set_widget_visible(&WidgetId::from("w1"), false);

        assert_eq!(board.all_widgets().len(), board.data().widget_count());
    }

    #[test]
    fn ticket_tab_lists_the_same_widgets_as_image() {
        let mut board = sample_board();

        board.set_selected_tab(Tab::Image);
        let image: Vec<_> = board
            .tab_entries()
            .iter()
            .map(|e| e.widget.id.clone())
            .collect();

        board.set_selected_tab(Tab::Ticket);
        let ticket: Vec<_> = board
            .tab_entries()
            .iter()
            .map(|e| e.widget.id.clone())
            .collect();

        assert!(!image.is_empty());
        assert_eq!(image, ticket);
    }

    #[test]
    fn remapped_ticket_tab_lists_its_own_category() {
        let mut data = dataset::sample();
        data.categories.push(Category::new(
            "tickets",
            "Tickets",
            vec![Widget::new("t1", "Open Tickets", "12 open", crate::WidgetKind::Text)],
        ));

        let tabs = TabTable::default().with(Tab::Ticket, CategoryId::from("tickets"));
        let mut board = Board::with_tabs(data, tabs);
        board.set_selected_tab(Tab::Ticket);

        let ids: Vec<_> = board
            .tab_entries()
            .iter()
            .map(|e| e.widget.id.to_string())
            .collect();
        assert_eq!(ids, ["t1"]);
    }

    #[test]
    fn cspm_tab_lists_cspm_widgets() {
        let board = sample_board();
        let entries = board.tab_entries();

        assert_eq!(board.selected_tab(), Tab::Cspm);
        assert!(entries.iter().all(|e| e.category_id.as_str() == "cspm"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn modal_flag_toggles() {
        let mut board = sample_board();
        assert!(!board.is_modal_open());

        board.open_modal();
        assert!(board.is_modal_open());

        board.close_modal();
        assert!(!board.is_modal_open());
    }
}
