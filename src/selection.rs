//! Selection state for the feed screen.
//!
//! Three fields drive everything the screen derives: the selected city, the
//! first-run prompt flag and the active tab. Derived views (filtered posts,
//! visible treks) are recomputed from the catalog on every call.
use crate::catalog::{Catalog, Post};

/// Bottom navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    City,
    Trek,
}

impl Tab {
    /// Label shown on the bottom navigation button.
    pub fn label(self) -> &'static str {
        match self {
            Self::City => "City Posts",
            Self::Trek => "Trek Posts",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::City => Self::Trek,
            Self::Trek => Self::City,
        }
    }
}

/// Mutable selection owned by the app for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selected_city: Option<String>,
    show_city_prompt: bool,
    active_tab: Tab,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            selected_city: None,
            show_city_prompt: true,
            active_tab: Tab::City,
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a city. Also hides the first-run prompt in the same step.
    ///
    /// Any string is accepted; a city missing from the catalog simply has no
    /// treks and no posts. An empty string clears the selection.
    pub fn select_city(&mut self, city: &str) {
        self.selected_city = (!city.is_empty()).then(|| city.to_string());
        self.show_city_prompt = false;
    }

    /// Switch the bottom navigation tab. Does not change any derived view.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Raw first-run prompt flag.
    pub fn show_city_prompt(&self) -> bool {
        self.show_city_prompt
    }

    /// Whether the first-run modal should be drawn.
    pub fn prompt_visible(&self) -> bool {
        self.show_city_prompt && self.selected_city.is_none()
    }

    /// Posts for the selected city in catalog order, or every post when no
    /// city is selected.
    pub fn filtered_posts<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Post> {
        match self.selected_city.as_deref() {
            None => catalog.posts().iter().collect(),
            Some(city) => catalog.posts().iter().filter(|p| p.city == city).collect(),
        }
    }

    /// Treks for the selected city; empty when none is selected.
    pub fn visible_treks<'c>(&self, catalog: &'c Catalog) -> &'c [String] {
        match self.selected_city.as_deref() {
            Some(city) => catalog.treks_for(city),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn ids(posts: &[&Post]) -> Vec<u32> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn initial_state() {
        let sel = Selection::new();
        assert_eq!(sel.selected_city(), None);
        assert!(sel.show_city_prompt());
        assert!(sel.prompt_visible());
        assert_eq!(sel.active_tab(), Tab::City);
    }

    #[test]
    fn select_city_hides_prompt() {
        let mut sel = Selection::new();
        sel.select_city("Pune");
        assert_eq!(sel.selected_city(), Some("Pune"));
        assert!(!sel.show_city_prompt());
        assert!(!sel.prompt_visible());
    }

    #[test]
    fn select_city_is_idempotent() {
        let mut once = Selection::new();
        once.select_city("Manali");
        let mut twice = once.clone();
        twice.select_city("Manali");
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_city_clears_selection_but_keeps_prompt_hidden() {
        let mut sel = Selection::new();
        sel.select_city("Pune");
        sel.select_city("");
        assert_eq!(sel.selected_city(), None);
        assert!(!sel.prompt_visible());
    }

    #[test]
    fn empty_city_on_fresh_state_dismisses_prompt() {
        let mut sel = Selection::new();
        sel.select_city("");
        assert_eq!(sel.selected_city(), None);
        assert!(!sel.prompt_visible());
    }

    #[test]
    fn no_city_shows_every_post() {
        let catalog = Catalog::builtin();
        let sel = Selection::new();
        assert_eq!(ids(&sel.filtered_posts(&catalog)), vec![1, 2, 3, 4]);
        assert!(sel.visible_treks(&catalog).is_empty());
    }

    #[test]
    fn pune_shows_sinhagad_post() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        sel.select_city("Pune");

        let posts = sel.filtered_posts(&catalog);
        assert_eq!(ids(&posts), vec![1]);
        assert_eq!(posts[0].trek, "Sinhagad");
        assert_eq!(posts[0].likes, 120);
        assert_eq!(sel.visible_treks(&catalog), &["Sinhagad", "Rajgad", "Torna"]);
    }

    #[test]
    fn nashik_has_treks_but_no_posts() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        sel.select_city("Nashik");
        assert!(sel.filtered_posts(&catalog).is_empty());
        assert_eq!(sel.visible_treks(&catalog).len(), 3);
    }

    #[test]
    fn unknown_city_yields_empty_views() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        sel.select_city("Atlantis");
        assert_eq!(sel.selected_city(), Some("Atlantis"));
        assert!(sel.filtered_posts(&catalog).is_empty());
        assert!(sel.visible_treks(&catalog).is_empty());
    }

    #[test]
    fn tab_does_not_change_filtering() {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        sel.select_city("Manali");
        let before = ids(&sel.filtered_posts(&catalog));

        sel.set_active_tab(Tab::Trek);
        assert_eq!(sel.active_tab(), Tab::Trek);
        assert_eq!(ids(&sel.filtered_posts(&catalog)), before);
    }

    #[test]
    fn selecting_city_keeps_active_tab() {
        let mut sel = Selection::new();
        sel.set_active_tab(Tab::Trek);
        sel.select_city("Mumbai");
        assert_eq!(sel.active_tab(), Tab::Trek);
    }

    #[test]
    fn tab_labels() {
        assert_eq!(Tab::City.label(), "City Posts");
        assert_eq!(Tab::Trek.label(), "Trek Posts");
        assert_eq!(Tab::City.other(), Tab::Trek);
        assert_eq!(Tab::Trek.other(), Tab::City);
    }

    proptest! {
        #[test]
        fn filtered_posts_match_city(city in "(Mumbai|Pune|Nashik|Bangalore|Manali|[A-Za-z]{0,8})") {
            let catalog = Catalog::builtin();
            let mut sel = Selection::new();
            sel.select_city(&city);

            let got = ids(&sel.filtered_posts(&catalog));
            let expected: Vec<u32> = if city.is_empty() {
                catalog.posts().iter().map(|p| p.id).collect()
            } else {
                catalog.posts().iter().filter(|p| p.city == city).map(|p| p.id).collect()
            };
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn prompt_never_visible_after_selection(city in "[A-Za-z]{1,12}") {
            let mut sel = Selection::new();
            sel.select_city(&city);
            prop_assert!(!sel.prompt_visible());
        }

        #[test]
        fn visible_treks_match_catalog(idx in 0usize..5) {
            let catalog = Catalog::builtin();
            let city = catalog.cities()[idx].clone();
            let mut sel = Selection::new();
            sel.select_city(&city);
            prop_assert_eq!(sel.visible_treks(&catalog), catalog.treks_for(&city));
        }
    }
}
