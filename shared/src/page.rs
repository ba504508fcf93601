use log::{debug, warn};

use crate::achievements::{AchievementRecord, CategoryKey, Dataset};
use crate::error::ContentResult;
use crate::tabs::TabSelection;

/// The two cosmetic layers behind the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationLayer {
    Particles,
    Sphere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorationState {
    #[default]
    Loading,
    Active,
    /// Failed to start. The page carries on without it.
    Absent,
}

impl DecorationState {
    /// Turns the outcome of a layer's one-shot setup into a state, logging
    /// the failure instead of passing it on.
    pub fn settle<T>(layer: DecorationLayer, result: &ContentResult<T>) -> Self {
        match result {
            Ok(_) => DecorationState::Active,
            Err(e) => {
                warn!("{:?} layer disabled: {}", layer, e);
                DecorationState::Absent
            }
        }
    }
}

/// One tab button as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabView {
    pub key: CategoryKey,
    pub label: &'static str,
    pub active: bool,
}

/// Everything the home page renders that is not literal copy: the active
/// achievement tab and whether each decoration made it onto the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel<'a> {
    dataset: &'a Dataset,
    tabs: TabSelection,
    particles: DecorationState,
    sphere: DecorationState,
}

impl<'a> PageModel<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            tabs: TabSelection::new(dataset),
            particles: DecorationState::Loading,
            sphere: DecorationState::Loading,
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn current(&self) -> CategoryKey {
        self.tabs.current()
    }

    pub fn tabs(&self) -> Vec<TabView> {
        self.tabs
            .keys()
            .iter()
            .map(|&key| TabView {
                key,
                label: key.label(),
                active: self.tabs.is_active(key),
            })
            .collect()
    }

    pub fn select(&mut self, key: CategoryKey) -> bool {
        self.tabs.select(key)
    }

    /// Tab click coming from the DOM. Bad labels are dropped quietly.
    pub fn select_label(&mut self, label: &str) -> bool {
        match self.tabs.select_label(label) {
            Ok(changed) => changed,
            Err(e) => {
                debug!("{}", e);
                false
            }
        }
    }

    /// Records for the active tab, in display order. A category with no
    /// records yields an empty grid.
    pub fn visible_records(&self) -> &'a [AchievementRecord] {
        self.dataset.records_for(self.tabs.current()).unwrap_or(&[])
    }

    pub fn card_count(&self) -> usize {
        self.visible_records().len()
    }

    pub fn set_decoration(&mut self, layer: DecorationLayer, state: DecorationState) {
        match layer {
            DecorationLayer::Particles => self.particles = state,
            DecorationLayer::Sphere => self.sphere = state,
        }
    }

    pub fn decoration(&self, layer: DecorationLayer) -> DecorationState {
        match layer {
            DecorationLayer::Particles => self.particles,
            DecorationLayer::Sphere => self.sphere,
        }
    }

    /// True once both layers have failed; the hero then shows its plain
    /// gradient only.
    pub fn decorations_absent(&self) -> bool {
        self.particles == DecorationState::Absent && self.sphere == DecorationState::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;

    #[test]
    fn test_faculty_tab_shows_three_records_in_order() {
        let mut page = PageModel::new(Dataset::reference());
        assert!(page.select(CategoryKey::Faculty));
        assert_eq!(page.current(), CategoryKey::Faculty);
        let records = page.visible_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Dr. Jane Smith - IEEE Fellowship");
        assert_eq!(records[2].title, "Prof. Emily Johnson - Outstanding Teacher");
    }

    #[test]
    fn test_clicking_every_tab_in_sequence() {
        let mut page = PageModel::new(Dataset::reference());
        let counts: Vec<usize> = ["Department", "Faculty", "Students", "Research"]
            .iter()
            .map(|label| {
                page.select_label(label);
                assert_eq!(page.current().label(), *label);
                page.card_count()
            })
            .collect();
        assert_eq!(counts, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_exactly_one_tab_is_active() {
        let mut page = PageModel::new(Dataset::reference());
        page.select(CategoryKey::Students);
        let tabs = page.tabs();
        assert_eq!(tabs.len(), 4);
        let active: Vec<_> = tabs.iter().filter(|t| t.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Students");
    }

    #[test]
    fn test_unknown_label_keeps_current_tab() {
        let mut page = PageModel::new(Dataset::reference());
        assert!(!page.select_label("NotARealCategory"));
        assert_eq!(page.current(), CategoryKey::Department);
    }

    #[test]
    fn test_empty_category_renders_no_cards() {
        let dataset = Dataset::from_groups(vec![
            (CategoryKey::Department, Dataset::reference().records_for(CategoryKey::Department).unwrap().to_vec()),
            (CategoryKey::Research, Vec::new()),
        ]);
        let mut page = PageModel::new(&dataset);
        assert_eq!(page.card_count(), 3);
        assert!(page.select(CategoryKey::Research));
        assert_eq!(page.card_count(), 0);
        assert!(page.visible_records().is_empty());
    }

    #[test]
    fn test_failed_decorations_do_not_affect_tabs() {
        let mut page = PageModel::new(Dataset::reference());
        let failed: ContentResult<()> =
            Err(ContentError::DecorationUnavailable("no 2d context".to_string()));
        page.set_decoration(
            DecorationLayer::Particles,
            DecorationState::settle(DecorationLayer::Particles, &failed),
        );
        page.set_decoration(
            DecorationLayer::Sphere,
            DecorationState::settle(DecorationLayer::Sphere, &failed),
        );
        assert!(page.decorations_absent());

        for tab in page.tabs() {
            page.select(tab.key);
            assert_eq!(page.current(), tab.key);
            assert_eq!(page.card_count(), 3);
        }
        assert_eq!(page.tabs().len(), 4);
    }

    #[test]
    fn test_successful_decoration_is_active() {
        let mut page = PageModel::new(Dataset::reference());
        assert_eq!(page.decoration(DecorationLayer::Sphere), DecorationState::Loading);
        let ok: ContentResult<()> = Ok(());
        page.set_decoration(DecorationLayer::Sphere, DecorationState::settle(DecorationLayer::Sphere, &ok));
        assert_eq!(page.decoration(DecorationLayer::Sphere), DecorationState::Active);
        assert!(!page.decorations_absent());
    }
}
