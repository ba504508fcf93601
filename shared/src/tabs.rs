use log::debug;

use crate::achievements::{CategoryKey, Dataset};
use crate::error::{ContentError, ContentResult};

/// Which achievement category is on screen. Lives as long as the page that
/// owns it; only tab clicks move it.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSelection {
    keys: Vec<CategoryKey>,
    current: CategoryKey,
}

impl TabSelection {
    /// Starts on the dataset's first category. An empty dataset falls back to
    /// the first declared key so there is always something to highlight.
    pub fn new(dataset: &Dataset) -> Self {
        let keys = dataset.categories();
        let current = keys.first().copied().unwrap_or(CategoryKey::Department);
        Self { keys, current }
    }

    pub fn current(&self) -> CategoryKey {
        self.current
    }

    pub fn keys(&self) -> &[CategoryKey] {
        &self.keys
    }

    pub fn is_active(&self, key: CategoryKey) -> bool {
        self.current == key
    }

    /// Moves to `key`. Keys outside the dataset are ignored. Returns whether
    /// the active tab changed.
    pub fn select(&mut self, key: CategoryKey) -> bool {
        if !self.keys.contains(&key) {
            debug!("ignoring tab outside dataset: {}", key);
            return false;
        }
        if self.current == key {
            return false;
        }
        self.current = key;
        true
    }

    pub fn select_label(&mut self, label: &str) -> ContentResult<bool> {
        let key = CategoryKey::from_label(label)?;
        if !self.keys.contains(&key) {
            return Err(ContentError::UnknownCategory(label.to_string()));
        }
        Ok(self.select(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_first_category() {
        let tabs = TabSelection::new(Dataset::reference());
        assert_eq!(tabs.current(), CategoryKey::Department);
        assert!(tabs.is_active(CategoryKey::Department));
    }

    #[test]
    fn test_select_moves_from_any_state() {
        let mut tabs = TabSelection::new(Dataset::reference());
        assert!(tabs.select(CategoryKey::Research));
        assert!(tabs.select(CategoryKey::Faculty));
        assert_eq!(tabs.current(), CategoryKey::Faculty);
        // idempotent
        assert!(!tabs.select(CategoryKey::Faculty));
        assert_eq!(tabs.current(), CategoryKey::Faculty);
    }

    #[test]
    fn test_unknown_label_is_a_no_op() {
        let mut tabs = TabSelection::new(Dataset::reference());
        tabs.select(CategoryKey::Students);
        let result = tabs.select_label("NotARealCategory");
        assert!(matches!(result, Err(ContentError::UnknownCategory(_))));
        assert_eq!(tabs.current(), CategoryKey::Students);
    }

    #[test]
    fn test_key_outside_dataset_is_ignored() {
        let dataset = Dataset::from_groups(vec![
            (CategoryKey::Students, Vec::new()),
            (CategoryKey::Research, Vec::new()),
        ]);
        let mut tabs = TabSelection::new(&dataset);
        assert_eq!(tabs.current(), CategoryKey::Students);
        assert!(!tabs.select(CategoryKey::Department));
        assert!(tabs.select_label("Faculty").is_err());
        assert_eq!(tabs.current(), CategoryKey::Students);
        assert_eq!(tabs.select_label("Research"), Ok(true));
    }
}
