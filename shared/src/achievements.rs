use once_cell::sync::Lazy;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{ContentError, ContentResult};

/// Achievement groups shown as tabs, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
pub enum CategoryKey {
    Department,
    Faculty,
    Students,
    Research,
}

impl CategoryKey {
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn from_label(label: &str) -> ContentResult<Self> {
        label
            .parse::<CategoryKey>()
            .map_err(|_| ContentError::UnknownCategory(label.to_string()))
    }
}

/// One displayable accomplishment. `date` is display text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementRecord {
    pub icon: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

impl AchievementRecord {
    pub const fn new(
        icon: &'static str,
        title: &'static str,
        date: &'static str,
        description: &'static str,
    ) -> Self {
        Self { icon, title, date, description }
    }
}

/// Ordered mapping of category to records. Both the category order and the
/// record order are display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    groups: Vec<(CategoryKey, Vec<AchievementRecord>)>,
}

static REFERENCE: Lazy<Dataset> = Lazy::new(|| {
    Dataset::from_groups(CategoryKey::iter().map(|key| (key, reference_records(key))))
});

impl Dataset {
    /// Builds a dataset from `(key, records)` pairs. A repeated key keeps the
    /// position of its first occurrence and takes the later records.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (CategoryKey, Vec<AchievementRecord>)>,
    {
        let mut out: Vec<(CategoryKey, Vec<AchievementRecord>)> = Vec::new();
        for (key, records) in groups {
            match out.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = records,
                None => out.push((key, records)),
            }
        }
        Self { groups: out }
    }

    /// The department's published achievements. Initialized once, read-only
    /// for the life of the process.
    pub fn reference() -> &'static Dataset {
        &REFERENCE
    }

    pub fn categories(&self) -> Vec<CategoryKey> {
        self.groups.iter().map(|(key, _)| *key).collect()
    }

    pub fn first_category(&self) -> Option<CategoryKey> {
        self.groups.first().map(|(key, _)| *key)
    }

    pub fn contains(&self, key: CategoryKey) -> bool {
        self.groups.iter().any(|(k, _)| *k == key)
    }

    pub fn records_for(&self, key: CategoryKey) -> ContentResult<&[AchievementRecord]> {
        self.groups
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, records)| records.as_slice())
            .ok_or_else(|| ContentError::UnknownCategory(key.to_string()))
    }

    pub fn records_for_label(&self, label: &str) -> ContentResult<&[AchievementRecord]> {
        let key = CategoryKey::from_label(label)?;
        self.records_for(key)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn reference_records(key: CategoryKey) -> Vec<AchievementRecord> {
    match key {
        CategoryKey::Department => vec![
            AchievementRecord::new(
                "🏆",
                "NAAC A++ Accreditation",
                "November 2023",
                "The ECE department received the highest grade in NAAC accreditation for excellence in teaching and research infrastructure.",
            ),
            AchievementRecord::new(
                "🎓",
                "Best Engineering Department Award",
                "March 2023",
                "Recognized by the State Technical Education Board for outstanding contribution to technical education.",
            ),
            AchievementRecord::new(
                "📚",
                "Research Excellence Award",
                "January 2023",
                "Received for publishing the highest number of research papers among all engineering departments.",
            ),
        ],
        CategoryKey::Faculty => vec![
            AchievementRecord::new(
                "🌟",
                "Dr. Jane Smith - IEEE Fellowship",
                "December 2023",
                "Honored with the prestigious IEEE Fellowship for contributions to embedded systems research.",
            ),
            AchievementRecord::new(
                "📝",
                "Prof. Mark Wilson - Best Paper Award",
                "October 2023",
                "Received the Best Paper Award at the International Conference on Communication Systems.",
            ),
            AchievementRecord::new(
                "👨‍🏫",
                "Prof. Emily Johnson - Outstanding Teacher",
                "September 2023",
                "Voted as the Outstanding Teacher of the Year by students for excellence in teaching Embedded Systems.",
            ),
        ],
        CategoryKey::Students => vec![
            AchievementRecord::new(
                "💻",
                "National Hackathon Winners",
                "February 2024",
                "Team of 4 ECE students won the first prize at the National IoT Hackathon organized by TechMinds India.",
            ),
            AchievementRecord::new(
                "🤖",
                "Robotics Competition",
                "November 2023",
                "Second place in the Inter-College Robotics Competition held at IIT Delhi.",
            ),
            AchievementRecord::new(
                "📈",
                "Highest Placement Rate",
                "June 2023",
                "ECE department achieved 95% placement rate with average package of 8.5 LPA for the 2023 batch.",
            ),
        ],
        CategoryKey::Research => vec![
            AchievementRecord::new(
                "🔬",
                "AI Research Grant",
                "December 2023",
                "Secured ₹1.5 Crore research grant for AI in Healthcare project.",
            ),
            AchievementRecord::new(
                "🏭",
                "Industry Collaboration",
                "October 2023",
                "Partnership with leading tech companies for research in IoT and Edge Computing.",
            ),
            AchievementRecord::new(
                "📱",
                "Patent Granted",
                "August 2023",
                "Department's research team granted patent for innovative mobile security solution.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_categories_in_declared_order() {
        let dataset = Dataset::reference();
        assert_eq!(
            dataset.categories(),
            vec![
                CategoryKey::Department,
                CategoryKey::Faculty,
                CategoryKey::Students,
                CategoryKey::Research,
            ]
        );
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_records_are_stable_across_calls() {
        let dataset = Dataset::reference();
        for key in dataset.categories() {
            let first = dataset.records_for(key).unwrap().to_vec();
            let second = dataset.records_for(key).unwrap().to_vec();
            assert_eq!(first, second);
            assert!(!first.is_empty());
        }
    }

    #[test]
    fn test_faculty_records_keep_authored_order() {
        let records = Dataset::reference().records_for(CategoryKey::Faculty).unwrap();
        let titles: Vec<_> = records.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec![
                "Dr. Jane Smith - IEEE Fellowship",
                "Prof. Mark Wilson - Best Paper Award",
                "Prof. Emily Johnson - Outstanding Teacher",
            ]
        );
    }

    #[test]
    fn test_label_round_trip_and_unknown_label() {
        assert_eq!(CategoryKey::from_label("Students").unwrap(), CategoryKey::Students);
        assert_eq!(CategoryKey::Research.to_string(), "Research");
        assert_eq!(CategoryKey::Faculty.as_ref(), CategoryKey::Faculty.label());

        let err = Dataset::reference().records_for_label("NotARealCategory").unwrap_err();
        assert_eq!(err, ContentError::UnknownCategory("NotARealCategory".to_string()));
        // labels are case-sensitive
        assert!(CategoryKey::from_label("faculty").is_err());
    }

    #[test]
    fn test_missing_key_in_custom_dataset() {
        let dataset = Dataset::from_groups(vec![(CategoryKey::Research, Vec::new())]);
        assert_eq!(dataset.records_for(CategoryKey::Research).unwrap().len(), 0);
        assert!(matches!(
            dataset.records_for(CategoryKey::Faculty),
            Err(ContentError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_duplicate_groups_replace_in_place() {
        let record = AchievementRecord::new("🏅", "Later", "2024", "Replaces the first list.");
        let dataset = Dataset::from_groups(vec![
            (CategoryKey::Faculty, Vec::new()),
            (CategoryKey::Department, Vec::new()),
            (CategoryKey::Faculty, vec![record]),
        ]);
        assert_eq!(dataset.categories(), vec![CategoryKey::Faculty, CategoryKey::Department]);
        assert_eq!(dataset.records_for(CategoryKey::Faculty).unwrap(), &[record]);
    }
}
