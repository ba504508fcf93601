pub mod achievements;
pub mod clock;
pub mod constants;
pub mod content;
pub mod error;
pub mod motion;
pub mod page;
pub mod particles;
pub mod sphere;
pub mod tabs;

pub use achievements::{AchievementRecord, CategoryKey, Dataset};
pub use error::ContentError;
pub use page::{DecorationLayer, DecorationState, PageModel, TabView};
pub use tabs::TabSelection;
