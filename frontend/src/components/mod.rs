pub mod gradient_background;
pub mod header;
pub mod hero;
pub mod canvas_surface;
pub mod particles_background;
pub mod animated_sphere;
pub mod about;
pub mod welcome;
pub mod features;
pub mod stats_counter;
pub mod achievements;
pub mod footer;
pub mod icons;

pub use gradient_background::GradientBackground;
pub use header::SiteHeader;
pub use hero::Hero;
pub use particles_background::ParticlesBackground;
pub use animated_sphere::AnimatedSphere;
pub use about::About;
pub use welcome::Welcome;
pub use features::Features;
pub use stats_counter::StatsCounter;
pub use achievements::{AchievementCard, AchievementGrid, Achievements};
pub use footer::SiteFooter;
