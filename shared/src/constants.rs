// Particle field tuning
pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_SIZE: f64 = 3.0;
pub const PARTICLE_SIZE_MIN: f64 = 0.1;
pub const PARTICLE_SIZE_SPEED: f64 = 2.0;
pub const PARTICLE_OPACITY: f64 = 0.6;
pub const PARTICLE_OPACITY_MIN: f64 = 0.1;
pub const PARTICLE_OPACITY_SPEED: f64 = 1.0;
pub const PARTICLE_SPEED: f64 = 2.0;
pub const PARTICLE_COLORS: [&str; 3] = ["#007AFF", "#00C6FF", "#ffffff"];

pub const LINK_DISTANCE: f64 = 150.0;
pub const LINK_OPACITY: f64 = 0.4;
pub const LINK_WIDTH: f64 = 1.0;
pub const LINK_COLOR: &str = "#007AFF";

pub const GRAB_DISTANCE: f64 = 200.0;
pub const GRAB_OPACITY: f64 = 0.8;

pub const BUBBLE_DISTANCE: f64 = 200.0;
pub const BUBBLE_SIZE: f64 = 6.0;
pub const BUBBLE_OPACITY: f64 = 0.8;
pub const BUBBLE_DURATION: f64 = 0.2;

pub const PUSH_QUANTITY: usize = 4;
pub const MAX_PUSHED: usize = 40;

pub const FPS_LIMIT: u32 = 60;
// Longest step a late frame may integrate, in seconds
pub const MAX_FRAME_DELTA: f64 = 0.1;

// Sphere tuning
pub const SPHERE_RATE_X: f64 = 0.2;
pub const SPHERE_RATE_Y: f64 = 0.3;
pub const SPHERE_RADIUS: f64 = 1.0;
pub const SPHERE_SCALE: f64 = 1.5;
pub const SPHERE_POSITION_Z: f64 = -2.0;
pub const SPHERE_DISTORT: f64 = 0.3;
pub const SPHERE_DISTORT_SPEED: f64 = 1.5;
pub const SPHERE_COLOR: &str = "#007AFF";
pub const SPHERE_OPACITY: f64 = 0.3;
pub const CAMERA_Z: f64 = 5.0;
pub const CAMERA_FOV_DEGREES: f64 = 75.0;

// Page motion
pub const HERO_SCALE_MIN: f64 = 0.7;
pub const HERO_FADE_MS: u32 = 1000;
pub const SUBTITLE_DELAY_MS: u32 = 300;
pub const CARD_STAGGER_SECS: f64 = 0.1;
pub const CARD_DURATION_SECS: f64 = 0.5;
