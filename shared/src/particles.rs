//! Background particle field for the hero banner.
//!
//! Everything here is presentation state: points drift, twinkle, grow under
//! the pointer and get joined by faint lines when close. The frontend draws
//! whatever [`ParticleField`] holds after each [`ParticleField::step`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::*;

// Speeds are authored per frame at this rate, the way the tuning was done.
const AUTHORED_FPS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// What happens to a point that drifts past the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutMode {
    /// Leave through one edge, come back through the opposite one.
    #[default]
    Out,
    Bounce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub enable: bool,
    pub distance: f64,
    pub opacity: f64,
    pub width: f64,
    pub color: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            enable: true,
            distance: LINK_DISTANCE,
            opacity: LINK_OPACITY,
            width: LINK_WIDTH,
            color: LINK_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    pub enable: bool,
    pub distance: f64,
    pub size: f64,
    pub opacity: f64,
    pub duration: f64,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            enable: true,
            distance: BUBBLE_DISTANCE,
            size: BUBBLE_SIZE,
            opacity: BUBBLE_OPACITY,
            duration: BUBBLE_DURATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabConfig {
    pub enable: bool,
    pub distance: f64,
    pub opacity: f64,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            enable: true,
            distance: GRAB_DISTANCE,
            opacity: GRAB_OPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    pub enable: bool,
    pub quantity: usize,
    /// Cap on pushed points alive at once; the oldest go first.
    pub max: usize,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enable: true,
            quantity: PUSH_QUANTITY,
            max: MAX_PUSHED,
        }
    }
}

/// Configuration object handed to the particle renderer. Every field has a
/// default so a partial JSON override is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub size: f64,
    pub size_min: f64,
    pub size_speed: f64,
    pub opacity: f64,
    pub opacity_min: f64,
    pub opacity_speed: f64,
    pub speed: f64,
    pub colors: Vec<String>,
    pub out_mode: OutMode,
    pub links: LinkConfig,
    pub bubble: BubbleConfig,
    pub grab: GrabConfig,
    pub push: PushConfig,
    pub fps_limit: u32,
    pub detect_retina: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            size: PARTICLE_SIZE,
            size_min: PARTICLE_SIZE_MIN,
            size_speed: PARTICLE_SIZE_SPEED,
            opacity: PARTICLE_OPACITY,
            opacity_min: PARTICLE_OPACITY_MIN,
            opacity_speed: PARTICLE_OPACITY_SPEED,
            speed: PARTICLE_SPEED,
            colors: PARTICLE_COLORS.iter().map(|c| c.to_string()).collect(),
            out_mode: OutMode::Out,
            links: LinkConfig::default(),
            bubble: BubbleConfig::default(),
            grab: GrabConfig::default(),
            push: PushConfig::default(),
            fps_limit: FPS_LIMIT,
            detect_retina: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub color: usize,
    base_size: f64,
    base_opacity: f64,
    size: f64,
    size_growing: bool,
    opacity: f64,
    opacity_growing: bool,
    bubble: f64,
    pushed: bool,
}

impl Particle {
    /// Rendered radius, including any bubble growth.
    pub fn size(&self, config: &ParticleConfig) -> f64 {
        self.size + (config.bubble.size - self.size) * self.bubble
    }

    pub fn opacity(&self, config: &ParticleConfig) -> f64 {
        self.opacity + (config.bubble.opacity - self.opacity) * self.bubble
    }

    pub fn is_pushed(&self) -> bool {
        self.pushed
    }
}

/// A line between two points, or from the pointer to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub opacity: f64,
}

pub struct ParticleField {
    config: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Option<Point>,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            width: width.max(1.0),
            height: height.max(1.0),
            particles: Vec::with_capacity(config.count + config.push.max),
            pointer: None,
            rng: SmallRng::seed_from_u64(seed),
            config,
        };
        for _ in 0..field.config.count {
            let position = Point::new(
                field.rng.gen_range(0.0..field.width),
                field.rng.gen_range(0.0..field.height),
            );
            let particle = field.spawn(position, false);
            field.particles.push(particle);
        }
        field
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// `None` when the pointer has left the canvas.
    pub fn pointer_move(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    pub fn click(&mut self, at: Point) {
        if !self.config.push.enable {
            return;
        }
        for _ in 0..self.config.push.quantity {
            let particle = self.spawn(at, true);
            self.particles.push(particle);
        }
        let mut pushed = self.particles.iter().filter(|p| p.pushed).count();
        while pushed > self.config.push.max {
            if let Some(oldest) = self.particles.iter().position(|p| p.pushed) {
                self.particles.remove(oldest);
            }
            pushed -= 1;
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        let (w, h) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.position.x = particle.position.x.rem_euclid(w);
            particle.position.y = particle.position.y.rem_euclid(h);
        }
    }

    /// Advances every point by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }
        let config = &self.config;
        let (w, h) = (self.width, self.height);
        let pointer = self.pointer;

        for particle in &mut self.particles {
            particle.position.x += particle.velocity.x * dt;
            particle.position.y += particle.velocity.y * dt;

            match config.out_mode {
                OutMode::Out => {
                    particle.position.x = particle.position.x.rem_euclid(w);
                    particle.position.y = particle.position.y.rem_euclid(h);
                }
                OutMode::Bounce => {
                    bounce(&mut particle.position.x, &mut particle.velocity.x, w);
                    bounce(&mut particle.position.y, &mut particle.velocity.y, h);
                }
            }

            oscillate(
                &mut particle.size,
                &mut particle.size_growing,
                config.size_min,
                particle.base_size,
                config.size_speed * dt,
            );
            oscillate(
                &mut particle.opacity,
                &mut particle.opacity_growing,
                config.opacity_min,
                particle.base_opacity,
                config.opacity_speed * dt,
            );

            let near = config.bubble.enable
                && pointer
                    .map(|p| p.distance(&particle.position) <= config.bubble.distance)
                    .unwrap_or(false);
            let rate = if config.bubble.duration > 0.0 {
                dt / config.bubble.duration
            } else {
                1.0
            };
            particle.bubble = if near {
                (particle.bubble + rate).min(1.0)
            } else {
                (particle.bubble - rate).max(0.0)
            };
        }
    }

    /// Lines between points closer than the link distance, fading with length.
    pub fn links(&self) -> Vec<Link> {
        let links = &self.config.links;
        if !links.enable || links.distance <= 0.0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(&b.position);
                if distance < links.distance {
                    out.push(Link {
                        from: a.position,
                        to: b.position,
                        opacity: links.opacity * (1.0 - distance / links.distance),
                    });
                }
            }
        }
        out
    }

    /// Lines from the pointer to every point inside the grab radius.
    pub fn grab_lines(&self) -> Vec<Link> {
        let grab = &self.config.grab;
        let pointer = match self.pointer {
            Some(pointer) if grab.enable && grab.distance > 0.0 => pointer,
            _ => return Vec::new(),
        };
        self.particles
            .iter()
            .filter_map(|p| {
                let distance = pointer.distance(&p.position);
                (distance < grab.distance).then(|| Link {
                    from: pointer,
                    to: p.position,
                    opacity: grab.opacity * (1.0 - distance / grab.distance),
                })
            })
            .collect()
    }

    fn spawn(&mut self, position: Point, pushed: bool) -> Particle {
        let config = &self.config;
        let angle = self.rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = config.speed * AUTHORED_FPS * self.rng.gen_range(0.1..=1.0);
        let size_low = config.size_min.min(config.size);
        let base_size = self.rng.gen_range(size_low..=config.size);
        let opacity_low = config.opacity_min.min(config.opacity);
        let base_opacity = self.rng.gen_range(opacity_low..=config.opacity);
        let color = if config.colors.is_empty() {
            0
        } else {
            self.rng.gen_range(0..config.colors.len())
        };
        Particle {
            position,
            velocity: Point::new(angle.cos() * speed, angle.sin() * speed),
            color,
            base_size,
            base_opacity,
            size: base_size,
            size_growing: self.rng.gen_bool(0.5),
            opacity: base_opacity,
            opacity_growing: self.rng.gen_bool(0.5),
            bubble: 0.0,
            pushed,
        }
    }
}

fn bounce(position: &mut f64, velocity: &mut f64, limit: f64) {
    if *position < 0.0 {
        *position = -*position;
        *velocity = -*velocity;
    } else if *position >= limit {
        *position = 2.0 * limit - *position;
        *velocity = -*velocity;
    }
    // a huge overshoot can still land outside after reflecting
    *position = position.rem_euclid(limit);
}

fn oscillate(value: &mut f64, growing: &mut bool, min: f64, max: f64, amount: f64) {
    if max <= min {
        *value = max;
        return;
    }
    if *growing {
        *value += amount;
        if *value >= max {
            *value = max;
            *growing = false;
        }
    } else {
        *value -= amount;
        if *value <= min {
            *value = min;
            *growing = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ParticleField {
        ParticleField::new(ParticleConfig::default(), 800.0, 600.0, 7)
    }

    #[test]
    fn test_starts_with_configured_count_inside_bounds() {
        let field = field();
        assert_eq!(field.particles().len(), 80);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
            assert!(p.size(field.config()) <= PARTICLE_SIZE);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = field();
        let b = field();
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_steps_keep_points_in_bounds() {
        let mut field = field();
        for _ in 0..500 {
            field.step(1.0 / 60.0);
        }
        assert_eq!(field.particles().len(), 80);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        }
    }

    #[test]
    fn test_out_mode_wraps_to_opposite_edge() {
        let mut field = ParticleField::new(
            ParticleConfig { count: 1, ..ParticleConfig::default() },
            100.0,
            100.0,
            1,
        );
        field.particles[0].position = Point::new(99.0, 50.0);
        field.particles[0].velocity = Point::new(60.0, 0.0);
        field.step(0.1);
        let x = field.particles()[0].position.x;
        assert!((x - 5.0).abs() < 1e-9, "x = {}", x);
    }

    #[test]
    fn test_bounce_mode_reflects() {
        let config = ParticleConfig {
            count: 1,
            out_mode: OutMode::Bounce,
            ..ParticleConfig::default()
        };
        let mut field = ParticleField::new(config, 100.0, 100.0, 1);
        field.particles[0].position = Point::new(99.0, 50.0);
        field.particles[0].velocity = Point::new(60.0, 0.0);
        field.step(0.1);
        assert!(field.particles()[0].velocity.x < 0.0);
        assert!(field.particles()[0].position.x < 100.0);
    }

    #[test]
    fn test_click_pushes_four_points_at_location() {
        let mut field = field();
        let at = Point::new(400.0, 300.0);
        field.click(at);
        assert_eq!(field.particles().len(), 84);
        let pushed: Vec<_> = field.particles().iter().filter(|p| p.is_pushed()).collect();
        assert_eq!(pushed.len(), 4);
        assert!(pushed.iter().all(|p| p.position == at));
    }

    #[test]
    fn test_pushed_points_are_capped() {
        let mut field = field();
        for i in 0..20 {
            field.click(Point::new(i as f64, 10.0));
        }
        assert_eq!(field.particles().len(), 80 + MAX_PUSHED);
        // the earliest clicks were dropped
        assert!(field.particles().iter().all(|p| !p.is_pushed() || p.position.x >= 10.0));
    }

    #[test]
    fn test_links_only_join_nearby_points() {
        let mut field = field();
        field.step(0.5);
        let links = field.links();
        assert!(!links.is_empty());
        for link in links {
            assert!(link.from.distance(&link.to) < LINK_DISTANCE);
            assert!(link.opacity > 0.0 && link.opacity <= LINK_OPACITY);
        }
    }

    #[test]
    fn test_bubble_grows_near_pointer_only() {
        let config = ParticleConfig { count: 2, ..ParticleConfig::default() };
        let mut field = ParticleField::new(config, 1000.0, 1000.0, 3);
        field.particles[0].position = Point::new(100.0, 100.0);
        field.particles[0].velocity = Point::default();
        field.particles[1].position = Point::new(900.0, 900.0);
        field.particles[1].velocity = Point::default();
        field.pointer_move(Some(Point::new(150.0, 100.0)));

        field.step(BUBBLE_DURATION);
        let cfg = field.config().clone();
        assert!((field.particles()[0].size(&cfg) - BUBBLE_SIZE).abs() < 1e-9);
        assert!((field.particles()[0].opacity(&cfg) - BUBBLE_OPACITY).abs() < 1e-9);
        assert!(field.particles()[1].size(&cfg) <= PARTICLE_SIZE);

        assert_eq!(field.grab_lines().len(), 1);

        field.pointer_move(None);
        field.step(BUBBLE_DURATION);
        assert!(field.particles()[0].size(&cfg) <= PARTICLE_SIZE);
        assert!(field.grab_lines().is_empty());
    }

    #[test]
    fn test_bad_step_is_ignored() {
        let mut field = field();
        let before = field.particles().to_vec();
        field.step(f64::NAN);
        field.step(-1.0);
        field.step(0.0);
        assert_eq!(field.particles(), before.as_slice());
    }

    #[test]
    fn test_resize_wraps_points_into_new_bounds() {
        let mut field = field();
        field.resize(200.0, 100.0);
        assert_eq!(field.size(), (200.0, 100.0));
        for p in field.particles() {
            assert!(p.position.x < 200.0 && p.position.y < 100.0);
        }
    }

    #[test]
    fn test_partial_json_config_keeps_defaults() {
        let config: ParticleConfig =
            serde_json::from_str(r#"{"count": 12, "links": {"distance": 90}}"#).unwrap();
        assert_eq!(config.count, 12);
        assert_eq!(config.links.distance, 90.0);
        assert_eq!(config.links.opacity, LINK_OPACITY);
        assert_eq!(config.push.quantity, PUSH_QUANTITY);
        assert_eq!(config.out_mode, OutMode::Out);
    }
}
