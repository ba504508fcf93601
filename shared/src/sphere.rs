//! Slowly turning, wobbling sphere behind the hero title.
//!
//! Rotation is a pure function of elapsed time so a late frame just jumps to
//! where the sphere should be. The surface wobble is a cheap smooth noise
//! rather than real simplex noise; it only has to look alive.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::constants::*;

// Directional light position and ambient term used for shading.
const LIGHT: Vec3 = Vec3 { x: 10.0, y: 10.0, z: 10.0 };
const AMBIENT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self.scale(1.0 / len)
        }
    }

    fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    fn rotate_y(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub rate_x: f64,
    pub rate_y: f64,
    pub radius: f64,
    pub scale: f64,
    pub position_z: f64,
    pub distort: f64,
    pub distort_speed: f64,
    pub width_segments: u32,
    pub height_segments: u32,
    pub camera_z: f64,
    pub fov_degrees: f64,
    pub color: String,
    pub opacity: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            rate_x: SPHERE_RATE_X,
            rate_y: SPHERE_RATE_Y,
            radius: SPHERE_RADIUS,
            scale: SPHERE_SCALE,
            position_z: SPHERE_POSITION_Z,
            distort: SPHERE_DISTORT,
            distort_speed: SPHERE_DISTORT_SPEED,
            // enough for a point cloud on a 2D canvas
            width_segments: 48,
            height_segments: 24,
            camera_z: CAMERA_Z,
            fov_degrees: CAMERA_FOV_DEGREES,
            color: SPHERE_COLOR.to_string(),
            opacity: SPHERE_OPACITY,
        }
    }
}

/// A surface point after rotation, distortion and projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    pub x: f64,
    pub y: f64,
    /// Distance from the camera; larger is further away.
    pub depth: f64,
    /// 0.0 (unlit) to 1.0 (fully lit).
    pub shade: f64,
    /// Perspective scale at this depth, for sizing dots.
    pub scale: f64,
}

pub struct Sphere {
    config: SphereConfig,
    directions: Vec<Vec3>,
}

impl Sphere {
    pub fn new(config: SphereConfig) -> Self {
        let directions = unit_sphere(config.width_segments.max(3), config.height_segments.max(2));
        Self { config, directions }
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    pub fn vertex_count(&self) -> usize {
        self.directions.len()
    }

    /// Rotation around X and Y after `elapsed` seconds.
    pub fn rotation_at(&self, elapsed: f64) -> (f64, f64) {
        let t = elapsed.max(0.0);
        (t * self.config.rate_x, t * self.config.rate_y)
    }

    /// Radius multiplier for the surface point in `direction` at `elapsed`.
    pub fn distortion_at(&self, direction: Vec3, elapsed: f64) -> f64 {
        let t = elapsed.max(0.0) * self.config.distort_speed;
        let n = (direction.x * 2.1 + t).sin()
            * (direction.y * 2.7 + t * 1.3).sin()
            * (direction.z * 1.9 + t * 0.7).sin();
        1.0 + self.config.distort * n
    }

    /// Perspective projection of a world-space point; `None` behind the camera.
    pub fn project(&self, point: Vec3, viewport: Viewport) -> Option<ProjectedVertex> {
        let depth = self.config.camera_z - point.z;
        if depth <= 0.0 {
            return None;
        }
        let focal = 1.0 / (self.config.fov_degrees.to_radians() / 2.0).tan();
        let ndc_x = point.x * focal / viewport.aspect() / depth;
        let ndc_y = point.y * focal / depth;
        Some(ProjectedVertex {
            x: (ndc_x + 1.0) / 2.0 * viewport.width,
            y: (1.0 - ndc_y) / 2.0 * viewport.height,
            depth,
            shade: 0.0,
            scale: focal / depth,
        })
    }

    /// Every visible surface point at `elapsed`, sorted back to front.
    pub fn frame(&self, elapsed: f64, viewport: Viewport) -> Vec<ProjectedVertex> {
        let (rx, ry) = self.rotation_at(elapsed);
        let light = LIGHT.normalize();
        let size = self.config.radius * self.config.scale;

        let mut out: Vec<ProjectedVertex> = self
            .directions
            .iter()
            .filter_map(|&dir| {
                let normal = dir.rotate_y(ry).rotate_x(rx);
                let r = size * self.distortion_at(dir, elapsed);
                let world = Vec3::new(normal.x * r, normal.y * r, normal.z * r + self.config.position_z);
                let mut vertex = self.project(world, viewport)?;
                vertex.shade = (AMBIENT + normal.dot(light).max(0.0) * (1.0 - AMBIENT)).clamp(0.0, 1.0);
                Some(vertex)
            })
            .collect();

        out.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        out
    }
}

fn unit_sphere(width_segments: u32, height_segments: u32) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(((width_segments + 1) * (height_segments + 1)) as usize);
    for iy in 0..=height_segments {
        let phi = iy as f64 / height_segments as f64 * PI;
        // one vertex per pole is enough for a point cloud
        let columns = if iy == 0 || iy == height_segments { 1 } else { width_segments };
        for ix in 0..columns {
            let theta = ix as f64 / width_segments as f64 * TAU;
            out.push(Vec3::new(-theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport { width: 800.0, height: 600.0 };

    #[test]
    fn test_rotation_rates() {
        let sphere = Sphere::new(SphereConfig::default());
        assert_eq!(sphere.rotation_at(0.0), (0.0, 0.0));
        let (x, y) = sphere.rotation_at(10.0);
        assert!((x - 2.0).abs() < 1e-12);
        assert!((y - 3.0).abs() < 1e-12);
        // rotation never runs backwards
        assert_eq!(sphere.rotation_at(-5.0), (0.0, 0.0));
    }

    #[test]
    fn test_distortion_stays_within_amplitude() {
        let sphere = Sphere::new(SphereConfig::default());
        for i in 0..200 {
            let t = i as f64 * 0.37;
            let dir = Vec3::new((t * 1.1).cos(), (t * 0.7).sin(), (t * 0.3).cos()).normalize();
            let d = sphere.distortion_at(dir, t);
            assert!(d >= 1.0 - SPHERE_DISTORT - 1e-12 && d <= 1.0 + SPHERE_DISTORT + 1e-12);
        }
    }

    #[test]
    fn test_center_projects_to_middle_of_viewport() {
        let sphere = Sphere::new(SphereConfig::default());
        let v = sphere.project(Vec3::new(0.0, 0.0, SPHERE_POSITION_Z), VIEW).unwrap();
        assert!((v.x - 400.0).abs() < 1e-9);
        assert!((v.y - 300.0).abs() < 1e-9);
        assert!((v.depth - 7.0).abs() < 1e-9);
        assert!(sphere.project(Vec3::new(0.0, 0.0, CAMERA_Z + 1.0), VIEW).is_none());
    }

    #[test]
    fn test_frame_is_sorted_and_shaded() {
        let sphere = Sphere::new(SphereConfig::default());
        let frame = sphere.frame(1.5, VIEW);
        assert_eq!(frame.len(), sphere.vertex_count());
        assert!(frame.windows(2).all(|w| w[0].depth >= w[1].depth));
        assert!(frame.iter().all(|v| v.shade >= AMBIENT && v.shade <= 1.0));
    }

    #[test]
    fn test_pole_vertices_are_not_duplicated() {
        let sphere = Sphere::new(SphereConfig {
            width_segments: 8,
            height_segments: 4,
            ..SphereConfig::default()
        });
        assert_eq!(sphere.vertex_count(), 2 + 3 * 8);
    }
}
