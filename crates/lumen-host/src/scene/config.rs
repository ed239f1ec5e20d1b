use bytemuck::{Pod, Zeroable};

use crate::coords::Vec3;

/// Output and sampling parameters handed to the render kernels.
///
/// The host stores this value; it never interprets it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth.
    pub max_depth: u32,
    /// Color returned by rays that escape the scene.
    pub background: Vec3,
    pub gamma: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            samples_per_pixel: 1,
            max_depth: 5,
            background: Vec3::zero(),
            gamma: 2.2,
        }
    }
}

/// Pinhole/thin-lens camera description.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Lens radius; `0.0` means pinhole.
    pub aperture: f32,
    pub focal_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            look_at: Vec3::zero(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_deg: 45.0,
            aperture: 0.0,
            focal_distance: 1.0,
        }
    }
}
