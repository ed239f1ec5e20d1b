use bytemuck::{Pod, Zeroable};

use crate::coords::Vec3;
use crate::scene::{GeometryHandle, MaterialId, ObjKind, Scene, SceneError};

use super::Shape;

/// Sphere record (20 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SphereRecord {
    pub center: Vec3,
    pub radius: f32,
    pub material: u32,
}

impl SphereRecord {
    #[inline]
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        Self { center, radius, material: material.0 }
    }
}

impl Shape for SphereRecord {
    const KIND: ObjKind = ObjKind::Sphere;
}

impl<H> Scene<H> {
    /// Appends a sphere to the geometry blob.
    #[inline]
    pub fn push_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        material: MaterialId,
    ) -> Result<GeometryHandle, SceneError> {
        self.push_object(&SphereRecord::new(center, radius, material))
    }
}
