use bytemuck::{Pod, Zeroable};

use crate::coords::Vec3;
use crate::scene::{GeometryHandle, MaterialId, ObjKind, Scene, SceneError};

use super::Shape;

/// Flat disc record (32 bytes). Typically used for area lights.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct DiscRecord {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
    pub material: u32,
}

impl DiscRecord {
    #[inline]
    pub fn new(center: Vec3, normal: Vec3, radius: f32, material: MaterialId) -> Self {
        Self { center, normal, radius, material: material.0 }
    }
}

impl Shape for DiscRecord {
    const KIND: ObjKind = ObjKind::Disc;
}

impl<H> Scene<H> {
    #[inline]
    pub fn push_disc(
        &mut self,
        center: Vec3,
        normal: Vec3,
        radius: f32,
        material: MaterialId,
    ) -> Result<GeometryHandle, SceneError> {
        self.push_object(&DiscRecord::new(center, normal, radius, material))
    }
}
