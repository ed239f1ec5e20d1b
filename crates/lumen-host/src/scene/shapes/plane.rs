use bytemuck::{Pod, Zeroable};

use crate::coords::Vec3;
use crate::scene::{GeometryHandle, MaterialId, ObjKind, Scene, SceneError};

use super::Shape;

/// Infinite plane through `point` with unit `normal` (28 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PlaneRecord {
    pub point: Vec3,
    pub normal: Vec3,
    pub material: u32,
}

impl PlaneRecord {
    #[inline]
    pub fn new(point: Vec3, normal: Vec3, material: MaterialId) -> Self {
        Self { point, normal, material: material.0 }
    }
}

impl Shape for PlaneRecord {
    const KIND: ObjKind = ObjKind::Plane;
}

impl<H> Scene<H> {
    #[inline]
    pub fn push_plane(
        &mut self,
        point: Vec3,
        normal: Vec3,
        material: MaterialId,
    ) -> Result<GeometryHandle, SceneError> {
        self.push_object(&PlaneRecord::new(point, normal, material))
    }
}
