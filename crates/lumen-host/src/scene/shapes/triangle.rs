use bytemuck::{Pod, Zeroable};

use crate::coords::Vec3;
use crate::scene::{GeometryHandle, MaterialId, ObjKind, Scene, SceneError};

use super::Shape;

/// Triangle record (40 bytes). Winding is counter-clockwise when viewed from
/// the front face.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TriangleRecord {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub material: u32,
}

impl TriangleRecord {
    #[inline]
    pub fn new(vertices: [Vec3; 3], material: MaterialId) -> Self {
        let [v0, v1, v2] = vertices;
        Self { v0, v1, v2, material: material.0 }
    }
}

impl Shape for TriangleRecord {
    const KIND: ObjKind = ObjKind::Triangle;
}

impl<H> Scene<H> {
    #[inline]
    pub fn push_triangle(
        &mut self,
        vertices: [Vec3; 3],
        material: MaterialId,
    ) -> Result<GeometryHandle, SceneError> {
        self.push_object(&TriangleRecord::new(vertices, material))
    }
}
