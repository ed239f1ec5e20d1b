use bytemuck::{Pod, Zeroable};

use super::Color;

/// Surface material descriptor.
///
/// Fixed-size and `Pod`: the material table is uploaded to the device as a
/// flat array of these. Two materials are the same resource iff their bytes
/// are identical, so a NaN channel still equals itself and `0.0` differs
/// from `-0.0`.
///
/// Layout (52 bytes, no padding):
///  offset  0  diffuse           Color
///  offset 12  specular          Color
///  offset 24  emission          Color
///  offset 36  reflectivity      f32
///  offset 40  transparency      f32
///  offset 44  refraction_index  f32
///  offset 48  shininess         f32
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub emission: Color,
    /// Fraction of light mirrored, in [0, 1].
    pub reflectivity: f32,
    /// Fraction of light transmitted, in [0, 1].
    pub transparency: f32,
    pub refraction_index: f32,
    /// Phong exponent.
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::new(0.8, 0.8, 0.8),
            specular: Color::black(),
            emission: Color::black(),
            reflectivity: 0.0,
            transparency: 0.0,
            refraction_index: 1.0,
            shininess: 0.0,
        }
    }
}

impl PartialEq for Material {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bytemuck::bytes_of(self) == bytemuck::bytes_of(other)
    }
}

impl Eq for Material {}

impl Material {
    /// Plain diffuse surface.
    pub fn diffuse(color: Color) -> Self {
        Self { diffuse: color, ..Self::default() }
    }

    /// Light-emitting surface with no diffuse response.
    pub fn emissive(color: Color) -> Self {
        Self {
            diffuse: Color::black(),
            emission: color,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_emissive(&self) -> bool {
        !self.emission.is_black()
    }
}
