//! Surface appearance: colors and material descriptors.
//!
//! Materials are plain values. Identity is structural, which is what the
//! scene's material table deduplicates on.

mod color;
mod material;

pub use color::Color;
pub use material::Material;
