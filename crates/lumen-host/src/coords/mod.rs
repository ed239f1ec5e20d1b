//! World-space types shared by scene records and the camera.
//!
//! Right-handed, +Y up. Everything here is `Pod` so it can be copied into the
//! geometry blob byte-for-byte.

mod vec3;

pub use vec3::Vec3;
