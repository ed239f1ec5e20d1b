pub(crate) mod disc;
pub(crate) mod plane;
pub(crate) mod sphere;
pub(crate) mod triangle;

use bytemuck::Pod;

use super::ObjKind;

/// A geometry record with a fixed kind tag.
///
/// Implementors are `#[repr(C)]` and `Pod`; their bytes are copied into the
/// geometry blob verbatim.
pub trait Shape: Pod {
    const KIND: ObjKind;
}
