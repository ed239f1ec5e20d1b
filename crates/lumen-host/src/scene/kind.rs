use core::fmt;
use core::mem::size_of;

use super::{DiscRecord, PlaneRecord, SphereRecord, TriangleRecord};

/// Geometry record kind stored alongside every object and light entry.
///
/// Discriminants are part of the device ABI; do not renumber.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ObjKind {
    Sphere = 0,
    Plane = 1,
    Triangle = 2,
    Disc = 3,
}

impl ObjKind {
    pub const ALL: [ObjKind; 4] = [ObjKind::Sphere, ObjKind::Plane, ObjKind::Triangle, ObjKind::Disc];

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Size in bytes of the record this kind tags in the geometry blob.
    #[inline]
    pub const fn record_size(self) -> u64 {
        let n = match self {
            ObjKind::Sphere => size_of::<SphereRecord>(),
            ObjKind::Plane => size_of::<PlaneRecord>(),
            ObjKind::Triangle => size_of::<TriangleRecord>(),
            ObjKind::Disc => size_of::<DiscRecord>(),
        };
        n as u64
    }

    #[inline]
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_u32() == v)
    }
}

impl fmt::Display for ObjKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjKind::Sphere => "sphere",
            ObjKind::Plane => "plane",
            ObjKind::Triangle => "triangle",
            ObjKind::Disc => "disc",
        };
        f.write_str(s)
    }
}
