use bytemuck::Pod;

use crate::paint::Material;

use super::{Camera, GeometryHandle, RenderConfig};

/// Read-only snapshot of a finished scene, as consumed by the renderer.
///
/// Borrowing the scene for the lifetime of the view keeps teardown from
/// running while the renderer still reads its storage.
#[derive(Debug, Copy, Clone)]
pub struct SceneView<'a> {
    pub geometry: &'a [u8],
    pub objects: &'a [GeometryHandle],
    pub lights: &'a [GeometryHandle],
    pub materials: &'a [Material],
    pub render: &'a RenderConfig,
    pub camera: &'a Camera,
}

impl SceneView<'_> {
    /// Decodes the record a handle points at.
    ///
    /// `None` if the record extends past the end of the geometry.
    pub fn resolve<T: Pod>(&self, handle: GeometryHandle) -> Option<T> {
        let start = usize::try_from(handle.offset).ok()?;
        let end = start.checked_add(core::mem::size_of::<T>())?;
        self.geometry.get(start..end).map(bytemuck::pod_read_unaligned)
    }

    /// Lights whose record, sized by its kind, does not fit in the geometry.
    ///
    /// Catches lights registered before (or without) their record being
    /// written, including records cut short at the end of the blob. It cannot
    /// tell whether an in-bounds offset lands on a record boundary.
    pub fn dangling_lights(&self) -> impl Iterator<Item = &GeometryHandle> {
        let len = self.geometry.len() as u64;
        self.lights.iter().filter(move |l| {
            l.offset
                .checked_add(l.kind.record_size())
                .is_none_or(|end| end > len)
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.lights.is_empty() && self.materials.is_empty()
    }
}
