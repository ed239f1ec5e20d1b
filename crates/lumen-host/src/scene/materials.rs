use core::fmt;

use crate::paint::Material;

use super::SceneError;

/// Stable handle into a [`MaterialTable`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MaterialId(pub u32);

impl MaterialId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Append-only, deduplicating material store.
///
/// Invariants:
/// - no two entries compare equal
/// - a handle, once returned, addresses the same material until the table
///   is released
///
/// Lookup is a linear scan over bytewise equality (see [`Material`]'s
/// `PartialEq`). Scenes carry tens of materials, not thousands.
#[derive(Debug, Default)]
pub struct MaterialTable {
    entries: Vec<Material>,
}

impl MaterialTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle of an equal material, inserting it if absent.
    pub fn insert(&mut self, material: Material) -> Result<MaterialId, SceneError> {
        if let Some(id) = self.find(&material) {
            return Ok(id);
        }

        let id = u32::try_from(self.entries.len())
            .map(MaterialId)
            .map_err(|_| SceneError::CapacityExceeded { resource: "material table" })?;

        self.entries
            .try_reserve(1)
            .map_err(|e| SceneError::out_of_memory("material table", e))?;
        self.entries.push(material);

        log::trace!("material {id} added");
        Ok(id)
    }

    /// Handle of a material structurally equal to `material`, if present.
    pub fn find(&self, material: &Material) -> Option<MaterialId> {
        self.entries
            .iter()
            .position(|m| m == material)
            .map(|i| MaterialId(i as u32))
    }

    #[inline]
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.entries.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.entries.capacity() > 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Material] {
        &self.entries
    }

    /// Iterates `(handle, material)` in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, m)| (MaterialId(i as u32), m))
    }

    pub fn release(&mut self) {
        self.entries = Vec::new();
    }
}
