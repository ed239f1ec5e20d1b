use super::{GeometryHandle, ObjKind, SceneError};

/// Ordered list of light-emitting geometry records.
///
/// Entries are appended without validation: an offset may point at geometry
/// that has not been written yet. All writes must land before the scene is
/// handed to the renderer. Iteration order equals append order.
#[derive(Debug, Default)]
pub struct LightIndex {
    entries: Vec<GeometryHandle>,
}

impl LightIndex {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, kind: ObjKind, offset: u64) -> Result<(), SceneError> {
        self.reserve(1)?;
        self.entries.push(GeometryHandle::new(kind, offset));
        Ok(())
    }

    /// Reserves room for `additional` more entries without appending.
    pub fn reserve(&mut self, additional: usize) -> Result<(), SceneError> {
        self.entries
            .try_reserve(additional)
            .map_err(|e| SceneError::out_of_memory("light index", e))
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
    pub fn as_slice(&self) -> &[GeometryHandle] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, GeometryHandle> {
        self.entries.iter()
    }

    pub fn release(&mut self) {
        self.entries = Vec::new();
    }
}
