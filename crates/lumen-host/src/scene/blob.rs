use bytemuck::Pod;

use super::{ObjKind, SceneError};

/// Location of one record inside the geometry blob.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GeometryHandle {
    pub kind: ObjKind,
    /// Byte offset from the start of the blob.
    pub offset: u64,
}

impl GeometryHandle {
    #[inline]
    pub const fn new(kind: ObjKind, offset: u64) -> Self {
        Self { kind, offset }
    }
}

/// Contiguous byte arena holding every scene object record.
///
/// Records are opaque here; the blob only tracks its size and owns the
/// storage. Appends never move earlier records relative to the blob start,
/// so offsets stay valid until [`release`](Self::release).
///
/// Records are packed back-to-back with no padding. Every record type this
/// crate defines is a multiple of 4 bytes, which keeps word reads aligned on
/// the device side.
#[derive(Debug, Default)]
pub struct GeometryBlob {
    bytes: Vec<u8>,
}

impl GeometryBlob {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total size of all records in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether backing storage is currently held.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.bytes.capacity() > 0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends raw record bytes and returns their offset.
    pub fn append_bytes(&mut self, record: &[u8]) -> Result<u64, SceneError> {
        let offset = self.len();
        self.bytes
            .try_reserve(record.len())
            .map_err(|e| SceneError::out_of_memory("geometry blob", e))?;
        self.bytes.extend_from_slice(record);
        Ok(offset)
    }

    /// Appends a typed record and returns its handle.
    pub fn append<T: Pod>(&mut self, kind: ObjKind, record: &T) -> Result<GeometryHandle, SceneError> {
        let offset = self.append_bytes(bytemuck::bytes_of(record))?;
        Ok(GeometryHandle::new(kind, offset))
    }

    /// Reads a typed record back.
    ///
    /// Returns `None` if the record would extend past the end of the blob.
    pub fn read<T: Pod>(&self, offset: u64) -> Option<T> {
        let start = usize::try_from(offset).ok()?;
        let end = start.checked_add(core::mem::size_of::<T>())?;
        let bytes = self.bytes.get(start..end)?;
        Some(bytemuck::pod_read_unaligned(bytes))
    }

    /// Drops the backing storage and resets the size to zero.
    pub fn release(&mut self) {
        self.bytes = Vec::new();
    }
}
