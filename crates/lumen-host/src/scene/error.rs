use std::collections::TryReserveError;
use std::fmt;

/// Failure while growing scene storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The allocator refused to grow `resource`.
    OutOfMemory {
        resource: &'static str,
        source: TryReserveError,
    },
    /// `resource` holds more entries than its handle type can address.
    CapacityExceeded { resource: &'static str },
}

impl SceneError {
    pub(crate) fn out_of_memory(resource: &'static str, source: TryReserveError) -> Self {
        SceneError::OutOfMemory { resource, source }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::OutOfMemory { resource, source } => {
                write!(f, "out of memory growing {resource}: {source}")
            }
            SceneError::CapacityExceeded { resource } => {
                write!(f, "{resource} is full: handle space exhausted")
            }
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::OutOfMemory { source, .. } => Some(source),
            SceneError::CapacityExceeded { .. } => None,
        }
    }
}
