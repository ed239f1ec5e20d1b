use core::fmt;

/// Platform-assigned device index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DeviceId(pub u32);

impl DeviceId {
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static properties as reported by the device platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProperties {
    pub name: String,
    /// Compute capability major version.
    pub major: u32,
    /// Compute capability minor version.
    pub minor: u32,
    pub multiprocessor_count: u32,
    /// Core clock in kHz.
    pub clock_rate_khz: u32,
    /// Global memory in bytes.
    pub total_memory_bytes: u64,
}

/// Capability profile of one device, including the derived core count.
///
/// Built by the selector; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub id: DeviceId,
    pub properties: DeviceProperties,
    pub core_count: u32,
}

impl DeviceDescriptor {
    #[inline]
    pub fn name(&self) -> &str {
        &self.properties.name
    }

    #[inline]
    pub fn capability(&self) -> (u32, u32) {
        (self.properties.major, self.properties.minor)
    }

    #[inline]
    pub fn clock_ghz(&self) -> f32 {
        self.properties.clock_rate_khz as f32 * 1e-6
    }

    #[inline]
    pub fn memory_mib(&self) -> f32 {
        self.properties.total_memory_bytes as f32 / 1024.0 / 1024.0
    }
}
