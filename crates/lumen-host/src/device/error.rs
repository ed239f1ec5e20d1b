use std::fmt;

/// Failure reported by a [`DevicePlatform`](super::DevicePlatform) query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    pub message: String,
}

impl PlatformError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device platform error: {}", self.message)
    }
}

impl std::error::Error for PlatformError {}

/// Fatal environment conditions found during device selection.
///
/// None of these are transient. A host cannot render without at least one
/// eligible device, so callers are expected to abort (see
/// [`exit_on_fatal`](super::exit_on_fatal)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The platform reports zero compute devices.
    NoDevices,
    /// Devices exist but none meets the minimum compute capability.
    NoEligibleDevices { minimum_major: u32 },
    /// Capability version missing from the cores-per-multiprocessor table.
    UnknownCapability { device: u32, major: u32, minor: u32 },
    /// Underlying platform query failed.
    Platform(PlatformError),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NoDevices => write!(f, "no suitable compute devices found"),
            DeviceError::NoEligibleDevices { minimum_major } => write!(
                f,
                "no suitable compute devices found (compute capability {minimum_major}.x or newer required)"
            ),
            DeviceError::UnknownCapability { device, major, minor } => write!(
                f,
                "device {device}: undefined compute capability {major}.{minor}, cannot derive core count"
            ),
            DeviceError::Platform(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeviceError::Platform(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlatformError> for DeviceError {
    fn from(e: PlatformError) -> Self {
        DeviceError::Platform(e)
    }
}
