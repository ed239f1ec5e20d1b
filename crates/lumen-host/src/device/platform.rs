use super::{DeviceProperties, PlatformError};

/// Source of compute device information.
///
/// Implemented over the vendor runtime by the host binary. Queries are
/// blocking and expected to be called once, before scene construction.
pub trait DevicePlatform {
    /// Number of devices visible to the process.
    fn device_count(&self) -> Result<u32, PlatformError>;

    /// Static properties of device `index` (`0..device_count()`).
    fn device_properties(&self, index: u32) -> Result<DeviceProperties, PlatformError>;
}

/// Platform backed by a fixed list of device properties.
///
/// Useful for hosts that describe their hardware declaratively, and for
/// exercising the selection rules without a GPU.
#[derive(Debug, Clone, Default)]
pub struct StaticPlatform {
    devices: Vec<DeviceProperties>,
}

impl StaticPlatform {
    pub fn new(devices: Vec<DeviceProperties>) -> Self {
        Self { devices }
    }

    #[inline]
    pub fn devices(&self) -> &[DeviceProperties] {
        &self.devices
    }
}

impl DevicePlatform for StaticPlatform {
    fn device_count(&self) -> Result<u32, PlatformError> {
        u32::try_from(self.devices.len())
            .map_err(|_| PlatformError::new("device count does not fit in u32"))
    }

    fn device_properties(&self, index: u32) -> Result<DeviceProperties, PlatformError> {
        self.devices
            .get(index as usize)
            .cloned()
            .ok_or_else(|| PlatformError::new(format!("invalid device ordinal {index}")))
    }
}

impl<P: DevicePlatform + ?Sized> DevicePlatform for &P {
    fn device_count(&self) -> Result<u32, PlatformError> {
        (**self).device_count()
    }

    fn device_properties(&self, index: u32) -> Result<DeviceProperties, PlatformError> {
        (**self).device_properties(index)
    }
}
