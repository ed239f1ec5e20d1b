use std::io::Write;

use super::capability::cores_per_multiprocessor;
use super::{DeviceDescriptor, DeviceError, DeviceId, DevicePlatform, DeviceProperties};

/// Device selection parameters.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Minimum compute capability major version a device must report.
    ///
    /// Kernels rely on features introduced with 2.x; lowering this only makes
    /// sense for diagnostics.
    pub min_compute_major: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { min_compute_major: 2 }
    }
}

/// Builds the descriptor for one device, deriving its core count.
///
/// Fails for capability versions absent from the cores-per-SM table.
pub fn describe_device(id: DeviceId, properties: DeviceProperties) -> Result<DeviceDescriptor, DeviceError> {
    let cores = cores_per_multiprocessor(properties.major, properties.minor).ok_or(
        DeviceError::UnknownCapability {
            device: id.index(),
            major: properties.major,
            minor: properties.minor,
        },
    )?;

    Ok(DeviceDescriptor {
        id,
        core_count: cores.saturating_mul(properties.multiprocessor_count),
        properties,
    })
}

/// Queries every device the platform exposes, in index order.
///
/// Zero devices is reported as [`DeviceError::NoDevices`].
pub fn enumerate_devices(platform: &impl DevicePlatform) -> Result<Vec<DeviceDescriptor>, DeviceError> {
    let count = platform.device_count()?;
    if count == 0 {
        return Err(DeviceError::NoDevices);
    }

    (0..count)
        .map(|i| describe_device(DeviceId(i), platform.device_properties(i)?))
        .collect()
}

/// Enumerates devices and returns the eligible ones in index order.
///
/// Logs one line per device. Every error returned here is fatal for a
/// rendering host.
pub fn select_devices(
    platform: &impl DevicePlatform,
    config: &SelectorConfig,
) -> Result<Vec<DeviceId>, DeviceError> {
    let devices = enumerate_devices(platform)?;

    let mut selected = Vec::with_capacity(devices.len());
    for d in &devices {
        let (major, minor) = d.capability();
        if major >= config.min_compute_major {
            log::info!(
                "[{}] {} ({}.{}, {} cores, {:.2} GHz, {:.2} MB)",
                d.id,
                d.name(),
                major,
                minor,
                d.core_count,
                d.clock_ghz(),
                d.memory_mib(),
            );
            selected.push(d.id);
        } else {
            log::info!("[{}] {} ({}.{} not usable)", d.id, d.name(), major, minor);
        }
    }

    if selected.is_empty() {
        return Err(DeviceError::NoEligibleDevices {
            minimum_major: config.min_compute_major,
        });
    }

    Ok(selected)
}

/// Unwraps a selection result, terminating the process on failure.
///
/// For hosts that have no meaningful continuation without a device.
pub fn exit_on_fatal<T>(result: Result<T, DeviceError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            // Written directly so it shows even before the logger is set up.
            let _ = write_fatal(&mut std::io::stderr().lock(), &e);
            std::process::exit(1);
        }
    }
}

/// Writes the single diagnostic line emitted before a fatal exit.
fn write_fatal(out: &mut impl Write, err: &DeviceError) -> std::io::Result<()> {
    writeln!(out, "{err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{PlatformError, StaticPlatform};

    fn dev(name: &str, major: u32, minor: u32) -> DeviceProperties {
        DeviceProperties {
            name: name.to_owned(),
            major,
            minor,
            multiprocessor_count: 14,
            clock_rate_khz: 1_150_000,
            total_memory_bytes: 3 * 1024 * 1024 * 1024,
        }
    }

    struct FailingPlatform;

    impl DevicePlatform for FailingPlatform {
        fn device_count(&self) -> Result<u32, PlatformError> {
            Ok(2)
        }

        fn device_properties(&self, index: u32) -> Result<DeviceProperties, PlatformError> {
            if index == 0 {
                Ok(dev("ok", 2, 0))
            } else {
                Err(PlatformError::new("driver went away"))
            }
        }
    }

    // ── describe ──────────────────────────────────────────────────────────

    #[test]
    fn core_count_is_table_times_sm() {
        let d = describe_device(DeviceId(0), dev("gf100", 2, 0)).unwrap();
        assert_eq!(d.core_count, 32 * 14);
    }

    #[test]
    fn unit_conversions() {
        let d = describe_device(DeviceId(0), dev("gf100", 2, 0)).unwrap();
        assert!((d.clock_ghz() - 1.15).abs() < 1e-4);
        assert_eq!(d.memory_mib(), 3072.0);
    }

    #[test]
    fn unknown_capability_is_fatal() {
        let err = describe_device(DeviceId(3), dev("mystery", 4, 0)).unwrap_err();
        assert_eq!(err, DeviceError::UnknownCapability { device: 3, major: 4, minor: 0 });
    }

    // ── select ────────────────────────────────────────────────────────────

    #[test]
    fn eligibility_excludes_old_generations_and_keeps_order() {
        let platform = StaticPlatform::new(vec![
            dev("tesla", 1, 3),
            dev("fermi", 2, 1),
            dev("kepler", 3, 5),
        ]);
        let ids = select_devices(&platform, &SelectorConfig::default()).unwrap();
        assert_eq!(ids, vec![DeviceId(1), DeviceId(2)]);
    }

    #[test]
    fn order_follows_enumeration_not_performance() {
        let mut big = dev("big", 3, 5);
        big.multiprocessor_count = 100;
        let platform = StaticPlatform::new(vec![dev("small", 2, 0), big]);
        let ids = select_devices(&platform, &SelectorConfig::default()).unwrap();
        assert_eq!(ids, vec![DeviceId(0), DeviceId(1)]);
    }

    #[test]
    fn zero_devices_is_fatal() {
        let err = select_devices(&StaticPlatform::default(), &SelectorConfig::default()).unwrap_err();
        assert_eq!(err, DeviceError::NoDevices);
    }

    #[test]
    fn zero_eligible_devices_is_fatal() {
        let platform = StaticPlatform::new(vec![dev("a", 1, 0), dev("b", 1, 1)]);
        let err = select_devices(&platform, &SelectorConfig::default()).unwrap_err();
        assert_eq!(err, DeviceError::NoEligibleDevices { minimum_major: 2 });
    }

    #[test]
    fn unknown_capability_on_ineligible_device_still_fails() {
        let platform = StaticPlatform::new(vec![dev("good", 2, 0), dev("odd", 1, 7)]);
        let err = select_devices(&platform, &SelectorConfig::default()).unwrap_err();
        assert!(matches!(err, DeviceError::UnknownCapability { device: 1, .. }));
    }

    #[test]
    fn platform_failure_propagates() {
        let err = select_devices(&FailingPlatform, &SelectorConfig::default()).unwrap_err();
        assert_eq!(err, DeviceError::Platform(PlatformError::new("driver went away")));
    }

    // ── fatal exit ────────────────────────────────────────────────────────

    #[test]
    fn fatal_diagnostic_is_written_once() {
        let mut out = Vec::new();
        write_fatal(&mut out, &DeviceError::NoDevices).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "no suitable compute devices found\n");
    }

    #[test]
    fn floor_is_configurable() {
        let platform = StaticPlatform::new(vec![dev("fermi", 2, 0), dev("kepler", 3, 0)]);
        let config = SelectorConfig { min_compute_major: 3 };
        assert_eq!(select_devices(&platform, &config).unwrap(), vec![DeviceId(1)]);
    }
}
