//! Compute device discovery and selection.
//!
//! This module is responsible for:
//! - querying device properties through a [`DevicePlatform`]
//! - deriving core counts from the compute capability table
//! - filtering to devices that meet the minimum capability floor

mod capability;
mod descriptor;
mod error;
mod platform;
mod select;

pub use capability::cores_per_multiprocessor;
pub use descriptor::{DeviceDescriptor, DeviceId, DeviceProperties};
pub use error::{DeviceError, PlatformError};
pub use platform::{DevicePlatform, StaticPlatform};
pub use select::{describe_device, enumerate_devices, exit_on_fatal, select_devices, SelectorConfig};
