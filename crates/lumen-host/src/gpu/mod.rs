//! Headless GPU context and scene upload.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue without a surface
//! - copying a finished scene into device buffers for the render kernels

mod context;
mod init;
mod upload;

pub use context::GpuContext;
pub use init::GpuInit;
pub use upload::{pack_records, GpuRecordRef, SceneBuffers, SceneParams};
