//! Lumen host crate.
//!
//! This crate owns the host-side pieces of the renderer: compute device
//! selection, scene assembly with material deduplication, and the upload of
//! finished scenes to the GPU.

pub mod coords;
pub mod device;
pub mod gpu;
pub mod logging;
pub mod naming;
pub mod paint;
pub mod scene;
