use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::scene::{Camera, GeometryHandle, RenderConfig, SceneView};

/// Storage bindings must not be zero-sized; empty sections upload this many
/// zero bytes instead. Counts in [`SceneParams`] stay zero.
const MIN_BUFFER_SIZE: usize = 16;

/// Device-side (kind, offset) entry for the object and light tables.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct GpuRecordRef {
    pub kind: u32,
    /// Byte offset into the geometry buffer.
    pub offset: u32,
}

/// Uniform block describing the uploaded scene.
///
///  offset  0  render          RenderConfig (32)
///  offset 32  camera          Camera       (48)
///  offset 80  object_count    u32
///  offset 84  light_count     u32
///  offset 88  material_count  u32
///  offset 92  geometry_size   u32
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SceneParams {
    pub render: RenderConfig,
    pub camera: Camera,
    pub object_count: u32,
    pub light_count: u32,
    pub material_count: u32,
    pub geometry_size: u32,
}

impl SceneParams {
    pub fn from_view(view: &SceneView<'_>) -> Result<Self> {
        Ok(Self {
            render: *view.render,
            camera: *view.camera,
            object_count: u32::try_from(view.objects.len()).context("too many objects")?,
            light_count: u32::try_from(view.lights.len()).context("too many lights")?,
            material_count: u32::try_from(view.materials.len()).context("too many materials")?,
            geometry_size: u32::try_from(view.geometry.len())
                .context("geometry exceeds 4 GiB")?,
        })
    }
}

/// Converts host handles to device entries.
///
/// Fails if an offset does not fit the 32-bit device addressing.
pub fn pack_records(handles: &[GeometryHandle]) -> Result<Vec<GpuRecordRef>> {
    handles
        .iter()
        .map(|h| {
            let offset = u32::try_from(h.offset)
                .with_context(|| format!("{} record offset {} exceeds 4 GiB", h.kind, h.offset))?;
            Ok::<_, anyhow::Error>(GpuRecordRef { kind: h.kind.as_u32(), offset })
        })
        .collect()
}

/// Device copies of a finished scene.
///
/// Upload is one-shot; rebuilding the scene means uploading again.
pub struct SceneBuffers {
    pub geometry: wgpu::Buffer,
    pub objects: wgpu::Buffer,
    pub lights: wgpu::Buffer,
    pub materials: wgpu::Buffer,
    pub params: wgpu::Buffer,
    pub counts: SceneParams,
}

impl SceneBuffers {
    /// Uploads every scene section into its own buffer.
    pub fn upload(device: &wgpu::Device, view: &SceneView<'_>) -> Result<Self> {
        let counts = SceneParams::from_view(view)?;
        let objects = pack_records(view.objects)?;
        let lights = pack_records(view.lights)?;

        let dangling = view.dangling_lights().count();
        if dangling > 0 {
            log::warn!("{dangling} light(s) reference geometry past the end of the blob");
        }

        let buffers = Self {
            geometry: storage_buffer(device, "lumen scene geometry", view.geometry),
            objects: storage_buffer(device, "lumen scene objects", bytemuck::cast_slice(&objects)),
            lights: storage_buffer(device, "lumen scene lights", bytemuck::cast_slice(&lights)),
            materials: storage_buffer(
                device,
                "lumen scene materials",
                bytemuck::cast_slice(view.materials),
            ),
            params: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("lumen scene params"),
                contents: bytemuck::bytes_of(&counts),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            }),
            counts,
        };

        log::debug!(
            "uploaded scene: {} objects, {} lights, {} materials, {} bytes of geometry",
            counts.object_count,
            counts.light_count,
            counts.material_count,
            counts.geometry_size,
        );

        Ok(buffers)
    }
}

fn storage_buffer(device: &wgpu::Device, label: &str, contents: &[u8]) -> wgpu::Buffer {
    let zeros = [0u8; MIN_BUFFER_SIZE];
    let contents = if contents.is_empty() { &zeros[..] } else { contents };

    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
    })
}
