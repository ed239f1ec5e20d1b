//! Scene assembly.
//!
//! Responsibilities:
//! - accumulate geometry records in a single byte arena
//! - index lights and objects by (kind, offset)
//! - deduplicate materials behind stable handles
//! - release all of it between runs
//!
//! Shape-specific record types and push helpers live under `scene::shapes`.

mod blob;
mod config;
mod error;
mod kind;
mod lights;
mod materials;
#[allow(clippy::module_inception)]
mod scene;
mod view;

pub mod shapes;

pub use blob::{GeometryBlob, GeometryHandle};
pub use config::{Camera, RenderConfig};
pub use error::SceneError;
pub use kind::ObjKind;
pub use lights::LightIndex;
pub use materials::{MaterialId, MaterialTable};
pub use scene::{Scene, SceneState};
pub use shapes::disc::DiscRecord;
pub use shapes::plane::PlaneRecord;
pub use shapes::sphere::SphereRecord;
pub use shapes::triangle::TriangleRecord;
pub use shapes::Shape;
pub use view::SceneView;
