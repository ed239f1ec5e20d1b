use crate::paint::Material;

use super::shapes::Shape;
use super::{
    Camera, GeometryBlob, GeometryHandle, LightIndex, MaterialId, MaterialTable, ObjKind,
    RenderConfig, SceneError, SceneView,
};

/// Lifecycle state of a [`Scene`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SceneState {
    /// Nothing allocated.
    Empty,
    /// Producers are appending geometry, lights, and materials.
    Building,
    /// Handed to the renderer through [`Scene::finish`].
    Ready,
}

/// Host-side scene under construction.
///
/// Owns:
/// - the geometry blob and the index of every object record in it
/// - the light index (subset of objects that emit)
/// - the deduplicated material table
/// - render/camera configuration
/// - an opaque interpreter handle `H` for the driving script engine
///
/// Mutation takes `&mut self`; construction is single-threaded by contract.
/// Teardown releases geometry, light, and material storage only. The
/// configuration values and the interpreter handle outlive it.
#[derive(Debug)]
pub struct Scene<H = ()> {
    geometry: GeometryBlob,
    objects: Vec<GeometryHandle>,
    lights: LightIndex,
    materials: MaterialTable,

    render: RenderConfig,
    camera: Camera,
    interpreter: Option<H>,

    state: SceneState,
}

impl<H> Default for Scene<H> {
    fn default() -> Self {
        Self::with_config(RenderConfig::default(), Camera::default())
    }
}

impl<H> Scene<H> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(render: RenderConfig, camera: Camera) -> Self {
        Self {
            geometry: GeometryBlob::new(),
            objects: Vec::new(),
            lights: LightIndex::new(),
            materials: MaterialTable::new(),
            render,
            camera,
            interpreter: None,
            state: SceneState::Empty,
        }
    }

    #[inline]
    pub fn state(&self) -> SceneState {
        self.state
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[inline]
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    #[inline]
    pub fn set_render(&mut self, render: RenderConfig) {
        self.render = render;
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Stores the interpreter handle, returning the previous one.
    #[inline]
    pub fn attach_interpreter(&mut self, handle: H) -> Option<H> {
        self.interpreter.replace(handle)
    }

    #[inline]
    pub fn detach_interpreter(&mut self) -> Option<H> {
        self.interpreter.take()
    }

    #[inline]
    pub fn interpreter(&self) -> Option<&H> {
        self.interpreter.as_ref()
    }

    #[inline]
    pub fn interpreter_mut(&mut self) -> Option<&mut H> {
        self.interpreter.as_mut()
    }

    // ── building ──────────────────────────────────────────────────────────

    /// Returns the handle of an equal material, inserting it if absent.
    pub fn insert_material(&mut self, material: Material) -> Result<MaterialId, SceneError> {
        self.begin_mutation();
        self.materials.insert(material)
    }

    /// Registers a light referencing a geometry record by offset.
    ///
    /// The offset is not checked; the record must exist by the time the scene
    /// is finished.
    pub fn add_light(&mut self, kind: ObjKind, offset: u64) -> Result<(), SceneError> {
        self.begin_mutation();
        self.lights.append(kind, offset)
    }

    /// Appends an untyped record of `kind` to the geometry blob.
    pub fn append_geometry_bytes(
        &mut self,
        kind: ObjKind,
        record: &[u8],
    ) -> Result<GeometryHandle, SceneError> {
        self.begin_mutation();
        // Reserve the index slot first so a failure leaves both in sync.
        self.objects
            .try_reserve(1)
            .map_err(|e| SceneError::out_of_memory("object index", e))?;
        let offset = self.geometry.append_bytes(record)?;

        let handle = GeometryHandle::new(kind, offset);
        self.objects.push(handle);
        Ok(handle)
    }

    /// Appends a typed record to the geometry blob.
    #[inline]
    pub fn push_object<S: Shape>(&mut self, record: &S) -> Result<GeometryHandle, SceneError> {
        self.append_geometry_bytes(S::KIND, bytemuck::bytes_of(record))
    }

    /// Appends a typed record and registers it as a light.
    ///
    /// The light slot is reserved before the record is written, so a failure
    /// leaves neither the object nor the light behind.
    pub fn push_light<S: Shape>(&mut self, record: &S) -> Result<GeometryHandle, SceneError> {
        self.begin_mutation();
        self.lights.reserve(1)?;
        let handle = self.push_object(record)?;
        self.lights.append(handle.kind, handle.offset)?;
        Ok(handle)
    }

    fn begin_mutation(&mut self) {
        if self.state == SceneState::Ready {
            log::debug!("scene modified after finish; back to building");
        }
        self.state = SceneState::Building;
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn geometry(&self) -> &GeometryBlob {
        &self.geometry
    }

    /// Every object record, in append order.
    #[inline]
    pub fn objects(&self) -> &[GeometryHandle] {
        &self.objects
    }

    #[inline]
    pub fn lights(&self) -> &LightIndex {
        &self.lights
    }

    #[inline]
    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    #[inline]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Geometry blob size in bytes.
    #[inline]
    pub fn geometry_size(&self) -> u64 {
        self.geometry.len()
    }

    /// Whether any geometry, light, or material storage is held.
    pub fn is_allocated(&self) -> bool {
        self.geometry.is_allocated()
            || self.objects.capacity() > 0
            || self.lights.is_allocated()
            || self.materials.is_allocated()
    }

    // ── handoff / teardown ────────────────────────────────────────────────

    /// Marks construction complete and lends the scene to the renderer.
    ///
    /// The scene cannot be mutated or destroyed while the view is alive.
    pub fn finish(&mut self) -> SceneView<'_> {
        self.state = SceneState::Ready;
        log::debug!(
            "scene ready: {} objects, {} lights, {} materials, {} bytes",
            self.objects.len(),
            self.lights.len(),
            self.materials.len(),
            self.geometry.len(),
        );
        self.view()
    }

    /// Read-only view of the current contents without a state change.
    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            geometry: self.geometry.as_bytes(),
            objects: &self.objects,
            lights: self.lights.as_slice(),
            materials: self.materials.as_slice(),
            render: &self.render,
            camera: &self.camera,
        }
    }

    /// Releases geometry, light, and material storage and resets all counts.
    ///
    /// No-op on an empty scene; safe to call from every exit path.
    pub fn destroy(&mut self) {
        if self.state == SceneState::Empty && !self.is_allocated() {
            return;
        }

        log::debug!(
            "destroying scene: {} objects, {} lights, {} materials, {} bytes",
            self.objects.len(),
            self.lights.len(),
            self.materials.len(),
            self.geometry.len(),
        );

        if self.geometry.is_allocated() {
            self.geometry.release();
        }
        if self.objects.capacity() > 0 {
            self.objects = Vec::new();
        }
        if self.lights.is_allocated() {
            self.lights.release();
        }
        if self.materials.is_allocated() {
            self.materials.release();
        }

        self.state = SceneState::Empty;
    }
}

impl<H> Drop for Scene<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;
    use crate::paint::Color;
    use crate::scene::shapes::sphere::SphereRecord;

    fn assert_torn_down<H>(scene: &Scene<H>) {
        assert_eq!(scene.state(), SceneState::Empty);
        assert_eq!(scene.object_count(), 0);
        assert_eq!(scene.light_count(), 0);
        assert_eq!(scene.material_count(), 0);
        assert_eq!(scene.geometry_size(), 0);
        assert!(!scene.is_allocated());
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn new_scene_is_empty() {
        let scene: Scene = Scene::new();
        assert_torn_down(&scene);
    }

    #[test]
    fn destroy_on_empty_scene_is_noop() {
        let mut scene: Scene = Scene::new();
        scene.destroy();
        assert_torn_down(&scene);
    }

    #[test]
    fn destroy_twice_matches_destroy_once() {
        let mut scene: Scene = Scene::new();
        let m = scene.insert_material(Material::default()).unwrap();
        scene.push_sphere(Vec3::zero(), 1.0, m).unwrap();
        scene.add_light(ObjKind::Sphere, 0).unwrap();

        scene.destroy();
        assert_torn_down(&scene);
        scene.destroy();
        assert_torn_down(&scene);
    }

    #[test]
    fn any_mutation_enters_building() {
        let mut scene: Scene = Scene::new();
        scene.add_light(ObjKind::Disc, 0).unwrap();
        assert_eq!(scene.state(), SceneState::Building);
    }

    #[test]
    fn finish_then_mutate_returns_to_building() {
        let mut scene: Scene = Scene::new();
        scene.insert_material(Material::default()).unwrap();

        let view = scene.finish();
        assert_eq!(view.materials.len(), 1);
        assert_eq!(scene.state(), SceneState::Ready);

        scene.insert_material(Material::emissive(Color::white())).unwrap();
        assert_eq!(scene.state(), SceneState::Building);
    }

    #[test]
    fn teardown_keeps_config_and_interpreter() {
        let render = RenderConfig { width: 32, height: 16, ..RenderConfig::default() };
        let mut scene: Scene<&'static str> = Scene::with_config(render, Camera::default());
        scene.attach_interpreter("lua");
        scene.insert_material(Material::default()).unwrap();

        scene.destroy();

        assert_eq!(scene.render().width, 32);
        assert_eq!(scene.interpreter(), Some(&"lua"));
    }

    // ── building ──────────────────────────────────────────────────────────

    #[test]
    fn objects_are_indexed_in_append_order() {
        let mut scene: Scene = Scene::new();
        let m = scene.insert_material(Material::default()).unwrap();

        let a = scene.push_sphere(Vec3::zero(), 1.0, m).unwrap();
        let b = scene
            .push_plane(Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), m)
            .unwrap();

        assert_eq!(scene.objects(), &[a, b]);
        assert_eq!(a.offset, 0);
        assert_eq!(b.offset, 20);
        assert_eq!(scene.geometry_size(), 48);
    }

    #[test]
    fn push_light_indexes_object_and_light() {
        let mut scene: Scene = Scene::new();
        let lamp = scene.insert_material(Material::emissive(Color::white())).unwrap();
        let m = scene.insert_material(Material::default()).unwrap();

        scene.push_sphere(Vec3::zero(), 1.0, m).unwrap();
        let light = scene
            .push_light(&SphereRecord::new(Vec3::new(0.0, 5.0, 0.0), 0.5, lamp))
            .unwrap();

        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.lights().as_slice(), &[light]);

        let stored: SphereRecord = scene.geometry().read(light.offset).unwrap();
        assert_eq!(stored.material, lamp.0);
    }

    #[test]
    fn push_light_keeps_object_and_light_indices_in_step() {
        let mut scene: Scene = Scene::new();
        let lamp = scene.insert_material(Material::emissive(Color::white())).unwrap();

        for i in 0..16 {
            let h = scene
                .push_light(&SphereRecord::new(Vec3::splat(i as f32), 0.25, lamp))
                .unwrap();
            assert_eq!(scene.objects().last(), Some(&h));
            assert_eq!(scene.lights().as_slice().last(), Some(&h));
        }

        assert_eq!(scene.object_count(), scene.light_count());
        assert_eq!(scene.objects(), scene.lights().as_slice());
    }

    #[test]
    fn light_may_precede_its_geometry() {
        let mut scene: Scene = Scene::new();
        scene.add_light(ObjKind::Sphere, 0).unwrap();
        let m = scene.insert_material(Material::default()).unwrap();
        let h = scene.push_sphere(Vec3::zero(), 2.0, m).unwrap();

        let view = scene.finish();
        assert_eq!(view.lights[0].offset, h.offset);
        assert!(view.resolve::<SphereRecord>(view.lights[0]).is_some());
    }
}
