//! End-to-end host flow: select a device, build a scene the way script
//! callbacks would, hand it off, tear it down.

use lumen_host::coords::Vec3;
use lumen_host::device::{select_devices, DeviceId, DeviceProperties, SelectorConfig, StaticPlatform};
use lumen_host::gpu::{GpuContext, GpuInit, SceneBuffers};
use lumen_host::logging::{init_logging, LoggingConfig};
use lumen_host::paint::{Color, Material};
use lumen_host::scene::{DiscRecord, ObjKind, Scene, SceneState, SphereRecord};

fn device(name: &str, major: u32, minor: u32) -> DeviceProperties {
    DeviceProperties {
        name: name.to_owned(),
        major,
        minor,
        multiprocessor_count: 8,
        clock_rate_khz: 1_400_000,
        total_memory_bytes: 1 << 30,
    }
}

/// Opaque stand-in for the script interpreter state.
#[derive(Debug, PartialEq)]
struct Interpreter(u32);

fn build_scene(scene: &mut Scene<Interpreter>) {
    let red = Material::diffuse(Color::new(0.8, 0.1, 0.1));
    let green = Material::diffuse(Color::new(0.1, 0.8, 0.1));
    let lamp = Material::emissive(Color::new(4.0, 4.0, 4.0));

    for i in 0..4 {
        let m = scene
            .insert_material(if i % 2 == 0 { red } else { green })
            .unwrap();
        scene
            .push_sphere(Vec3::new(i as f32, 0.0, 0.0), 0.5, m)
            .unwrap();
    }

    let lamp_id = scene.insert_material(lamp).unwrap();
    scene
        .push_light(&DiscRecord::new(
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            1.0,
            lamp_id,
        ))
        .unwrap();
}

#[test]
fn select_then_build_then_teardown() {
    init_logging(LoggingConfig::default());

    let platform = StaticPlatform::new(vec![
        device("old", 1, 1),
        device("mid", 2, 0),
        device("new", 3, 0),
    ]);
    let ids = select_devices(&platform, &SelectorConfig::default()).unwrap();
    assert_eq!(ids, vec![DeviceId(1), DeviceId(2)]);

    let mut scene = Scene::new();
    scene.attach_interpreter(Interpreter(7));
    build_scene(&mut scene);
    assert_eq!(scene.state(), SceneState::Building);

    {
        let view = scene.finish();
        assert_eq!(view.objects.len(), 5);
        assert_eq!(view.lights.len(), 1);
        assert_eq!(view.materials.len(), 3);
        assert_eq!(view.dangling_lights().count(), 0);

        let light = view.lights[0];
        assert_eq!(light.kind, ObjKind::Disc);
        let disc: DiscRecord = view.resolve(light).unwrap();
        assert_eq!(disc.material, 2);

        let first: SphereRecord = view.resolve(view.objects[0]).unwrap();
        let second: SphereRecord = view.resolve(view.objects[1]).unwrap();
        assert_eq!(first.material, 0);
        assert_eq!(second.material, 1);
    }
    assert_eq!(scene.state(), SceneState::Ready);

    scene.destroy();
    assert_eq!(scene.state(), SceneState::Empty);
    assert_eq!(scene.object_count(), 0);
    assert_eq!(scene.light_count(), 0);
    assert_eq!(scene.material_count(), 0);
    assert_eq!(scene.geometry_size(), 0);
    assert_eq!(scene.interpreter(), Some(&Interpreter(7)));

    // Rebuilding after teardown starts handles from zero again.
    build_scene(&mut scene);
    assert_eq!(scene.material_count(), 3);
    let view = scene.view();
    let first: SphereRecord = view.resolve(view.objects[0]).unwrap();
    assert_eq!(first.material, 0);
}

#[test]
fn empty_scene_teardown() {
    let mut scene: Scene = Scene::new();
    scene.destroy();
    scene.destroy();
    assert_eq!(scene.state(), SceneState::Empty);
    assert!(!scene.is_allocated());
    assert!(scene.view().is_empty());
}

#[test]
fn upload_when_adapter_available() {
    init_logging(LoggingConfig::default());

    let ctx = match GpuContext::new_blocking(GpuInit::default()) {
        Ok(ctx) => ctx,
        Err(e) => {
            log::warn!("skipping upload test: {e:#}");
            return;
        }
    };

    let mut scene = Scene::new();
    build_scene(&mut scene);
    let buffers = SceneBuffers::upload(ctx.device(), &scene.finish()).unwrap();

    assert_eq!(buffers.counts.object_count, 5);
    assert_eq!(buffers.counts.light_count, 1);
    assert_eq!(buffers.counts.material_count, 3);
    assert_eq!(buffers.geometry.size(), scene.geometry_size());

    // Empty sections still get a bindable buffer.
    let mut empty: Scene = Scene::new();
    let buffers = SceneBuffers::upload(ctx.device(), &empty.finish()).unwrap();
    assert_eq!(buffers.counts.light_count, 0);
    assert!(buffers.lights.size() > 0);
}
