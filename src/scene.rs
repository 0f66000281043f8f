use crate::background::BackgroundImage;
use crate::camera::Camera;
use crate::geometry::{self, MeshData};
use crate::starfield::{self, RandomSource, STAR_COUNT};
use crate::types::{rgb, GridVertex};
use glam::{EulerRot, Mat4, Quat, Vec3};

pub const TORUS_RADIUS: f32 = 10.0;
pub const TORUS_TUBE: f32 = 3.0;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;
pub const TORUS_COLOR: u32 = 0xff6347;

pub const STAR_SEGMENTS: u32 = 24;
pub const STAR_COLOR: u32 = 0xffffff;

pub const GRID_SIZE: f32 = 200.0;
pub const GRID_DIVISIONS: u32 = 50;
pub const GRID_CENTER_COLOR: u32 = 0x444444;
pub const GRID_COLOR: u32 = 0x888888;

pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

pub type MeshId = usize;
pub type ObjectId = usize;

/// Position, Euler rotation (XYZ order), and scale
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// A renderable: mesh reference, transform, and material color
#[derive(Debug, Clone, Copy)]
pub struct SceneObject {
    pub mesh: MeshId,
    pub transform: Transform,
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: [f32; 3],
}

/// Container of everything submitted for rendering.
///
/// Objects and meshes are append-only: nothing is ever removed, and
/// everything referenced at render time has been added up front.
pub struct Scene {
    pub meshes: Vec<MeshData>,
    pub objects: Vec<SceneObject>,
    pub point_light: PointLight,
    pub ambient_light: AmbientLight,
    pub grid: Option<Vec<GridVertex>>,
    pub background: Option<BackgroundImage>,
    /// The torus; the frame driver and scroll handler spin this one
    pub primary: ObjectId,
}

impl Scene {
    pub fn add_mesh(&mut self, mesh: MeshData) -> MeshId {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn primary_mut(&mut self) -> &mut SceneObject {
        &mut self.objects[self.primary]
    }

    pub fn primary(&self) -> &SceneObject {
        &self.objects[self.primary]
    }
}

/// Knobs for scene assembly; defaults reproduce the original scene
#[derive(Debug, Clone)]
pub struct SceneOptions {
    pub star_count: usize,
    pub grid: bool,
    pub aspect: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            grid: true,
            aspect: 800.0 / 600.0,
        }
    }
}

/// Assembles the static scene: torus, starfield, grid helper, lights.
///
/// Deterministic apart from star placement, which comes from `rng`.
/// The background image is loaded separately and attached when it
/// resolves.
pub fn build_scene(options: &SceneOptions, rng: &mut dyn RandomSource) -> (Scene, Camera) {
    let mut scene = Scene {
        meshes: Vec::new(),
        objects: Vec::new(),
        point_light: PointLight {
            position: POINT_LIGHT_POSITION,
            color: rgb(0xffffff),
        },
        ambient_light: AmbientLight {
            color: rgb(0xffffff),
        },
        grid: None,
        background: None,
        primary: 0,
    };

    let torus_mesh = scene.add_mesh(geometry::torus(
        TORUS_RADIUS,
        TORUS_TUBE,
        TORUS_RADIAL_SEGMENTS,
        TORUS_TUBULAR_SEGMENTS,
    ));
    scene.primary = scene.add(SceneObject {
        mesh: torus_mesh,
        transform: Transform::default(),
        color: rgb(TORUS_COLOR),
    });

    // All stars share one unit sphere; the instance scale carries the
    // per-star radius.
    let star_mesh = scene.add_mesh(geometry::uv_sphere(1.0, STAR_SEGMENTS, STAR_SEGMENTS));
    for star in starfield::generate(options.star_count, rng) {
        scene.add(SceneObject {
            mesh: star_mesh,
            transform: Transform {
                position: star.position,
                rotation: Vec3::ZERO,
                scale: Vec3::splat(star.radius),
            },
            color: rgb(STAR_COLOR),
        });
    }

    if options.grid {
        scene.grid = Some(geometry::grid_helper(
            GRID_SIZE,
            GRID_DIVISIONS,
            rgb(GRID_CENTER_COLOR),
            rgb(GRID_COLOR),
        ));
    }

    let camera = Camera::new(options.aspect);
    (scene, camera)
}
