pub mod background;
pub mod camera;
pub mod cli;
pub mod controller;
pub mod frame;
pub mod geometry;
pub mod renderer;
pub mod scene;
pub mod scroll;
pub mod starfield;
pub mod types;

pub use scene::{build_scene, Scene, SceneOptions};
