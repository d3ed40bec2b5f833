pub mod animation;
pub mod app;
pub mod camera;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod label;
pub mod layout;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animation::*;
pub use app::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use draw::*;
pub use error::*;
pub use geometry::*;
pub use interaction::*;
pub use label::*;
pub use layout::*;
pub use scene::*;
