//! Animated 3D background scene.
//!
//! Renders a decorative scene on a canvas behind page content with:
//! - A static starfield that slowly yaws as a group
//! - A flowing field of colored particles that drifts sideways and wraps
//! - Rotating, bobbing wireframe octahedra
//! - A camera that eases towards the pointer
//! - Light/dark appearance following the `light-theme` body class
//!
//! # Example
//!
//! ```ignore
//! use civic_landing::SceneBackground;
//!
//! view! { <SceneBackground /> }
//! ```

mod camera;
mod component;
pub mod config;
mod field;
mod frame_loop;
mod host;
mod lifecycle;
mod links;
mod prism;
mod render;
mod state;
pub mod theme;

pub use component::SceneBackground;
pub use config::SceneConfig;
pub use theme::{LIGHT_THEME_CLASS, ThemeMode};
