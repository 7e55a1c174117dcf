//! UI components for the landing page.

pub mod landing;
pub mod scene_background;
pub mod theme_toggle;
