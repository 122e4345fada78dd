//! Screen-to-design-space mapping and the view facade.

pub mod egl_view;
pub mod render;
pub mod transform;

pub use egl_view::EglView;
pub use render::{RenderContext, WindowSurface};
pub use transform::ViewTransform;
