//! Seams towards the rendering and windowing collaborators.

use glview_core::types::{Rect, Size};

/// Receives geometry produced by the view transform.
///
/// `set_clip_region` is called synchronously at the end of every recompute of
/// the transform, so the renderer's clip region never lags behind a resize.
pub trait RenderContext {
    /// The screen-space region content is rendered into, with the scale that
    /// maps design units onto it.
    fn set_clip_region(&mut self, viewport: Rect, scale_x: f64, scale_y: f64);

    /// Screen-space viewport requested through `set_viewport_in_points`.
    fn set_viewport(&mut self, _rect: Rect) {}

    /// Screen-space scissor box requested through `set_scissor_in_points`.
    fn set_scissor(&mut self, _rect: Rect) {}
}

/// The drawable surface owned by the windowing layer.
pub trait WindowSurface {
    fn current_screen_size(&self) -> Size;
}
