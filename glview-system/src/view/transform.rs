//! Mapping between screen space and design space.
//!
//! A [`ViewTransform`] holds the last observed screen size, the design
//! resolution chosen by the application and a [`ResolutionPolicy`]. The scale
//! factors and the viewport rectangle are derived from those three values and
//! recomputed synchronously whenever one of them changes. Each recompute ends by
//! pushing the new viewport to the [`RenderContext`], if one is attached.

use std::fmt;

use glview_core::types::{Point, Rect, ResolutionPolicy, Size};

use super::render::RenderContext;
use crate::error::ViewError;

pub struct ViewTransform {
    screen_size: Size,
    design_resolution_size: Size,
    policy: ResolutionPolicy,
    scale_x: f64,
    scale_y: f64,
    viewport_rect: Rect,
    render_context: Option<Box<dyn RenderContext>>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            screen_size: Size::ZERO,
            design_resolution_size: Size::ZERO,
            policy: ResolutionPolicy::Unknown,
            scale_x: 1.0,
            scale_y: 1.0,
            viewport_rect: Rect::ZERO,
            render_context: None,
        }
    }
}

impl fmt::Debug for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewTransform")
            .field("screen_size", &self.screen_size)
            .field("design_resolution_size", &self.design_resolution_size)
            .field("policy", &self.policy)
            .field("scale_x", &self.scale_x)
            .field("scale_y", &self.scale_y)
            .field("viewport_rect", &self.viewport_rect)
            .field("render_context", &self.render_context.is_some())
            .finish()
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the renderer that receives the clip region after each recompute.
    /// Replaces any previously attached renderer.
    pub fn set_render_context(&mut self, render_context: Box<dyn RenderContext>) {
        self.render_context = Some(render_context);
    }

    /// Stores the screen size, design resolution and policy, then re-derives the
    /// scale factors and the viewport.
    ///
    /// A zero design width or height means "not ready yet": the call returns
    /// `Ok` and the previous configuration is kept untouched. An empty screen
    /// size is stored, but scale and viewport keep their previous values until
    /// the next non-empty [`on_screen_resize`](Self::on_screen_resize).
    ///
    /// # Errors
    ///
    /// [`ViewError::UnknownPolicy`] when `policy` is [`ResolutionPolicy::Unknown`];
    /// [`ViewError::InvalidDesignResolution`] for negative or non-finite design
    /// dimensions; [`ViewError::InvalidScreenSize`] for a negative or non-finite
    /// screen size.
    pub fn configure(
        &mut self,
        screen_size: Size,
        design_width: f64,
        design_height: f64,
        policy: ResolutionPolicy,
    ) -> Result<(), ViewError> {
        if !policy.is_known() {
            return Err(ViewError::UnknownPolicy);
        }
        let Some(design) = checked_design_size(design_width, design_height)? else {
            return Ok(());
        };
        if !is_usable_screen(screen_size) {
            return Err(ViewError::InvalidScreenSize {
                width: screen_size.width,
                height: screen_size.height,
            });
        }

        self.screen_size = screen_size;
        self.design_resolution_size = design;
        self.policy = policy;
        self.recompute();
        Ok(())
    }

    /// Same as [`configure`](Self::configure) against the current screen size.
    pub fn set_design_resolution_size(
        &mut self,
        width: f64,
        height: f64,
        policy: ResolutionPolicy,
    ) -> Result<(), ViewError> {
        self.configure(self.screen_size, width, height, policy)
    }

    /// Records the new screen size and re-derives against the stored design
    /// resolution and policy. Derived values are left alone until a policy has
    /// been configured. Negative or non-finite sizes are ignored.
    pub fn on_screen_resize(&mut self, new_screen_size: Size) {
        if !is_usable_screen(new_screen_size) {
            tracing::warn!("ViewTransform: ignoring resize to invalid screen size {:?}.", new_screen_size);
            return;
        }
        self.screen_size = new_screen_size;
        if self.policy.is_known() {
            self.recompute();
        } else {
            tracing::trace!("ViewTransform: resize to {:?} before configuration, derivation skipped.", new_screen_size);
        }
    }

    /// Sets the screen size and the design resolution to the same value, the
    /// state a platform view starts from before the application picks a design
    /// resolution. Re-derives when a policy is already set.
    ///
    /// Dimensions follow the [`configure`](Self::configure) rules: zero is a
    /// no-op, negative or non-finite is [`ViewError::InvalidDesignResolution`].
    pub fn set_frame_size(&mut self, width: f64, height: f64) -> Result<(), ViewError> {
        let Some(size) = checked_design_size(width, height)? else {
            return Ok(());
        };
        self.screen_size = size;
        self.design_resolution_size = size;
        if self.policy.is_known() {
            self.recompute();
        }
        Ok(())
    }

    /// Forces a uniform scale. Only legal while no resolution policy is set;
    /// once a policy is chosen the scale is always derived.
    pub fn set_content_scale_factor(&mut self, factor: f64) -> Result<(), ViewError> {
        if self.policy.is_known() {
            return Err(ViewError::ContentScaleAfterPolicy { policy: self.policy });
        }
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ViewError::InvalidScaleFactor(factor));
        }
        self.scale_x = factor;
        self.scale_y = factor;
        Ok(())
    }

    fn recompute(&mut self) {
        let screen = self.screen_size;
        let design = self.design_resolution_size;
        if screen.is_empty() || design.is_empty() {
            tracing::trace!(
                "ViewTransform: screen {:?} or design {:?} is empty, keeping previous scale.",
                screen,
                design
            );
            return;
        }

        let mut scale_x = screen.width / design.width;
        let mut scale_y = screen.height / design.height;
        match self.policy {
            ResolutionPolicy::NoBorder => {
                let scale = scale_x.max(scale_y);
                scale_x = scale;
                scale_y = scale;
            }
            ResolutionPolicy::ShowAll => {
                let scale = scale_x.min(scale_y);
                scale_x = scale;
                scale_y = scale;
            }
            ResolutionPolicy::ExactFit | ResolutionPolicy::Unknown => {}
        }

        let viewport_width = design.width * scale_x;
        let viewport_height = design.height * scale_y;
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self.viewport_rect = Rect::from_coords(
            (screen.width - viewport_width) / 2.0,
            (screen.height - viewport_height) / 2.0,
            viewport_width,
            viewport_height,
        );

        tracing::debug!(
            policy = %self.policy,
            scale_x,
            scale_y,
            "ViewTransform: viewport recomputed to {:?}",
            self.viewport_rect
        );

        if let Some(render_context) = self.render_context.as_mut() {
            render_context.set_clip_region(self.viewport_rect, scale_x, scale_y);
        }
    }

    /// Converts a screen-space point into design space.
    pub fn to_design_space(&self, screen_point: Point) -> Point {
        Point::new(
            (screen_point.x - self.viewport_rect.origin.x) / self.scale_x,
            (screen_point.y - self.viewport_rect.origin.y) / self.scale_y,
        )
    }

    /// Maps a design-space rectangle onto the screen.
    pub fn rect_to_screen_space(&self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_coords(
            x * self.scale_x + self.viewport_rect.origin.x,
            y * self.scale_y + self.viewport_rect.origin.y,
            w * self.scale_x,
            h * self.scale_y,
        )
    }

    /// Sets the renderer viewport to a rectangle given in design units.
    pub fn set_viewport_in_points(&mut self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        let rect = self.rect_to_screen_space(x, y, w, h);
        if let Some(render_context) = self.render_context.as_mut() {
            render_context.set_viewport(rect);
        }
        rect
    }

    /// Sets the renderer scissor box to a rectangle given in design units.
    pub fn set_scissor_in_points(&mut self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        let rect = self.rect_to_screen_space(x, y, w, h);
        if let Some(render_context) = self.render_context.as_mut() {
            render_context.set_scissor(rect);
        }
        rect
    }

    /// Size of the design area actually visible on screen.
    ///
    /// Under `NoBorder` part of the design area is cropped, so this is the
    /// screen size expressed in design units; otherwise the full design size.
    pub fn visible_size(&self) -> Size {
        match self.policy {
            ResolutionPolicy::NoBorder => Size::new(
                self.screen_size.width / self.scale_x,
                self.screen_size.height / self.scale_y,
            ),
            _ => self.design_resolution_size,
        }
    }

    /// Design-space origin of the visible area; non-zero only under `NoBorder`.
    pub fn visible_origin(&self) -> Point {
        match self.policy {
            ResolutionPolicy::NoBorder => {
                let visible = self.visible_size();
                Point::new(
                    (self.design_resolution_size.width - visible.width) / 2.0,
                    (self.design_resolution_size.height - visible.height) / 2.0,
                )
            }
            _ => Point::ZERO,
        }
    }

    pub fn frame_size(&self) -> Size {
        self.screen_size
    }

    pub fn design_resolution_size(&self) -> Size {
        self.design_resolution_size
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    pub fn viewport_rect(&self) -> Rect {
        self.viewport_rect
    }
}

/// `Ok(None)` when either dimension is zero, the "not ready" state.
fn checked_design_size(width: f64, height: f64) -> Result<Option<Size>, ViewError> {
    if width == 0.0 || height == 0.0 {
        tracing::trace!(
            "ViewTransform: design resolution {}x{} not ready, keeping previous configuration.",
            width,
            height
        );
        return Ok(None);
    }
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(ViewError::InvalidDesignResolution { width, height });
    }
    Ok(Some(Size::new(width, height)))
}

fn is_usable_screen(size: Size) -> bool {
    size.is_valid() && size.width.is_finite() && size.height.is_finite()
}
