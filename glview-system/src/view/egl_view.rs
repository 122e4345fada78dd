use std::fmt;
use std::hash::Hash;

use glview_core::config::ViewConfig;
use glview_core::types::{Point, Rect, ResolutionPolicy, Size};

use super::render::{RenderContext, WindowSurface};
use super::transform::ViewTransform;
use crate::error::ViewError;
use crate::input::{TouchDelegate, TouchRegistry, TouchStats};

/// The view an application owns for its drawable surface.
///
/// Couples a [`ViewTransform`] with a [`TouchRegistry`] so raw platform touches
/// are converted with the current viewport. The platform layer forwards resize
/// notifications and touch batches; the application installs the renderer and
/// the touch delegate.
pub struct EglView<I = i64> {
    name: String,
    /// Configured design resolution, applied by the first successful
    /// `initialize` and then owned by the transform.
    pending_design: Option<(Size, ResolutionPolicy)>,
    transform: ViewTransform,
    touches: TouchRegistry<I>,
}

impl<I: fmt::Debug> fmt::Debug for EglView<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EglView")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("touches", &self.touches)
            .finish()
    }
}

impl<I> EglView<I>
where
    I: Eq + Hash + Clone + fmt::Debug,
{
    /// Builds a view from configuration. Nothing is derived until
    /// [`initialize`](Self::initialize) supplies the screen size.
    pub fn new(config: &ViewConfig) -> Result<Self, ViewError> {
        let touches = TouchRegistry::with_capacity(config.max_touches)?;
        Ok(Self {
            name: config.name.clone(),
            pending_design: Some((Size::new(config.design_width, config.design_height), config.policy)),
            transform: ViewTransform::new(),
            touches,
        })
    }

    /// Reads the surface size and applies the design resolution: the configured
    /// one on first use, the transform's current one afterwards.
    pub fn initialize(&mut self, surface: &dyn WindowSurface) -> Result<(), ViewError> {
        let screen_size = surface.current_screen_size();
        let (design, policy) = self
            .pending_design
            .unwrap_or((self.transform.design_resolution_size(), self.transform.policy()));
        self.transform
            .configure(screen_size, design.width, design.height, policy)?;
        self.pending_design = None;
        tracing::info!(
            "EglView '{}': initialized on {}x{} screen, design {}x{} ({}), {} touch slots.",
            self.name,
            screen_size.width,
            screen_size.height,
            design.width,
            design.height,
            policy,
            self.touches.capacity()
        );
        Ok(())
    }

    pub fn on_resize(&mut self, new_screen_size: Size) {
        self.transform.on_screen_resize(new_screen_size);
    }

    pub fn set_frame_size(&mut self, width: f64, height: f64) -> Result<(), ViewError> {
        self.transform.set_frame_size(width, height)
    }

    pub fn set_design_resolution_size(
        &mut self,
        width: f64,
        height: f64,
        policy: ResolutionPolicy,
    ) -> Result<(), ViewError> {
        self.transform.set_design_resolution_size(width, height, policy)?;
        if width > 0.0 && height > 0.0 {
            self.pending_design = None;
            tracing::info!("EglView '{}': design resolution set to {}x{} ({}).", self.name, width, height, policy);
        }
        Ok(())
    }

    pub fn set_content_scale_factor(&mut self, factor: f64) -> Result<(), ViewError> {
        self.transform.set_content_scale_factor(factor)
    }

    /// Renames the view. Empty names are ignored.
    pub fn set_view_name(&mut self, name: &str) {
        if !name.is_empty() {
            self.name = name.to_string();
        }
    }

    pub fn view_name(&self) -> &str {
        &self.name
    }

    pub fn set_touch_delegate(&mut self, delegate: Box<dyn TouchDelegate>) {
        self.touches.set_touch_delegate(delegate);
    }

    pub fn set_render_context(&mut self, render_context: Box<dyn RenderContext>) {
        self.transform.set_render_context(render_context);
    }

    pub fn set_viewport_in_points(&mut self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        self.transform.set_viewport_in_points(x, y, w, h)
    }

    pub fn set_scissor_in_points(&mut self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        self.transform.set_scissor_in_points(x, y, w, h)
    }

    pub fn handle_touches_begin(&mut self, ids: &[I], xs: &[f64], ys: &[f64]) {
        self.touches.process_begin(&self.transform, ids, xs, ys);
    }

    pub fn handle_touches_move(&mut self, ids: &[I], xs: &[f64], ys: &[f64]) {
        self.touches.process_move(&self.transform, ids, xs, ys);
    }

    pub fn handle_touches_end(&mut self, ids: &[I], xs: &[f64], ys: &[f64]) {
        self.touches.process_end(&self.transform, ids, xs, ys);
    }

    pub fn handle_touches_cancel(&mut self, ids: &[I], xs: &[f64], ys: &[f64]) {
        self.touches.process_cancel(&self.transform, ids, xs, ys);
    }

    pub fn touches_began<T: IntoIterator<Item = (I, Point)>>(&mut self, touches: T) {
        self.touches.touches_began(&self.transform, touches);
    }

    pub fn touches_moved<T: IntoIterator<Item = (I, Point)>>(&mut self, touches: T) {
        self.touches.touches_moved(&self.transform, touches);
    }

    pub fn touches_ended<T: IntoIterator<Item = (I, Point)>>(&mut self, touches: T) {
        self.touches.touches_ended(&self.transform, touches);
    }

    pub fn touches_cancelled<T: IntoIterator<Item = (I, Point)>>(&mut self, touches: T) {
        self.touches.touches_cancelled(&self.transform, touches);
    }

    pub fn visible_size(&self) -> Size {
        self.transform.visible_size()
    }

    pub fn visible_origin(&self) -> Point {
        self.transform.visible_origin()
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn touch_registry(&self) -> &TouchRegistry<I> {
        &self.touches
    }

    pub fn touch_stats(&self) -> TouchStats {
        self.touches.stats()
    }

    /// Tears the view down: every live touch is reported as cancelled.
    pub fn end(&mut self) {
        tracing::info!(
            "EglView '{}': ending with {} live touches.",
            self.name,
            self.touches.active_count()
        );
        self.touches.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::delegate::mock::RecordingDelegate;
    use crate::input::TouchPhase;
    use crate::view::render::mock::{FixedWindow, RecordingRenderer, RenderCall};
    use pretty_assertions::assert_eq;

    fn view_config(policy: ResolutionPolicy) -> ViewConfig {
        ViewConfig {
            name: "main".to_string(),
            design_width: 480.0,
            design_height: 320.0,
            policy,
            max_touches: 5,
        }
    }

    #[test]
    fn test_new_rejects_bad_capacity() {
        let config = ViewConfig {
            max_touches: 0,
            ..view_config(ResolutionPolicy::ShowAll)
        };
        assert!(matches!(
            EglView::<i64>::new(&config),
            Err(ViewError::InvalidTouchCapacity { requested: 0, .. })
        ));
    }

    #[test]
    fn test_initialize_applies_configured_design() {
        let renderer = RecordingRenderer::default();
        let mut view: EglView = EglView::new(&view_config(ResolutionPolicy::ShowAll)).unwrap();
        view.set_render_context(Box::new(renderer.clone()));

        view.initialize(&FixedWindow(Size::new(960.0, 640.0))).unwrap();

        assert_eq!(view.transform().scale_x(), 2.0);
        assert_eq!(view.visible_size(), Size::new(480.0, 320.0));
        assert_eq!(
            renderer.take(),
            vec![RenderCall::Clip(Rect::from_coords(0.0, 0.0, 960.0, 640.0), 2.0, 2.0)]
        );
    }

    #[test]
    fn test_initialize_with_unknown_policy_fails() {
        let mut view: EglView = EglView::new(&view_config(ResolutionPolicy::Unknown)).unwrap();
        let result = view.initialize(&FixedWindow(Size::new(960.0, 640.0)));
        assert!(matches!(result, Err(ViewError::UnknownPolicy)));
    }

    #[test]
    fn test_view_name_ignores_empty() {
        let mut view: EglView = EglView::new(&view_config(ResolutionPolicy::ShowAll)).unwrap();
        assert_eq!(view.view_name(), "main");
        view.set_view_name("");
        assert_eq!(view.view_name(), "main");
        view.set_view_name("overlay");
        assert_eq!(view.view_name(), "overlay");
    }

    #[test]
    fn test_touches_follow_resize() {
        let recorder = RecordingDelegate::default();
        let mut view: EglView = EglView::new(&view_config(ResolutionPolicy::ExactFit)).unwrap();
        view.set_touch_delegate(Box::new(recorder.clone()));
        view.initialize(&FixedWindow(Size::new(480.0, 320.0))).unwrap();

        view.handle_touches_begin(&[1], &[100.0], &[50.0]);
        view.on_resize(Size::new(960.0, 640.0));
        view.handle_touches_move(&[1], &[100.0], &[50.0]);

        let batches = recorder.take();
        assert_eq!(batches[0].1[0].location(), Point::new(100.0, 50.0));
        assert_eq!(batches[1].1[0].location(), Point::new(50.0, 25.0));
    }

    #[test]
    fn test_end_cancels_live_touches() {
        let recorder = RecordingDelegate::default();
        let mut view: EglView = EglView::new(&view_config(ResolutionPolicy::ShowAll)).unwrap();
        view.set_touch_delegate(Box::new(recorder.clone()));
        view.initialize(&FixedWindow(Size::new(480.0, 320.0))).unwrap();

        view.touches_began(vec![(3, Point::new(1.0, 1.0)), (9, Point::new(2.0, 2.0))]);
        view.end();

        let batches = recorder.take();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1].0, TouchPhase::Cancelled);
        assert_eq!(batches[1].1.len(), 2);
        assert_eq!(view.touch_registry().active_count(), 0);
    }

    #[test]
    fn test_reinitialize_keeps_current_design() {
        let mut view: EglView = EglView::new(&view_config(ResolutionPolicy::ShowAll)).unwrap();
        view.initialize(&FixedWindow(Size::new(960.0, 640.0))).unwrap();

        view.set_frame_size(1920.0, 1280.0).unwrap();
        assert_eq!(view.transform().scale_x(), 1.0);
        view.initialize(&FixedWindow(Size::new(1920.0, 1280.0))).unwrap();

        assert_eq!(view.transform().design_resolution_size(), Size::new(1920.0, 1280.0));
        assert_eq!(view.transform().viewport_rect(), Rect::from_coords(0.0, 0.0, 1920.0, 1280.0));
        assert!(matches!(
            view.set_frame_size(-1.0, 1.0),
            Err(ViewError::InvalidDesignResolution { .. })
        ));
    }

    #[test]
    fn test_failed_initialize_keeps_configured_design() {
        let mut view: EglView = EglView::new(&view_config(ResolutionPolicy::ShowAll)).unwrap();
        let result = view.initialize(&FixedWindow(Size::new(-1.0, 640.0)));
        assert!(matches!(result, Err(ViewError::InvalidScreenSize { .. })));

        view.initialize(&FixedWindow(Size::new(960.0, 640.0))).unwrap();
        assert_eq!(view.transform().design_resolution_size(), Size::new(480.0, 320.0));
    }

    #[test]
    fn test_design_resolution_change_is_kept_for_later() {
        let mut view: EglView = EglView::new(&view_config(ResolutionPolicy::ShowAll)).unwrap();
        view.initialize(&FixedWindow(Size::new(960.0, 640.0))).unwrap();

        view.set_design_resolution_size(480.0, 640.0, ResolutionPolicy::NoBorder)
            .unwrap();
        view.on_resize(Size::new(960.0, 640.0));

        assert_eq!(view.transform().policy(), ResolutionPolicy::NoBorder);
        assert_eq!(view.visible_origin(), Point::new(0.0, 160.0));
        assert!(view.set_content_scale_factor(2.0).is_err());
    }
}
