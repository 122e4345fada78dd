//! # GLView System Library (`glview-system`)
//!
//! The view layer of GLView. An application designs its content against a fixed
//! design resolution; this crate maps it onto whatever screen it runs on and
//! turns raw platform touches into stable, design-space touch batches.
//!
//! - [`view::ViewTransform`]: scale factors and viewport for a screen size,
//!   design resolution and [`ResolutionPolicy`](glview_core::types::ResolutionPolicy).
//! - [`input::TouchRegistry`]: binds platform touch ids to a fixed pool of slots
//!   and forwards begin/move/end/cancel batches to a [`input::TouchDelegate`].
//! - [`view::EglView`]: owns both and is what the platform layer talks to.
//!
//! ```rust,ignore
//! use glview_core::config::ConfigLoader;
//! use glview_system::view::EglView;
//!
//! let config = ConfigLoader::load()?;
//! let mut view: EglView = EglView::new(&config.view)?;
//! view.set_touch_delegate(Box::new(my_scene));
//! view.initialize(&window)?;
//! view.handle_touches_begin(&[7], &[100.0], &[50.0]);
//! ```

pub mod error;
pub mod input;
pub mod view;

pub use error::ViewError;
pub use input::{Touch, TouchDelegate, TouchPhase, TouchRegistry, TouchStats};
pub use view::{EglView, RenderContext, ViewTransform, WindowSurface};
