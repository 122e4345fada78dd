use glview_core::error::CoreError;
use glview_core::types::ResolutionPolicy;
use thiserror::Error;

/// Contract violations raised by the view layer.
///
/// Expected runtime conditions (full touch pool, unknown touch ids, a design
/// size of zero during startup) are never reported through this type.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("A resolution policy must be chosen before configuring the view")]
    UnknownPolicy,

    #[error("Invalid design resolution {width}x{height}")]
    InvalidDesignResolution { width: f64, height: f64 },

    #[error("Invalid screen size {width}x{height}")]
    InvalidScreenSize { width: f64, height: f64 },

    #[error("Content scale factor can only be set before a resolution policy is chosen (current policy: {policy})")]
    ContentScaleAfterPolicy { policy: ResolutionPolicy },

    #[error("Invalid content scale factor: {0}")]
    InvalidScaleFactor(f64),

    #[error("Touch capacity must be in 1..={max}, got {requested}")]
    InvalidTouchCapacity { requested: usize, max: usize },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
