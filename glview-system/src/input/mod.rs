pub mod delegate;
pub mod touch;

pub use delegate::{TouchDelegate, TouchPhase};
pub use touch::{Touch, TouchRegistry, TouchStats};
