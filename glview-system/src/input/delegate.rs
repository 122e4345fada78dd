use std::fmt;

use super::touch::Touch;

/// Phase of a touch batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

impl TouchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TouchPhase::Began => "began",
            TouchPhase::Moved => "moved",
            TouchPhase::Ended => "ended",
            TouchPhase::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of logical touch batches.
///
/// Each callback runs at most once per input batch and never with an empty
/// slice. Touches appear in input order.
pub trait TouchDelegate {
    fn touches_began(&mut self, touches: &[Touch]);
    fn touches_moved(&mut self, touches: &[Touch]);
    fn touches_ended(&mut self, touches: &[Touch]);
    fn touches_cancelled(&mut self, touches: &[Touch]);
}

pub(crate) fn dispatch<D: TouchDelegate + ?Sized>(delegate: &mut D, phase: TouchPhase, touches: &[Touch]) {
    match phase {
        TouchPhase::Began => delegate.touches_began(touches),
        TouchPhase::Moved => delegate.touches_moved(touches),
        TouchPhase::Ended => delegate.touches_ended(touches),
        TouchPhase::Cancelled => delegate.touches_cancelled(touches),
    }
}
