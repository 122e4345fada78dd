// glview-core/src/types/display.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy used to fit the design resolution onto the physical screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// Stretch each axis independently; the aspect ratio is not preserved.
    ExactFit,
    /// Fill the screen with a uniform scale; overflow is cropped.
    NoBorder,
    /// Fit the whole design area with a uniform scale; borders may appear.
    ShowAll,
    /// No policy chosen yet.
    #[default]
    Unknown,
}

impl ResolutionPolicy {
    /// `true` for every policy except [`ResolutionPolicy::Unknown`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactFit => "exact_fit",
            Self::NoBorder => "no_border",
            Self::ShowAll => "show_all",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
