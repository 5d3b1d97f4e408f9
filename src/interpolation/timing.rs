use crate::value::Interpolable;
use serde::{Deserialize, Serialize};

/// Timing modes available for keyframe interpolation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    /// Constant-rate blend
    #[default]
    Linear,
    /// Ease-in/ease-out blend (`3t^2 - 2t^3`)
    Smooth,
}

/// Name table for timing modes; extend here when adding a mode.
const TIMING_NAMES: [(Timing, &str); 2] = [(Timing::Linear, "linear"), (Timing::Smooth, "smooth")];

impl Timing {
    /// Get the name of this timing mode
    #[inline]
    pub fn name(&self) -> &'static str {
        TIMING_NAMES
            .iter()
            .find(|(timing, _)| timing == self)
            .map(|(_, name)| *name)
            .unwrap_or("linear")
    }

    /// Dispatch to the adapter operation this timing mode selects.
    #[inline]
    pub fn blend<A: Interpolable>(&self, adapter: &A, a: &A::Value, b: &A::Value, t: f64) -> A::Value {
        match self {
            Timing::Linear => adapter.linear_interpolate(a, b, t),
            Timing::Smooth => adapter.smooth_interpolate(a, b, t),
        }
    }
}

impl From<&str> for Timing {
    fn from(s: &str) -> Self {
        let lowered = s.to_lowercase();
        TIMING_NAMES
            .iter()
            .find(|(_, name)| *name == lowered)
            .map(|(timing, _)| *timing)
            .unwrap_or(Timing::Linear) // Default to linear for unknown names
    }
}
