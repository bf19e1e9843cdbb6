#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The trigonometric mode of a context. This will affect the evaluation of input to trigonometric
/// functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum TrigMode {
    /// Use radians.
    Radians,

    /// Use degrees.
    #[default]
    Degrees,
}

impl TrigMode {
    /// Converts an angle in this mode to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            TrigMode::Radians => angle,
            TrigMode::Degrees => angle.to_radians(),
        }
    }
}
