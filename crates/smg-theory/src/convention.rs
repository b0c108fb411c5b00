use serde::{Deserialize, Serialize};

use crate::Rational;

fn default_gut_u1_normalized() -> bool {
    true
}

/// Normalization conventions applied while computing Casimir eigenvalues.
///
/// The value is read-only for the duration of a computation. Build it once and
/// share it by reference between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupConvention {
    /// Embed hypercharge with the GUT normalization sqrt(3/5).
    #[serde(default = "default_gut_u1_normalized")]
    pub gut_u1_normalized: bool,
}

impl Default for GroupConvention {
    fn default() -> Self {
        Self {
            gut_u1_normalized: default_gut_u1_normalized(),
        }
    }
}

impl GroupConvention {
    /// GUT-normalized hypercharge (the default).
    pub fn gut() -> Self {
        Self {
            gut_u1_normalized: true,
        }
    }

    /// Plain Standard Model hypercharge normalization.
    pub fn standard_model() -> Self {
        Self {
            gut_u1_normalized: false,
        }
    }

    /// Squared coupling rescaling applied to the U(1) Casimir.
    pub fn u1_normalization(&self) -> Rational {
        if self.gut_u1_normalized {
            Rational::new(3, 5)
        } else {
            Rational::from_integer(1)
        }
    }
}
