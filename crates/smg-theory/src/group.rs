use serde::{Deserialize, Serialize};
use smg_core::errors::{ErrorInfo, SmgError};

use crate::Rational;

fn invalid_index(index: u32, message: &str) -> SmgError {
    SmgError::Group(
        ErrorInfo::new("invalid-group-index", message)
            .with_context("index", index)
            .with_hint("use 1 for U(1), 2 for SU(2) and 3 for SU(3)"),
    )
}

/// Factor of the Standard Model gauge group, identified by its SU(N) index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GaugeGroup {
    /// Hypercharge U(1), index 1.
    U1,
    /// Weak isospin SU(2), index 2.
    SU2,
    /// Colour SU(3), index 3.
    SU3,
}

impl GaugeGroup {
    /// All factors in (U(1), SU(2), SU(3)) order.
    pub const ALL: [GaugeGroup; 3] = [GaugeGroup::U1, GaugeGroup::SU2, GaugeGroup::SU3];

    /// Resolves the factor for `index` (1, 2 or 3).
    pub fn from_index(index: u32) -> Result<Self, SmgError> {
        match index {
            1 => Ok(GaugeGroup::U1),
            2 => Ok(GaugeGroup::SU2),
            3 => Ok(GaugeGroup::SU3),
            other => Err(invalid_index(
                other,
                "group index is not a Standard Model factor",
            )),
        }
    }

    /// Returns the N of SU(N), with 1 standing for U(1).
    pub fn index(self) -> u32 {
        match self {
            GaugeGroup::U1 => 1,
            GaugeGroup::SU2 => 2,
            GaugeGroup::SU3 => 3,
        }
    }

    /// Quadratic Casimir of the adjoint representation.
    pub fn adjoint_casimir(self) -> Rational {
        match self {
            GaugeGroup::U1 => Rational::from_integer(0),
            other => Rational::from_integer(i64::from(other.index())),
        }
    }

    /// Dimension of the adjoint representation (number of generators).
    pub fn adjoint_dimension(self) -> i64 {
        match self {
            GaugeGroup::U1 => 1,
            other => {
                let n = i64::from(other.index());
                n * n - 1
            }
        }
    }
}

/// Quadratic Casimir C2(A) of the adjoint of U(1) (`n == 1`) or SU(n).
///
/// The abelian adjoint is trivial, so U(1) yields zero.
pub fn adjoint_casimir(n: u32) -> Result<Rational, SmgError> {
    match n {
        0 => Err(invalid_index(n, "group index must be at least 1")),
        1 => Ok(Rational::from_integer(0)),
        n => Ok(Rational::from_integer(i64::from(n))),
    }
}

/// Dimension D(A) of the adjoint of U(1) (`n == 1`) or SU(n).
pub fn adjoint_dimension(n: u32) -> Result<i64, SmgError> {
    match n {
        0 => Err(invalid_index(n, "group index must be at least 1")),
        1 => Ok(1),
        n => {
            let wide = i64::from(n);
            wide.checked_mul(wide)
                .map(|square| square - 1)
                .ok_or_else(|| invalid_index(n, "adjoint dimension overflows i64"))
        }
    }
}
