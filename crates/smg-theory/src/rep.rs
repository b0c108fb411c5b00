use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use smg_core::errors::{ErrorInfo, SmgError};

use crate::Rational;

/// SU(3) dimension to Dynkin label `(p, q)` table.
const SU3_DYNKIN_LABELS: [(u32, (i64, i64)); 4] =
    [(1, (0, 0)), (3, (1, 0)), (6, (2, 0)), (8, (1, 1))];

fn default_multiplicity() -> u32 {
    1
}

fn deserialize_reduced<'de, D>(deserializer: D) -> Result<Rational, D::Error>
where
    D: Deserializer<'de>,
{
    Rational::deserialize(deserializer).map(|raw| raw.reduced())
}

/// Looks up the Dynkin labels `(p, q)` of the SU(3) irrep with dimension `dim3`.
///
/// Conjugate irreps share a dimension, so `3` covers both the triplet and the
/// antitriplet.
pub fn su3_dynkin_labels(dim3: u32) -> Option<(i64, i64)> {
    SU3_DYNKIN_LABELS
        .iter()
        .find(|(dim, _)| *dim == dim3)
        .map(|(_, labels)| *labels)
}

pub(crate) fn unknown_su3_dimension(dim3: u32) -> SmgError {
    SmgError::Representation(
        ErrorInfo::new(
            "unknown-su3-dimension",
            "SU(3) dimension has no entry in the Dynkin label table",
        )
        .with_context("dim3", dim3)
        .with_hint("supported SU(3) dimensions are 1, 3, 6 and 8"),
    )
}

pub(crate) fn arithmetic_overflow(rep: &Representation) -> SmgError {
    SmgError::Representation(
        ErrorInfo::new(
            "dimension-overflow",
            "exact invariant does not fit a 64-bit rational",
        )
        .with_context("representation", rep),
    )
}

pub(crate) fn invalid_su2_dimension(dim2: u32) -> SmgError {
    SmgError::Representation(
        ErrorInfo::new("invalid-su2-dimension", "SU(2) dimension must be 2T+1 >= 1")
            .with_context("dim2", dim2),
    )
}

/// Field statistics, fixing how many degrees of freedom a multiplet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistics {
    /// Two-component Weyl fermion.
    WeylFermion,
    /// Four-component Dirac fermion.
    DiracFermion,
    /// Real scalar field.
    RealScalar,
    /// Complex scalar field.
    ComplexScalar,
}

impl Statistics {
    /// Degrees of freedom relative to a Dirac fermion or complex scalar of the
    /// same gauge quantum numbers.
    pub fn weight(self) -> Rational {
        match self {
            Statistics::WeylFermion | Statistics::RealScalar => Rational::new(1, 2),
            Statistics::DiracFermion | Statistics::ComplexScalar => Rational::from_integer(1),
        }
    }

    /// Short label used when rendering representations.
    pub fn label(self) -> &'static str {
        match self {
            Statistics::WeylFermion => "Weyl",
            Statistics::DiracFermion => "Dirac",
            Statistics::RealScalar => "RealScalar",
            Statistics::ComplexScalar => "ComplexScalar",
        }
    }
}

/// Irreducible representation of SU(3)xSU(2)xU(1) with its field statistics.
///
/// Hypercharge follows the `Q = T3 + Y/2` convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Representation {
    /// Dimension under SU(3); one of 1, 3, 6 or 8.
    pub dim3: u32,
    /// Dimension under SU(2), `2T + 1`.
    pub dim2: u32,
    /// Hypercharge Y, reduced to lowest terms when decoded.
    #[serde(deserialize_with = "deserialize_reduced")]
    pub hypercharge: Rational,
    /// Number of identical copies, e.g. the number of generations.
    #[serde(default = "default_multiplicity")]
    pub multiplicity: u32,
    /// Field statistics of every copy.
    pub statistics: Statistics,
}

impl Representation {
    /// Creates a validated representation.
    pub fn new(
        dim3: u32,
        dim2: u32,
        hypercharge: Rational,
        multiplicity: u32,
        statistics: Statistics,
    ) -> Result<Self, SmgError> {
        let rep = Self {
            dim3,
            dim2,
            hypercharge: hypercharge.reduced(),
            multiplicity,
            statistics,
        };
        rep.validate()?;
        Ok(rep)
    }

    /// Single Weyl fermion multiplet.
    pub fn weyl(dim3: u32, dim2: u32, hypercharge: Rational) -> Result<Self, SmgError> {
        Self::new(dim3, dim2, hypercharge, 1, Statistics::WeylFermion)
    }

    /// Single Dirac fermion multiplet.
    pub fn dirac(dim3: u32, dim2: u32, hypercharge: Rational) -> Result<Self, SmgError> {
        Self::new(dim3, dim2, hypercharge, 1, Statistics::DiracFermion)
    }

    /// Single real scalar multiplet.
    pub fn real_scalar(dim3: u32, dim2: u32, hypercharge: Rational) -> Result<Self, SmgError> {
        Self::new(dim3, dim2, hypercharge, 1, Statistics::RealScalar)
    }

    /// Single complex scalar multiplet.
    pub fn complex_scalar(dim3: u32, dim2: u32, hypercharge: Rational) -> Result<Self, SmgError> {
        Self::new(dim3, dim2, hypercharge, 1, Statistics::ComplexScalar)
    }

    /// Returns a copy with a different multiplicity.
    pub fn with_multiplicity(self, multiplicity: u32) -> Result<Self, SmgError> {
        Self::new(
            self.dim3,
            self.dim2,
            self.hypercharge,
            multiplicity,
            self.statistics,
        )
    }

    /// Returns a copy with different statistics and identical quantum numbers.
    pub fn with_statistics(&self, statistics: Statistics) -> Self {
        Self {
            statistics,
            ..self.clone()
        }
    }

    /// Checks the dimension table, the SU(2) dimension and the multiplicity.
    pub fn validate(&self) -> Result<(), SmgError> {
        if su3_dynkin_labels(self.dim3).is_none() {
            return Err(unknown_su3_dimension(self.dim3));
        }
        if self.dim2 == 0 {
            return Err(invalid_su2_dimension(self.dim2));
        }
        if self.multiplicity == 0 {
            return Err(SmgError::Representation(
                ErrorInfo::new("zero-multiplicity", "multiplicity must be positive")
                    .with_context("representation", self),
            ));
        }
        Ok(())
    }

    /// Number of field components per copy, `dim3 * dim2`.
    pub fn total_dim(&self) -> u64 {
        u64::from(self.dim3) * u64::from(self.dim2)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{},{},{})",
            self.statistics.label(),
            self.dim3,
            self.dim2,
            self.hypercharge,
            self.multiplicity
        )
    }
}
