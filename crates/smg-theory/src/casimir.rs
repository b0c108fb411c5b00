use num_traits::{CheckedDiv, CheckedMul};
use smg_core::errors::SmgError;

use crate::convention::GroupConvention;
use crate::group::GaugeGroup;
use crate::rep::{
    arithmetic_overflow as overflow, invalid_su2_dimension, su3_dynkin_labels,
    unknown_su3_dimension, Representation,
};
use crate::Rational;

impl Representation {
    /// Quadratic Casimir eigenvalue C2 under `group`.
    ///
    /// * U(1): `Y^2 / 4`, times 3/5 under GUT normalization.
    /// * SU(2): `(dim2^2 - 1) / 4`, i.e. `j(j + 1)` with `dim2 = 2j + 1`.
    /// * SU(3): `(p^2 + q^2 + 3p + 3q + pq) / 3` from the Dynkin labels.
    pub fn quadratic_casimir(
        &self,
        group: GaugeGroup,
        convention: &GroupConvention,
    ) -> Result<Rational, SmgError> {
        match group {
            GaugeGroup::U1 => self
                .hypercharge
                .checked_mul(&self.hypercharge)
                .and_then(|square| square.checked_div(&Rational::from_integer(4)))
                .and_then(|casimir| casimir.checked_mul(&convention.u1_normalization()))
                .ok_or_else(|| overflow(self)),
            GaugeGroup::SU2 => {
                if self.dim2 == 0 {
                    return Err(invalid_su2_dimension(self.dim2));
                }
                let dim2 = i64::from(self.dim2);
                let square = dim2.checked_mul(dim2).ok_or_else(|| overflow(self))?;
                Ok(Rational::new(square - 1, 4))
            }
            GaugeGroup::SU3 => {
                let (p, q) =
                    su3_dynkin_labels(self.dim3).ok_or_else(|| unknown_su3_dimension(self.dim3))?;
                Ok(Rational::new(p * p + q * q + 3 * p + 3 * q + p * q, 3))
            }
        }
    }

    /// Quadratic Dynkin index `multiplicity * total_dim * C2 / D(A)`, ignoring statistics.
    pub fn dynkin_index(
        &self,
        group: GaugeGroup,
        convention: &GroupConvention,
    ) -> Result<Rational, SmgError> {
        self.validate()?;
        let casimir = self.quadratic_casimir(group, convention)?;
        let size = i64::try_from(self.total_dim())
            .ok()
            .and_then(|dim| dim.checked_mul(i64::from(self.multiplicity)))
            .ok_or_else(|| overflow(self))?;
        let adjoint = Rational::from_integer(group.adjoint_dimension());
        casimir
            .checked_mul(&Rational::from_integer(size))
            .and_then(|scaled| scaled.checked_div(&adjoint))
            .ok_or_else(|| overflow(self))
    }

    /// Dynkin index weighted by the degrees of freedom of the field statistics.
    pub fn weighted_dynkin_index(
        &self,
        group: GaugeGroup,
        convention: &GroupConvention,
    ) -> Result<Rational, SmgError> {
        let index = self.dynkin_index(group, convention)?;
        self.statistics
            .weight()
            .checked_mul(&index)
            .ok_or_else(|| overflow(self))
    }
}

/// Quadratic Casimir of `rep` under the factor with index `n` (1, 2 or 3).
pub fn quadratic_casimir(
    rep: &Representation,
    n: u32,
    convention: &GroupConvention,
) -> Result<Rational, SmgError> {
    rep.quadratic_casimir(GaugeGroup::from_index(n)?, convention)
}

/// Unweighted quadratic Dynkin index of `rep` under the factor with index `n`.
pub fn dynkin_index(
    rep: &Representation,
    n: u32,
    convention: &GroupConvention,
) -> Result<Rational, SmgError> {
    rep.dynkin_index(GaugeGroup::from_index(n)?, convention)
}

/// Statistics-weighted Dynkin index of `rep` under the factor with index `n`.
pub fn weighted_dynkin_index(
    rep: &Representation,
    n: u32,
    convention: &GroupConvention,
) -> Result<Rational, SmgError> {
    rep.weighted_dynkin_index(GaugeGroup::from_index(n)?, convention)
}
