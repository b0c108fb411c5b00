use num_traits::CheckedAdd;
use serde::{Deserialize, Serialize};
use smg_core::errors::SmgError;
use tracing::{debug, trace};

use crate::convention::GroupConvention;
use crate::group::GaugeGroup;
use crate::rep::{arithmetic_overflow, Representation};
use crate::Rational;

/// Weighted Dynkin indices summed per gauge factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DynkinTotals {
    /// U(1) contribution.
    pub s1: Rational,
    /// SU(2) contribution.
    pub s2: Rational,
    /// SU(3) contribution.
    pub s3: Rational,
}

impl DynkinTotals {
    /// Totals for an empty field content.
    pub fn zero() -> Self {
        let zero = Rational::from_integer(0);
        Self {
            s1: zero,
            s2: zero,
            s3: zero,
        }
    }

    /// Entry for a single gauge factor.
    pub fn get(&self, group: GaugeGroup) -> Rational {
        match group {
            GaugeGroup::U1 => self.s1,
            GaugeGroup::SU2 => self.s2,
            GaugeGroup::SU3 => self.s3,
        }
    }

    /// Componentwise sum, or `None` when any entry leaves the i64 range.
    pub fn checked_add(&self, rhs: &DynkinTotals) -> Option<DynkinTotals> {
        Some(DynkinTotals {
            s1: self.s1.checked_add(&rhs.s1)?,
            s2: self.s2.checked_add(&rhs.s2)?,
            s3: self.s3.checked_add(&rhs.s3)?,
        })
    }

    /// Returns `(S1, S2, S3)`.
    pub fn as_tuple(&self) -> (Rational, Rational, Rational) {
        (self.s1, self.s2, self.s3)
    }
}

impl Default for DynkinTotals {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<DynkinTotals> for (Rational, Rational, Rational) {
    fn from(totals: DynkinTotals) -> Self {
        totals.as_tuple()
    }
}

impl Representation {
    /// Weighted Dynkin index of this representation under every gauge factor.
    pub fn weighted_totals(&self, convention: &GroupConvention) -> Result<DynkinTotals, SmgError> {
        Ok(DynkinTotals {
            s1: self.weighted_dynkin_index(GaugeGroup::U1, convention)?,
            s2: self.weighted_dynkin_index(GaugeGroup::SU2, convention)?,
            s3: self.weighted_dynkin_index(GaugeGroup::SU3, convention)?,
        })
    }
}

/// Sums the weighted Dynkin indices of `reps` for U(1), SU(2) and SU(3).
///
/// The first invalid representation aborts the sum.
pub fn total_dynkin(
    reps: &[Representation],
    convention: &GroupConvention,
) -> Result<DynkinTotals, SmgError> {
    let mut totals = DynkinTotals::zero();
    for rep in reps {
        let contribution = rep.weighted_totals(convention)?;
        trace!(
            rep = %rep,
            s1 = %contribution.s1,
            s2 = %contribution.s2,
            s3 = %contribution.s3,
            "weighted dynkin contribution"
        );
        totals = totals
            .checked_add(&contribution)
            .ok_or_else(|| arithmetic_overflow(rep))?;
    }
    debug!(
        reps = reps.len(),
        gut_u1_normalized = convention.gut_u1_normalized,
        s1 = %totals.s1,
        s2 = %totals.s2,
        s3 = %totals.s3,
        "aggregated weighted dynkin indices"
    );
    Ok(totals)
}
