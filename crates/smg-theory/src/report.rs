use serde::{Deserialize, Serialize};
use smg_core::errors::SmgError;
use smg_core::stable_hash_string;
use tracing::debug;

use crate::convention::GroupConvention;
use crate::dynkin::DynkinTotals;
use crate::rep::{arithmetic_overflow, Representation};

/// Weighted indices contributed by a single representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepContribution {
    /// Rendered representation, e.g. `Weyl(3,2,1/3,3)`.
    pub label: String,
    /// Representation the contribution was computed from.
    pub representation: Representation,
    /// Weighted Dynkin indices of this representation alone.
    pub weighted: DynkinTotals,
}

/// Per-representation breakdown of a weighted Dynkin aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynkinReport {
    /// Convention used for every entry.
    pub convention: GroupConvention,
    /// Contributions in input order.
    pub contributions: Vec<RepContribution>,
    /// Sum over all contributions.
    pub totals: DynkinTotals,
    /// Stable hash over convention, contributions and totals.
    pub report_hash: String,
}

/// Computes the weighted Dynkin indices of `reps` together with a per-entry breakdown.
pub fn dynkin_report(
    reps: &[Representation],
    convention: &GroupConvention,
) -> Result<DynkinReport, SmgError> {
    let contributions = reps
        .iter()
        .map(|rep| {
            Ok(RepContribution {
                label: rep.to_string(),
                representation: rep.clone(),
                weighted: rep.weighted_totals(convention)?,
            })
        })
        .collect::<Result<Vec<_>, SmgError>>()?;
    let mut totals = DynkinTotals::zero();
    for entry in &contributions {
        totals = totals
            .checked_add(&entry.weighted)
            .ok_or_else(|| arithmetic_overflow(&entry.representation))?;
    }
    let report_hash = stable_hash_string(&(convention, &contributions, &totals))?;
    debug!(
        reps = contributions.len(),
        report_hash = %report_hash,
        "built dynkin report"
    );
    Ok(DynkinReport {
        convention: *convention,
        contributions,
        totals,
        report_hash,
    })
}
