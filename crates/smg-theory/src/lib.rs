#![deny(missing_docs)]
#![doc = "Exact group theory invariants (quadratic Casimirs, Dynkin indices) for representations of the Standard Model gauge group SU(3)xSU(2)xU(1)."]

mod casimir;
/// Physical parameter tables shipped alongside the group theory routines.
pub mod constants;
mod convention;
mod dynkin;
mod group;
mod rep;
mod report;
/// Standard Model field content presets.
pub mod standard_model;

pub use casimir::{dynkin_index, quadratic_casimir, weighted_dynkin_index};
pub use constants::{BsmConstants, Constants, SmConstants};
pub use convention::GroupConvention;
pub use dynkin::{total_dynkin, DynkinTotals};
pub use group::{adjoint_casimir, adjoint_dimension, GaugeGroup};
pub use rep::{su3_dynkin_labels, Representation, Statistics};
pub use report::{dynkin_report, DynkinReport, RepContribution};

pub use smg_core::{ErrorInfo, SmgError};

/// Exact rational number used for every invariant, always kept in lowest terms.
pub type Rational = num_rational::Ratio<i64>;
