use smg_core::errors::{ErrorInfo, SmgError};

use crate::rep::{Representation, Statistics};
use crate::Rational;

/// Left-handed Weyl fermions of the Standard Model, one entry per multiplet with
/// `generations` copies each: Q, u^c, d^c, L, e^c.
pub fn fermions(generations: u32) -> Result<Vec<Representation>, SmgError> {
    if generations == 0 {
        return Err(SmgError::Representation(
            ErrorInfo::new("zero-generations", "at least one generation is required")
                .with_context("generations", generations),
        ));
    }
    [
        (3, 2, Rational::new(1, 3)),
        (3, 1, Rational::new(-4, 3)),
        (3, 1, Rational::new(2, 3)),
        (1, 2, Rational::from_integer(-1)),
        (1, 1, Rational::from_integer(2)),
    ]
    .into_iter()
    .map(|(dim3, dim2, hypercharge)| {
        Representation::new(dim3, dim2, hypercharge, generations, Statistics::WeylFermion)
    })
    .collect()
}

/// The Higgs doublet (1, 2, 1) as a complex scalar.
pub fn higgs_doublet() -> Result<Representation, SmgError> {
    Representation::complex_scalar(1, 2, Rational::from_integer(1))
}

/// Fermions for `generations` generations followed by the Higgs doublet.
pub fn field_content(generations: u32) -> Result<Vec<Representation>, SmgError> {
    let mut reps = fermions(generations)?;
    reps.push(higgs_doublet()?);
    Ok(reps)
}
