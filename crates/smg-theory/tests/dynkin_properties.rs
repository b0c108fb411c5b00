use proptest::prelude::*;
use smg_theory::{
    total_dynkin, weighted_dynkin_index, DynkinTotals, GaugeGroup, GroupConvention, Rational,
    Representation, Statistics,
};

const KINDS: [Statistics; 4] = [
    Statistics::WeylFermion,
    Statistics::DiracFermion,
    Statistics::RealScalar,
    Statistics::ComplexScalar,
];

fn representation() -> impl Strategy<Value = Representation> {
    (
        prop::sample::select(vec![1u32, 3, 6, 8]),
        1u32..6,
        -6i64..=6,
        1i64..=6,
        1u32..4,
        prop::sample::select(KINDS.to_vec()),
    )
        .prop_map(|(dim3, dim2, numer, denom, multiplicity, statistics)| {
            Representation::new(
                dim3,
                dim2,
                Rational::new(numer, denom),
                multiplicity,
                statistics,
            )
            .expect("strategy yields valid representations")
        })
}

fn conventions() -> impl Strategy<Value = GroupConvention> {
    any::<bool>().prop_map(|gut_u1_normalized| GroupConvention { gut_u1_normalized })
}

#[test]
fn empty_content_sums_to_zero() {
    let totals = total_dynkin(&[], &GroupConvention::default()).expect("empty");
    assert_eq!(totals, DynkinTotals::zero());
    let zero = Rational::from_integer(0);
    assert_eq!(totals.as_tuple(), (zero, zero, zero));
}

#[test]
fn higgs_doublet_su2_contribution_is_one_half() {
    let higgs = Representation::complex_scalar(1, 2, Rational::from_integer(1)).expect("higgs");
    let convention = GroupConvention::default();
    assert_eq!(
        weighted_dynkin_index(&higgs, 2, &convention).expect("s2"),
        Rational::new(1, 2)
    );
    let totals = total_dynkin(&[higgs], &convention).expect("totals");
    assert_eq!(totals.s2, Rational::new(1, 2));
    assert_eq!(totals.s1, Rational::new(3, 10));
    assert_eq!(totals.s3, Rational::from_integer(0));
}

#[test]
fn statistics_weights() {
    assert_eq!(Statistics::WeylFermion.weight(), Rational::new(1, 2));
    assert_eq!(Statistics::RealScalar.weight(), Rational::new(1, 2));
    assert_eq!(Statistics::DiracFermion.weight(), Rational::from_integer(1));
    assert_eq!(Statistics::ComplexScalar.weight(), Rational::from_integer(1));
}

proptest! {
    #[test]
    fn weyl_counts_half_of_dirac(rep in representation(), convention in conventions()) {
        let weyl = rep.with_statistics(Statistics::WeylFermion);
        let dirac = rep.with_statistics(Statistics::DiracFermion);
        let real = rep.with_statistics(Statistics::RealScalar);
        let complex = rep.with_statistics(Statistics::ComplexScalar);
        for group in GaugeGroup::ALL {
            let weyl_s2 = weyl.weighted_dynkin_index(group, &convention).unwrap();
            let dirac_s2 = dirac.weighted_dynkin_index(group, &convention).unwrap();
            prop_assert_eq!(weyl_s2 * 2, dirac_s2);
            prop_assert_eq!(real.weighted_dynkin_index(group, &convention).unwrap(), weyl_s2);
            prop_assert_eq!(complex.weighted_dynkin_index(group, &convention).unwrap(), dirac_s2);
        }
    }

    #[test]
    fn total_dynkin_is_linear(a in representation(), b in representation(), convention in conventions()) {
        let joint = total_dynkin(&[a.clone(), b.clone()], &convention).unwrap();
        let split = total_dynkin(&[a], &convention)
            .unwrap()
            .checked_add(&total_dynkin(&[b], &convention).unwrap())
            .unwrap();
        prop_assert_eq!(joint, split);
    }

    #[test]
    fn total_dynkin_ignores_order(mut reps in prop::collection::vec(representation(), 0..6), convention in conventions()) {
        let forward = total_dynkin(&reps, &convention).unwrap();
        reps.reverse();
        prop_assert_eq!(total_dynkin(&reps, &convention).unwrap(), forward);
    }

    #[test]
    fn gut_normalization_scales_only_u1(rep in representation()) {
        let gut = total_dynkin(&[rep.clone()], &GroupConvention::gut()).unwrap();
        let plain = total_dynkin(&[rep], &GroupConvention::standard_model()).unwrap();
        prop_assert_eq!(gut.s1, plain.s1 * Rational::new(3, 5));
        prop_assert_eq!(gut.s2, plain.s2);
        prop_assert_eq!(gut.s3, plain.s3);
    }

    #[test]
    fn repeated_computation_is_identical(reps in prop::collection::vec(representation(), 0..6), convention in conventions()) {
        let first = total_dynkin(&reps, &convention).unwrap();
        let second = total_dynkin(&reps, &convention).unwrap();
        prop_assert_eq!(first, second);
        let summed = reps
            .iter()
            .map(|rep| rep.weighted_totals(&convention).unwrap())
            .fold(DynkinTotals::zero(), |acc, entry| acc.checked_add(&entry).unwrap());
        prop_assert_eq!(summed, first);
    }
}
