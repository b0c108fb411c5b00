use smg_theory::{
    dynkin_report, total_dynkin, weighted_dynkin_index, GroupConvention, Rational,
    Representation, Statistics,
};

#[test]
fn large_su2_dimension_reports_overflow() {
    let rep = Representation::dirac(1, 3_000_000_000, Rational::from_integer(0)).expect("valid");
    let err = weighted_dynkin_index(&rep, 2, &GroupConvention::default()).expect_err("overflow");
    assert_eq!(err.code(), "dimension-overflow");
    assert!(err.info().context.contains_key("representation"));
}

#[test]
fn large_hypercharge_reports_overflow() {
    let rep = Representation::dirac(1, 1, Rational::from_integer(1 << 40)).expect("valid");
    let err = weighted_dynkin_index(&rep, 1, &GroupConvention::default()).expect_err("overflow");
    assert_eq!(err.code(), "dimension-overflow");
}

#[test]
fn large_multiplicity_reports_overflow_in_total() {
    let rep = Representation::new(
        8,
        1_000_000,
        Rational::from_integer(0),
        4_000_000_000,
        Statistics::DiracFermion,
    )
    .expect("valid");
    let err = total_dynkin(&[rep], &GroupConvention::default()).expect_err("overflow");
    assert_eq!(err.code(), "dimension-overflow");
}

#[test]
fn sum_of_representable_contributions_reports_overflow() {
    // S1 = 4 * (2^31)^2 / 4 = 2^62 for each entry; two entries exceed i64.
    let rep = Representation::new(
        1,
        1,
        Rational::from_integer(1 << 31),
        4,
        Statistics::DiracFermion,
    )
    .expect("valid");
    let convention = GroupConvention::standard_model();
    let single = total_dynkin(&[rep.clone()], &convention).expect("fits");
    assert_eq!(single.s1, Rational::from_integer(1 << 62));

    let pair = [rep.clone(), rep];
    let err = total_dynkin(&pair, &convention).expect_err("sum overflow");
    assert_eq!(err.code(), "dimension-overflow");
    let err = dynkin_report(&pair, &convention).expect_err("sum overflow");
    assert_eq!(err.code(), "dimension-overflow");
}
