//! End-to-end scenarios over the public crate surface, using the short
//! distribution aliases throughout.

use probdist::{
    Ber, Bin, ContinuousDistribution, DiscreteDistribution, DiscreteRandomVariable, Exp, Gaussian,
    Geo, Hyp, Pois, ProbError, Uni,
};

#[test]
fn bernoulli_scenario() {
    let p = Ber::new(0.7_f64).unwrap();
    assert!((p.pmf(0) - 0.3).abs() < 1e-14);
    assert!((p.pmf(1) - 0.7).abs() < 1e-14);
    assert!((p.variance() - 0.21).abs() < 1e-14);
    assert!(p.eval(0.5).is_err());
}

#[test]
fn binomial_scenario() {
    let p = Bin::new(10, 0.5_f64).unwrap();
    assert!((p.pmf(5) - 0.24609375).abs() < 1e-15);
    assert!((p.cdf(5.0) - 0.623046875).abs() < 1e-15);
    assert!((p.mean() - 5.0).abs() < 1e-14);
    assert!((p.variance() - 2.5).abs() < 1e-14);
}

#[test]
fn geometric_scenarios() {
    let p = Geo::new(0.75_f64, true).unwrap();
    assert!((p.pmf(1) - 0.75).abs() < 1e-15);
    assert!((p.pmf(3) - 0.046875).abs() < 1e-16);
    assert!((p.mean() - 4.0 / 3.0).abs() < 1e-15);
    assert!((p.variance() - 4.0 / 9.0).abs() < 1e-15);

    let p = Geo::new(0.75_f64, false).unwrap();
    assert!((p.pmf(0) - 0.75).abs() < 1e-15);
    assert!((p.pmf(1) - 0.1875).abs() < 1e-16);
    assert!((p.mean() - 1.0 / 3.0).abs() < 1e-15);
}

#[test]
fn poisson_scenario() {
    let p = Pois::new(0.75_f64).unwrap();
    assert!((p.pmf(0) - 0.47236655274101474).abs() < 1e-15);
    assert!((p.cdf(2.0) - 0.9594945602551862).abs() < 1e-14);
}

#[test]
fn hypergeometric_scenario() {
    let p = Hyp::<f64>::new(10, 5, 3).unwrap();
    assert!((p.pmf(0) - 0.08333333333333333_f64).abs() < 1e-16);
    assert!((p.pmf(1) - 0.4166666666666667_f64).abs() < 1e-15);
    assert!((p.mean() - 1.5_f64).abs() < 1e-14);
    assert!((p.variance() - 0.5833333333333334_f64).abs() < 1e-15);
}

#[test]
fn materialized_variables_compose() {
    // Two independent Binomial(10, 0.5) draws: the product variable keeps a
    // unit probability law and the product mean factorizes.
    let b = Bin::new(10, 0.5_f64).unwrap();
    let x = b.to_discrete_random_variable(None, None).unwrap();
    let y = b.to_discrete_random_variable(None, None).unwrap();

    let xy = &x * &y;
    let total: f64 = xy.probabilities().iter().sum();
    assert!((total - 1.0).abs() < 1e-10);
    assert!((xy.mean() - x.mean() * y.mean()).abs() < 1e-9);
    assert!(x.covariance(&y).abs() < 1e-10);
}

#[test]
fn truncated_window_keeps_probability_law() {
    let g = Geo::new(0.3_f64, true).unwrap();
    let rv = g.to_discrete_random_variable(None, Some(20)).unwrap();
    let total: f64 = rv.probabilities().iter().sum();
    assert!((total - 1.0).abs() < 1e-12);

    let p = Pois::new(2.5_f64).unwrap();
    let rv = p.to_discrete_random_variable(Some(1), Some(12)).unwrap();
    assert_eq!(rv.outcomes().first(), Some(&1.0));
    let total: f64 = rv.probabilities().iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn unbounded_conversion_requires_stop() {
    assert_eq!(
        Geo::new(0.5_f64, false)
            .unwrap()
            .to_discrete_random_variable(None, None)
            .unwrap_err(),
        ProbError::UnboundedSupport
    );
    assert_eq!(
        Pois::new(1.0_f64)
            .unwrap()
            .to_discrete_random_variable(None, None)
            .unwrap_err(),
        ProbError::UnboundedSupport
    );
}

#[test]
fn materialized_variable_is_independent_of_source() {
    let b = Bin::new(4, 0.5_f64).unwrap();
    let rv = b.to_discrete_random_variable(None, None).unwrap();
    let squared = rv.pow(2);
    // The transform returned a new value; the source enumeration and the
    // distribution itself are untouched.
    assert_eq!(rv.outcomes(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(squared.outcomes(), &[0.0, 1.0, 4.0, 9.0, 16.0]);
    assert!((b.pmf(2) - 0.375).abs() < 1e-15);
}

#[test]
fn continuous_aliases() {
    let u = Uni::new(0.0_f64, 2.0).unwrap();
    assert!((u.mean() - 1.0).abs() < 1e-14);

    let n = Gaussian::new(0.0_f64, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);

    let e = Exp::new(2.0_f64).unwrap();
    assert!((e.mean() - 0.5).abs() < 1e-14);
    assert!(!e.is_supported(-1.0));
}

#[test]
fn discrete_variables_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DiscreteRandomVariable<f64>>();
    assert_send_sync::<Bin<f64>>();
    assert_send_sync::<Hyp<f64>>();
}
