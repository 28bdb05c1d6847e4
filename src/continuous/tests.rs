use super::*;
use crate::error::ProbError;

// ======================== Uniform ========================

#[test]
fn uniform_pdf_cdf() {
    let u = Uniform::new(0.0_f64, 1.0).unwrap();
    assert!((u.pdf(0.5) - 1.0).abs() < 1e-14);
    assert!((u.pdf(-0.1)).abs() < 1e-14);
    assert!((u.pdf(1.1)).abs() < 1e-14);
    assert!((u.cdf(0.5) - 0.5).abs() < 1e-14);
    assert!((u.cdf(-0.1)).abs() < 1e-14);
    assert!((u.cdf(1.1) - 1.0).abs() < 1e-14);
}

#[test]
fn uniform_moments() {
    let u = Uniform::new(0.0_f64, 12.0).unwrap();
    assert!((u.mean() - 6.0).abs() < 1e-14);
    assert!((u.variance() - 12.0).abs() < 1e-14);
    assert!((u.standard_deviation() - 12.0_f64.sqrt()).abs() < 1e-14);
}

#[test]
fn uniform_support() {
    let u = Uniform::new(2.0_f64, 5.0).unwrap();
    assert!(u.is_supported(2.0));
    assert!(u.is_supported(3.5));
    assert!(u.is_supported(5.0));
    assert!(!u.is_supported(1.9));
    assert!(!u.is_supported(5.1));
}

#[test]
fn uniform_invalid() {
    assert_eq!(
        Uniform::new(1.0_f64, 1.0).unwrap_err(),
        ProbError::InvalidParameter
    );
    assert_eq!(
        Uniform::new(2.0_f64, 1.0).unwrap_err(),
        ProbError::InvalidParameter
    );
}

// ======================== Normal ========================

#[test]
fn normal_pdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    let expected = 1.0 / (2.0 * core::f64::consts::PI).sqrt();
    assert!((n.pdf(0.0) - expected).abs() < 1e-14);
}

#[test]
fn normal_cdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);
    // Φ(1) ≈ 0.8413
    assert!((n.cdf(1.0) - 0.8413447460685429).abs() < 1e-14);
    // Φ(-1) ≈ 0.1587
    assert!((n.cdf(-1.0) - 0.15865525393145702).abs() < 1e-14);
    assert!((n.cdf(1.0) + n.cdf(-1.0) - 1.0).abs() < 1e-14);
}

#[test]
fn normal_moments() {
    let n = Normal::new(3.0_f64, 2.0).unwrap();
    assert!((n.mean() - 3.0).abs() < 1e-14);
    assert!((n.variance() - 4.0).abs() < 1e-14);
    assert!((n.standard_deviation() - 2.0).abs() < 1e-14);
}

#[test]
fn normal_support_is_all_reals() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!(n.is_supported(-1e300));
    assert!(n.is_supported(1e300));
    assert!(!n.is_supported(f64::INFINITY));
    assert!(!n.is_supported(f64::NAN));
}

#[test]
fn normal_invalid() {
    assert_eq!(
        Normal::new(0.0_f64, 0.0).unwrap_err(),
        ProbError::InvalidParameter
    );
    assert_eq!(
        Normal::new(0.0_f64, -1.0).unwrap_err(),
        ProbError::InvalidParameter
    );
}

#[test]
fn normal_f32() {
    let n = Normal::new(0.0_f32, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-5);
    assert!((n.mean()).abs() < 1e-7);
}

// ======================== Exponential ========================

#[test]
fn exponential_pdf_cdf() {
    let e = Exponential::new(1.0_f64).unwrap();
    assert!((e.pdf(0.0) - 1.0).abs() < 1e-14);
    assert!((e.pdf(1.0) - (-1.0_f64).exp()).abs() < 1e-14);
    assert!((e.pdf(-1.0)).abs() < 1e-14);
    assert!((e.cdf(0.0)).abs() < 1e-14);
    assert!((e.cdf(1.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-14);
}

#[test]
fn exponential_moments() {
    let e = Exponential::new(0.5_f64).unwrap();
    assert!((e.mean() - 2.0).abs() < 1e-14);
    assert!((e.variance() - 4.0).abs() < 1e-14);
}

#[test]
fn exponential_support() {
    let e = Exponential::new(1.0_f64).unwrap();
    assert!(e.is_supported(0.0));
    assert!(e.is_supported(10.0));
    assert!(!e.is_supported(-0.1));
}

#[test]
fn exponential_invalid() {
    assert_eq!(
        Exponential::new(0.0_f64).unwrap_err(),
        ProbError::InvalidParameter
    );
    assert_eq!(
        Exponential::new(-1.0_f64).unwrap_err(),
        ProbError::InvalidParameter
    );
}
