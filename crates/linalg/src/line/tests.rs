use super::*;
use crate::error::ErrorKind;
use std::str::FromStr;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn line(n: [&str; 2], k: &str) -> Line {
    Line::new(Vector::new(n).unwrap(), d(k)).unwrap()
}

fn close(a: Decimal, b: Decimal, eps: &str) -> bool {
    (a - b).abs() < d(eps)
}

#[test]
fn basepoint_uses_first_nonzero_coordinate() {
    let l = line(["3", "4"], "6");
    assert_eq!(l.basepoint(), Some(&Vector::new([2, 0]).unwrap()));
    let l = line(["0", "2"], "4");
    assert_eq!(l.basepoint(), Some(&Vector::new([0, 2]).unwrap()));
    // Coordinates below eps_zero are skipped.
    let l = line(["0.00000000001", "2"], "4");
    assert_eq!(l.basepoint(), Some(&Vector::new([0, 2]).unwrap()));
}

#[test]
fn zero_normal_is_degenerate() {
    let l = Line::default();
    assert!(l.is_degenerate());
    assert!(l.basepoint().is_none());
    assert_eq!(l.constant_term(), Decimal::ZERO);
    assert_eq!(l.normal_vector(), &Vector::zeros(2).unwrap());
    assert!(Line::from_constant(d("5")).is_degenerate());
}

#[test]
fn non_planar_normal_is_rejected() {
    let err = Line::new(Vector::new([1, 2, 3]).unwrap(), d("1")).unwrap_err();
    assert_eq!(
        err,
        LinalgError::UnsupportedDimension {
            op: "line",
            supported: "2",
            dimension: 3
        }
    );
    assert_eq!(err.kind(), ErrorKind::UndefinedOperation);
}

#[test]
fn scaled_equations_are_the_same_line() {
    // l2 = 2.5 * l1, constant included.
    let l1 = line(["4.046", "2.836"], "1.21");
    let l2 = line(["10.115", "7.09"], "3.025");
    assert!(l1.is_parallel_to(&l2));
    assert!(l1.coincides_with(&l2));
    assert!(l2.coincides_with(&l1));
    assert_eq!(l1.intersection_with(&l2).unwrap(), LineIntersection::SameLine);
}

#[test]
fn crossing_lines_meet_in_a_point() {
    let l3 = line(["7.204", "3.182"], "8.68");
    let l4 = line(["8.172", "4.114"], "9.883");
    assert!(!l3.is_parallel_to(&l4));
    assert!(!l3.coincides_with(&l4));
    let hit = l3.intersection_with(&l4).unwrap();
    let p = hit.point().expect("unique point");
    assert!(close(p[0], d("1.1728"), "0.0001"));
    assert!(close(p[1], d("0.0727"), "0.0001"));
    // The point satisfies both equations.
    for l in [&l3, &l4] {
        let lhs = l.normal_vector().dot(p).unwrap();
        assert!(close(lhs, l.constant_term(), "0.0000000001"));
    }
    assert_eq!(l4.intersection_with(&l3).unwrap(), hit);
}

#[test]
fn parallel_distinct_lines_do_not_meet() {
    // l6 normal = 1.5 * l5 normal, constants not scaled.
    let l5 = line(["1.182", "5.562"], "6.744");
    let l6 = line(["1.773", "8.343"], "9.525");
    assert!(l5.is_parallel_to(&l6));
    assert!(!l5.coincides_with(&l6));
    assert_eq!(l5.intersection_with(&l6).unwrap(), LineIntersection::Parallel);
    assert!(l5.intersection_with(&l6).unwrap().point().is_none());
}

#[test]
fn degenerate_line_equality() {
    let zero = Line::default();
    assert!(zero.coincides_with(&Line::from_constant(Decimal::ZERO)));
    assert!(zero.coincides_with(&Line::from_constant(d("0.00000000001"))));
    assert!(!zero.coincides_with(&Line::from_constant(d("1"))));
    let far = Line::from_constant(Decimal::MAX);
    assert!(!far.coincides_with(&Line::from_constant(Decimal::MIN)));
    assert!(far.coincides_with(&Line::from_constant(Decimal::MAX)));
    let regular = line(["1", "1"], "0");
    assert!(!zero.coincides_with(&regular));
    assert!(!regular.coincides_with(&zero));
    // A zero normal is parallel to every normal, so there is no unique point.
    assert!(zero.is_parallel_to(&regular));
    assert_eq!(regular.intersection_with(&zero).unwrap(), LineIntersection::Parallel);
}

#[test]
fn custom_tolerance_drives_coincidence() {
    let loose = Tolerance::uniform(d("0.01"));
    let a = Line::with_tolerance(Vector::new([1, 0]).unwrap(), d("1"), loose).unwrap();
    let b = line(["1", "0"], "1.001");
    assert!(a.coincides_with(&b));
    assert!(!b.coincides_with(&a));
    assert_eq!(a.tolerance(), loose);
}

#[test]
fn from_normal_passes_through_origin() {
    let l = Line::from_normal(Vector::new([2, -1]).unwrap()).unwrap();
    assert_eq!(l.constant_term(), Decimal::ZERO);
    assert_eq!(l.basepoint(), Some(&Vector::zeros(2).unwrap()));
}

#[test]
fn renders_equations() {
    assert_eq!(
        line(["4.046", "2.836"], "1.21").to_string(),
        "4.046x_1 + 2.836x_2 = 1.21"
    );
    assert_eq!(line(["1", "-1"], "0").to_string(), "x_1 - x_2 = 0");
    assert_eq!(
        line(["-1", "2.0004"], "-3").to_string(),
        "-x_1 + 2x_2 = -3"
    );
    assert_eq!(line(["0", "3"], "5").to_string(), "3x_2 = 5");
    assert_eq!(line(["0.0001", "1"], "2.5").to_string(), "x_2 = 2.5");
    assert_eq!(
        line(["7.2046", "-3.18249"], "8.68012").to_string(),
        "7.205x_1 - 3.182x_2 = 8.68"
    );
    assert_eq!(Line::default().to_string(), "0 = 0");
}

#[test]
fn nearly_parallel_lines_still_meet() {
    // Normals within the parallel tolerance, but the system is not singular.
    let l1 = line(["1", "0"], "0");
    let l2 = line(["1", "0.00000000001"], "1");
    assert!(l1.is_parallel_to(&l2));
    assert!(!l1.coincides_with(&l2));
    let expected = Vector::new(["0", "100000000000"]).unwrap();
    assert_eq!(
        l1.intersection_with(&l2).unwrap(),
        LineIntersection::Point(expected.clone())
    );
    assert_eq!(
        l2.intersection_with(&l1).unwrap(),
        LineIntersection::Point(expected)
    );
}

#[test]
fn intersection_does_not_depend_on_receiver_tolerance() {
    let loose = Tolerance::uniform(d("0.01"));
    let a = Line::with_tolerance(Vector::new(["1", "0"]).unwrap(), d("0"), loose).unwrap();
    let b = line(["1", "0.001"], "1");
    assert!(a.is_parallel_to(&b));
    assert_eq!(a.intersection_with(&b).unwrap(), b.intersection_with(&a).unwrap());
    assert!(a.intersection_with(&b).unwrap().point().is_some());
}

#[test]
fn out_of_range_lines_are_errors() {
    // Basepoint c / n_1 = MAX / 0.5 does not fit.
    let err = Line::new(Vector::new(["0.5", "0"]).unwrap(), Decimal::MAX).unwrap_err();
    assert_eq!(err, LinalgError::Overflow);
    // A D overflows the determinant.
    let l1 = Line::new(Vector::from_decimals(vec![Decimal::MAX, Decimal::ONE]).unwrap(), d("0"))
        .unwrap();
    let l2 = Line::new(Vector::from_decimals(vec![Decimal::ONE, Decimal::MAX]).unwrap(), d("0"))
        .unwrap();
    assert!(!l1.is_parallel_to(&l2));
    assert_eq!(l1.intersection_with(&l2), Err(LinalgError::Overflow));
}

#[test]
fn zero_tolerance_never_divides_by_zero() {
    let exact = Tolerance::uniform(Decimal::ZERO);
    let l = Line::with_tolerance(Vector::zeros(2).unwrap(), d("3"), exact).unwrap();
    assert!(l.is_degenerate());
    let l = Line::with_tolerance(Vector::new(["0", "4"]).unwrap(), d("2"), exact).unwrap();
    assert_eq!(l.basepoint(), Some(&Vector::new(["0", "0.5"]).unwrap()));
}
