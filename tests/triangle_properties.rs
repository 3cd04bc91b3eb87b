//! End-to-end properties of construction and classification.

mod common;

use common::test_data::{HUGE_SCALENE, NEARLY_ONE, PERMUTATIONS};
use common::{dec, triangle};
use trigon::{classify, construct, Category, ErrorKind, Side, Triangle, TriangleError};

fn permuted<'a>(sides: [&'a str; 3], order: [usize; 3]) -> [&'a str; 3] {
    [sides[order[0]], sides[order[1]], sides[order[2]]]
}

#[test]
fn test_missing_side_fails_before_anything_else() {
    let err = Triangle::from_optional(Some(dec("0")), Some(dec("1")), None).unwrap_err();
    assert_eq!(err, TriangleError::NullSide { side: Side::C });
    assert!(err.is_invalid_argument());
}

#[test]
fn test_all_zero_is_non_positive_not_unequal() {
    let err = triangle("0", "0", "0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonPositiveSide);
    assert_eq!(err.side(), Side::A);
}

#[test]
fn test_negative_checked_before_inequality() {
    // -1 + 1 < 10 would also break the inequality
    let err = triangle("10", "-1", "1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonPositiveSide);
    assert_eq!(err.side(), Side::B);
}

#[test]
fn test_degenerate_permutations_fail() {
    for order in PERMUTATIONS {
        let [a, b, c] = permuted(["10", "5", "5.000"], order);
        let err = triangle(a, b, c).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TriangleUnequal, "{} {} {}", a, b, c);
        assert_eq!(
            err,
            TriangleError::TriangleUnequal {
                side: Side::ALL[order.iter().position(|&i| i == 0).unwrap()],
                value: dec("10"),
            }
        );
    }
}

#[test]
fn test_first_offending_side_is_reported() {
    // Only one side can ever reach the sum of the other two
    let err = triangle("1", "1", "2").unwrap_err();
    assert_eq!(err.side(), Side::C);
    assert_eq!(err.to_string(), "2 is too big");
}

#[test]
fn test_representation_does_not_matter() {
    let plain = construct(dec("2"), dec("2"), dec("2")).unwrap();
    let scaled = construct(dec("2.0"), dec("2.000"), dec("2")).unwrap();
    assert_eq!(classify(&plain), Category::Equilateral);
    assert_eq!(classify(&scaled), Category::Equilateral);
    assert_eq!(plain, scaled);
}

#[test]
fn test_reference_classifications() {
    assert_eq!(classify(&triangle("3", "4", "5").unwrap()), Category::Scalene);
    assert_eq!(classify(&triangle("3", "3", "3").unwrap()), Category::Equilateral);
    for order in PERMUTATIONS {
        let [a, b, c] = permuted(["3", "3", "4"], order);
        assert_eq!(
            classify(&triangle(a, b, c).unwrap()),
            Category::Isosceles,
            "{} {} {}",
            a,
            b,
            c
        );
    }
}

#[test]
fn test_no_tolerance_on_near_equal_sides() {
    let t = triangle("1", NEARLY_ONE, "2").unwrap();
    assert_eq!(classify(&t), Category::Scalene);
}

#[test]
fn test_huge_exponents() {
    let [a, b, c] = HUGE_SCALENE;
    let t = triangle(a, b, c).unwrap();
    assert_eq!(classify(&t), Category::Scalene);

    let equilateral = triangle(a, a, a).unwrap();
    assert_eq!(classify(&equilateral), Category::Equilateral);
}

#[test]
fn test_classification_is_stable() {
    let t = triangle("5", "12", "13").unwrap();
    let shared = t.clone();
    let first = classify(&t);
    assert_eq!(first, classify(&t));
    assert_eq!(first, shared.category());
}

#[test]
fn test_triangle_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Triangle>();
    assert_send_sync::<TriangleError>();

    let t = std::sync::Arc::new(triangle("3", "3", "4").unwrap());
    let handle = {
        let t = t.clone();
        std::thread::spawn(move || classify(&t))
    };
    assert_eq!(handle.join().unwrap(), Category::Isosceles);
}
