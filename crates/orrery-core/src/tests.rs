use crate::coordinates::Position;

#[test]
fn test_magnitude() {
    assert_eq!(Position::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    assert_eq!(Position::ORIGIN.magnitude(), 0.0);

    let p = Position::new(1.0, 1.0, 1.0);
    assert!((p.magnitude() - 3.0_f64.sqrt()).abs() < 1e-15);
}

#[test]
fn test_add_sub_roundtrip() {
    let a = Position::new(1.5, -2.0, 0.25);
    let b = Position::new(-0.5, 7.0, 3.0);

    let sum = a + b;
    assert_eq!(sum, Position::new(1.0, 5.0, 3.25));
    assert_eq!(sum - b, a);
}

#[test]
fn test_distance_symmetric() {
    let a = Position::new(10.0, 0.0, 0.0);
    let b = Position::new(0.0, 10.0, 0.0);

    assert!((a.distance(b) - b.distance(a)).abs() < 1e-15);
    assert!((a.distance(b) - 200.0_f64.sqrt()).abs() < 1e-12);
    assert_eq!(a.distance(a), 0.0);
}
