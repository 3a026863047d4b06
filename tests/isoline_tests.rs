mod support;

use isoplot::float_types::Real;
use isoplot::{IsoError, Settings, extract_isoline};
use nalgebra::Point2;
use support::{circle, doubled_area, init_logging, is_closed, unit_circle};

fn square() -> (Point2<Real>, Point2<Real>) {
    (Point2::new(-2.0, -2.0), Point2::new(2.0, 2.0))
}

#[test]
fn circle_is_one_closed_curve() {
    init_logging();
    let (pmin, pmax) = square();
    let curves = extract_isoline(circle, pmin, pmax, &Settings::default().with_min_depth(4)).unwrap();

    assert_eq!(curves.len(), 1);
    let curve = &curves[0];
    assert!(is_closed(curve));
    assert!(curve.len() > 16);
    for p in curve {
        assert!(circle(p).abs() < 0.05, "{} is off the circle", p);
    }

    // the enclosed area approaches pi * r^2
    let area = doubled_area(curve).abs() / 2.0;
    assert!((area - 0.9 * std::f64::consts::PI as Real).abs() < 0.05, "area {}", area);
}

#[test]
fn unit_circle_through_grid_corners_is_one_closed_curve() {
    init_logging();
    let (pmin, pmax) = square();
    // x^2 + y^2 - 1 vanishes exactly on the corners (+-1, 0) and (0, +-1)
    let curves = extract_isoline(unit_circle, pmin, pmax, &Settings::default().with_min_depth(4)).unwrap();

    assert_eq!(curves.len(), 1);
    let curve = &curves[0];
    assert!(is_closed(curve));
    for p in curve {
        assert!(unit_circle(p).abs() < 0.05, "{} is off the circle", p);
    }
    let area = doubled_area(curve).abs() / 2.0;
    assert!((area - std::f64::consts::PI as Real).abs() < 0.05, "area {}", area);
}

#[test]
fn constant_function_has_no_curves() {
    init_logging();
    let (pmin, pmax) = square();
    let curves = extract_isoline(|_: &Point2<Real>| 1.0, pmin, pmax, &Settings::default()).unwrap();
    assert!(curves.is_empty());
}

#[test]
fn line_through_the_domain_is_open() {
    init_logging();
    let (pmin, pmax) = square();
    // offset chosen so the line never passes exactly through a cell corner
    let line = |p: &Point2<Real>| p.y - 0.3 * p.x - 0.1234567;
    let curves = extract_isoline(line, pmin, pmax, &Settings::default().with_min_depth(3)).unwrap();

    assert_eq!(curves.len(), 1);
    let curve = &curves[0];
    assert!(!is_closed(curve));
    for p in curve {
        assert!(line(p).abs() < 1e-3);
    }

    let xs: Vec<Real> = curve.iter().map(|p| p.x).collect();
    let min_x = xs.iter().cloned().fold(Real::INFINITY, Real::min);
    let max_x = xs.iter().cloned().fold(Real::NEG_INFINITY, Real::max);
    // the curve spans almost the whole width of the square
    assert!(min_x < -1.5 && max_x > 1.5, "spans {}..{}", min_x, max_x);
}

#[test]
fn two_circles_give_two_loops() {
    init_logging();
    let (pmin, pmax) = square();
    let f = |p: &Point2<Real>| {
        let a = (p.x - 0.9).powi(2) + p.y * p.y - 0.3;
        let b = (p.x + 0.9).powi(2) + p.y * p.y - 0.3;
        a.min(b)
    };
    let curves = extract_isoline(f, pmin, pmax, &Settings::default().with_min_depth(4)).unwrap();
    assert_eq!(curves.len(), 2);
    assert!(curves.iter().all(|c| is_closed(c)));
}

#[test]
fn curve_stops_where_the_function_is_undefined() {
    init_logging();
    let (pmin, pmax) = square();
    let f = |p: &Point2<Real>| if p.x < 0.0 { Real::NAN } else { circle(p) };
    let curves = extract_isoline(f, pmin, pmax, &Settings::default().with_min_depth(4)).unwrap();

    assert!(!curves.is_empty());
    for curve in &curves {
        assert!(!is_closed(curve));
        for p in curve {
            assert!(p.x >= -0.1);
            assert!(circle(p).abs() < 0.05);
        }
    }
}

#[test]
fn explicit_tolerance_tightens_the_crossings() {
    init_logging();
    let (pmin, pmax) = square();
    let settings = Settings::default().with_min_depth(4).with_tolerance([1e-7, 1e-7]);
    let curves = extract_isoline(circle, pmin, pmax, &settings).unwrap();
    for p in curves.iter().flatten() {
        assert!(circle(p).abs() < 1e-5);
    }
}

#[test]
fn bad_input_is_rejected() {
    let (pmin, pmax) = square();
    assert!(matches!(
        extract_isoline(circle, pmax, pmin, &Settings::default()),
        Err(IsoError::InvalidDomain { axis: 0, .. })
    ));
    assert!(matches!(
        extract_isoline(circle, pmin, pmax, &Settings::default().with_tolerance([1e-3, 0.0])),
        Err(IsoError::InvalidTolerance { axis: 1, .. })
    ));
}
