//! Test support library
//! Provides common oracles and helpers for the integration tests.

#![allow(dead_code)]

use isoplot::float_types::Real;
use nalgebra::{Point2, Point3};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Circle of radius `sqrt(0.9)` around the origin.
pub fn circle(p: &Point2<Real>) -> Real {
    p.x * p.x + p.y * p.y - 0.9
}

/// Unit circle, zero on the grid corners `(+-1, 0)` and `(0, +-1)`.
pub fn unit_circle(p: &Point2<Real>) -> Real {
    p.x * p.x + p.y * p.y - 1.0
}

/// Unit sphere, zero on the grid corners along each axis.
pub fn unit_sphere(p: &Point3<Real>) -> Real {
    p.coords.norm_squared() - 1.0
}

/// Sphere of radius `sqrt(0.9)` around the origin.
pub fn sphere(p: &Point3<Real>) -> Real {
    p.coords.norm_squared() - 0.9
}

/// True if the polyline ends where it starts.
pub fn is_closed(curve: &[Point2<Real>]) -> bool {
    curve.len() > 2 && curve.first() == curve.last()
}

/// Twice the signed area enclosed by a closed polyline.
pub fn doubled_area(curve: &[Point2<Real>]) -> Real {
    curve
        .windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum()
}
