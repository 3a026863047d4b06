//! Walks the linked triangle pool into ordered polylines.

use crate::float_types::Real;
use crate::isoline::triangulator::Triangle;
use crate::point::ValuedPoint;
use nalgebra::Point2;

/// An ordered run of isoline points. Closed curves repeat their first point at the end.
pub type Polyline = Vec<Point2<Real>>;

/// Turns `prev`/`next` chains into polylines, visiting each triangle once.
pub struct CurveTracer {
    triangles: Vec<Triangle>,
}

impl CurveTracer {
    pub const fn new(triangles: Vec<Triangle>) -> Self {
        CurveTracer { triangles }
    }

    /// Trace every chain in the pool.
    pub fn trace(mut self) -> Vec<Polyline> {
        let mut curves = Vec::new();
        for i in 0..self.triangles.len() {
            let triangle = &self.triangles[i];
            if triangle.visited || triangle.next.is_none() {
                continue;
            }
            let curve = self.march_triangle(i);
            if !curve.is_empty() {
                curves.push(curve.into_iter().map(|p| p.pos).collect());
            }
        }

        let closed = curves
            .iter()
            .filter(|c: &&Polyline| c.len() > 1 && c.first() == c.last())
            .count();
        log::debug!("traced {} isoline curves, {} closed", curves.len(), closed);
        curves
    }

    /// Collect the crossings of the chain containing `initial`.
    fn march_triangle(&mut self, initial: usize) -> Vec<ValuedPoint<2>> {
        let mut start = initial;
        let mut closed_loop = false;

        // a prev chain can only be as long as the pool
        let mut steps = 0;
        while let Some(prev) = self.triangles[start].prev {
            start = prev;
            if start == initial {
                closed_loop = true;
                break;
            }
            steps += 1;
            if steps > self.triangles.len() {
                break;
            }
        }

        let mut curve = Vec::new();
        let mut current = Some(start);
        while let Some(i) = current {
            let triangle = &mut self.triangles[i];
            if triangle.visited {
                break;
            }
            if let Some(point) = triangle.next_bisect_point {
                curve.push(point);
            }
            triangle.visited = true;
            current = triangle.next;
        }

        if closed_loop {
            if let Some(&first) = curve.first() {
                curve.push(first);
            }
        }
        curve
    }
}
