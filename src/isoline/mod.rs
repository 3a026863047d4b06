//! Isoline extraction for functions of two variables.

pub mod tracer;
pub mod triangulator;

pub use tracer::{CurveTracer, Polyline};
pub use triangulator::{Triangle, Triangulator};

use crate::errors::IsoError;
use crate::float_types::Real;
use crate::settings::Settings;
use crate::tree::CellTree;
use nalgebra::Point2;

/// Polylines approximating `f(p) = 0` over the rectangle `[pmin, pmax]`.
///
/// The quadtree is refined wherever `f` changes sign (or is only partly
/// defined), triangulated across cells of every depth, and the zero crossings
/// along linked triangles are joined into curves. Closed curves end with their
/// first point; curves that leave the rectangle or run into an undefined
/// region are open.
///
/// # Example
/// ```
/// use isoplot::{Settings, extract_isoline};
/// use nalgebra::Point2;
///
/// let circle = |p: &Point2<f64>| p.x * p.x + p.y * p.y - 1.0;
/// let curves = extract_isoline(
///     circle,
///     Point2::new(-2.0, -2.0),
///     Point2::new(2.0, 2.0),
///     &Settings::default().with_min_depth(4),
/// )
/// .unwrap();
/// assert!(curves.iter().any(|c| c.len() > 2 && c.first() == c.last()));
/// ```
pub fn extract_isoline<F>(
    f: F,
    pmin: Point2<Real>,
    pmax: Point2<Real>,
    settings: &Settings<2>,
) -> Result<Vec<Polyline>, IsoError>
where
    F: Fn(&Point2<Real>) -> Real + Sync + Send,
{
    let tol = settings.resolve(&pmin, &pmax)?;
    let quadtree = CellTree::build(&f, &pmin, &pmax, settings.min_depth, settings.max_cells, &tol);
    let triangles = Triangulator::new(&quadtree, &f, tol).triangulate();
    Ok(CurveTracer::new(triangles).trace())
}
