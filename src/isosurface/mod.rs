//! Isosurface extraction for functions of three variables.
//!
//! The octree is decomposed into tetrahedra around each leaf (see
//! [`SimplexGenerator`]) and every tetrahedron is cut by marching
//! tetrahedra. With the `parallel` feature the cutting runs on rayon.

pub mod marching;
pub mod simplices;
pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use marching::{Face, march_indices, march_simplex, sign_code};
pub use simplices::{Simplex, SimplexGenerator};
pub use traits::MarchingOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialMarchingOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelMarchingOps;

use crate::errors::IsoError;
use crate::float_types::Real;
use crate::settings::Settings;
use crate::tree::CellTree;
use nalgebra::Point3;

/// Output of [`extract_isosurface`].
#[derive(Debug, Clone, Default)]
pub struct Isosurface {
    /// Every tetrahedron the octree was decomposed into.
    pub simplices: Vec<Simplex>,
    /// Surface triangles, grouped by the simplex that produced them.
    pub faces: Vec<Face>,
}

impl Isosurface {
    /// True when no triangle was produced.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Every triangle corner, three per face.
    pub fn vertices(&self) -> impl Iterator<Item = &Point3<Real>> {
        self.faces.iter().flatten()
    }
}

/// Triangles approximating `f(p) = 0` over the box `[pmin, pmax]`.
///
/// # Errors
/// Returns [`IsoError::InvalidDomain`] or [`IsoError::InvalidTolerance`] for bad
/// input, and [`IsoError::NotAtZero`] when a sign change the octree recorded
/// cannot be reproduced by bisection.
///
/// # Example
/// ```
/// use isoplot::{Settings, extract_isosurface};
/// use nalgebra::Point3;
///
/// let sphere = |p: &Point3<f64>| p.coords.norm_squared() - 1.0;
/// let surface = extract_isosurface(
///     sphere,
///     Point3::new(-2.0, -2.0, -2.0),
///     Point3::new(2.0, 2.0, 2.0),
///     &Settings::default().with_min_depth(3),
/// )
/// .unwrap();
/// assert!(!surface.faces.is_empty());
/// ```
pub fn extract_isosurface<F>(
    f: F,
    pmin: Point3<Real>,
    pmax: Point3<Real>,
    settings: &Settings<3>,
) -> Result<Isosurface, IsoError>
where
    F: Fn(&Point3<Real>) -> Real + Sync + Send,
{
    let tol = settings.resolve(&pmin, &pmax)?;
    let octree = CellTree::build(&f, &pmin, &pmax, settings.min_depth, settings.max_cells, &tol);
    let simplices = SimplexGenerator::new(&octree, &f).simplices();

    #[cfg(not(feature = "parallel"))]
    let ops = SerialMarchingOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelMarchingOps::new();

    let faces = ops.march(&simplices, &f, &tol)?;
    log::debug!(
        "marched {} simplices into {} faces",
        simplices.len(),
        faces.len()
    );

    Ok(Isosurface { simplices, faces })
}
