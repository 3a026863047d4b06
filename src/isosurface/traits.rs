//! Traits defining the surface-marching pass

use crate::errors::IsoError;
use crate::float_types::Real;
use crate::isosurface::marching::Face;
use crate::isosurface::simplices::Simplex;
use nalgebra::{Point3, Vector3};

/// Turns a batch of simplices into surface triangles.
///
/// Implementations must keep the faces of simplex `i` ahead of those of
/// simplex `i + 1`, and fail when any simplex fails.
pub trait MarchingOps {
    fn march<F>(&self, simplices: &[Simplex], f: &F, tol: &Vector3<Real>) -> Result<Vec<Face>, IsoError>
    where
        F: Fn(&Point3<Real>) -> Real + Sync + Send;
}
