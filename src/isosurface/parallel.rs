//! Parallel implementation of the marching pass

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::errors::IsoError;
use crate::float_types::Real;
use crate::isosurface::marching::{Face, march_simplex};
use crate::isosurface::simplices::Simplex;
use crate::isosurface::traits::MarchingOps;
use nalgebra::{Point3, Vector3};

/// Marches simplices on the rayon thread pool
#[cfg(feature = "parallel")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelMarchingOps;

#[cfg(feature = "parallel")]
impl ParallelMarchingOps {
    pub const fn new() -> Self {
        ParallelMarchingOps
    }
}

#[cfg(feature = "parallel")]
impl MarchingOps for ParallelMarchingOps {
    fn march<F>(&self, simplices: &[Simplex], f: &F, tol: &Vector3<Real>) -> Result<Vec<Face>, IsoError>
    where
        F: Fn(&Point3<Real>) -> Real + Sync + Send,
    {
        // collecting an indexed iterator keeps simplex order
        let per_simplex: Vec<Vec<Face>> = simplices
            .par_iter()
            .map(|simplex| march_simplex(simplex, f, tol))
            .collect::<Result<_, _>>()?;
        Ok(per_simplex.into_iter().flatten().collect())
    }
}
