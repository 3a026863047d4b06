//! Serial implementation of the marching pass

use crate::errors::IsoError;
use crate::float_types::Real;
use crate::isosurface::marching::{Face, march_simplex};
use crate::isosurface::simplices::Simplex;
use crate::isosurface::traits::MarchingOps;
use nalgebra::{Point3, Vector3};

/// Marches simplices one after another on the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialMarchingOps;

impl SerialMarchingOps {
    pub const fn new() -> Self {
        SerialMarchingOps
    }
}

impl MarchingOps for SerialMarchingOps {
    fn march<F>(&self, simplices: &[Simplex], f: &F, tol: &Vector3<Real>) -> Result<Vec<Face>, IsoError>
    where
        F: Fn(&Point3<Real>) -> Real + Sync + Send,
    {
        let mut faces = Vec::new();
        for simplex in simplices {
            faces.extend(march_simplex(simplex, f, tol)?);
        }
        Ok(faces)
    }
}
