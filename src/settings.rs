//! Refinement parameters shared by isoline and isosurface extraction.

use crate::errors::IsoError;
use crate::float_types::{DEFAULT_TOLERANCE_DIVISOR, Real};
use nalgebra::{Point, SVector};

/// How finely to sample the domain.
///
/// `max_cells` is the authoritative backstop: it is raised to the number of
/// leaves a uniform tree of `min_depth` has, and refinement of ambiguous
/// regions stops once it is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings<const D: usize> {
    /// Every cell shallower than this is split regardless of its samples
    pub min_depth: usize,
    /// Leaf budget for adaptive refinement
    pub max_cells: usize,
    /// Per-axis tolerance; `None` uses a thousandth of the domain extent
    pub tolerance: Option<[Real; D]>,
}

impl<const D: usize> Default for Settings<D> {
    fn default() -> Self {
        Self {
            min_depth: 5,
            max_cells: 10000,
            tolerance: None,
        }
    }
}

impl<const D: usize> Settings<D> {
    pub const fn with_min_depth(mut self, min_depth: usize) -> Self {
        self.min_depth = min_depth;
        self
    }

    pub const fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    pub const fn with_tolerance(mut self, tolerance: [Real; D]) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Validate the domain `[pmin, pmax]` and return the effective tolerance.
    pub fn resolve(
        &self,
        pmin: &Point<Real, D>,
        pmax: &Point<Real, D>,
    ) -> Result<SVector<Real, D>, IsoError> {
        for axis in 0..D {
            let (min, max) = (pmin[axis], pmax[axis]);
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(IsoError::InvalidDomain { axis, min, max });
            }
        }

        let tol = match self.tolerance {
            Some(tol) => SVector::from(tol),
            None => (pmax - pmin) / DEFAULT_TOLERANCE_DIVISOR,
        };

        if let Some((axis, &value)) = tol
            .iter()
            .enumerate()
            .find(|(_, t)| !(t.is_finite() && **t > 0.0))
        {
            return Err(IsoError::InvalidTolerance { axis, value });
        }

        Ok(tol)
    }
}
