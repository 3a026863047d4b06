//! Extraction errors

use crate::float_types::Real;
use nalgebra::Point3;
use std::fmt::Display;

/// All the possible failures an extraction can report
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IsoError {
    /// (InvalidDomain) The bounds along `axis` are not finite or not increasing
    InvalidDomain { axis: usize, min: Real, max: Real },
    /// (InvalidTolerance) The tolerance along `axis` is not a positive finite number
    InvalidTolerance { axis: usize, value: Real },
    /// (NotAtZero) A marching crossing did not bisect down to a zero of the function
    NotAtZero { point: Point3<Real>, value: Real },
}

impl Display for IsoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IsoError::InvalidDomain { axis, min, max } => write!(
                f,
                "(InvalidDomain) Axis {} spans [{}, {}], expected finite bounds with min < max",
                axis, min, max
            ),
            IsoError::InvalidTolerance { axis, value } => write!(
                f,
                "(InvalidTolerance) Tolerance {} on axis {} must be positive and finite",
                value, axis
            ),
            IsoError::NotAtZero { point, value } => write!(
                f,
                "(NotAtZero) Intersection not at zero: f({}) = {}",
                point, value
            ),
        }
    }
}
