// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Values at or beyond this magnitude are treated as a discontinuity rather
/// than a root when the bisection search checks its final interpolation.
#[cfg(feature = "f32")]
pub const DISCONTINUITY_LIMIT: Real = 1e30;
/// Values at or beyond this magnitude are treated as a discontinuity rather
/// than a root when the bisection search checks its final interpolation.
#[cfg(feature = "f64")]
pub const DISCONTINUITY_LIMIT: Real = 1e200;

/// Divisor applied to the domain extent when no tolerance is supplied.
pub const DEFAULT_TOLERANCE_DIVISOR: Real = 1000.0;

/// Cells whose every extent is below `REFINEMENT_FLOOR * tolerance` are never split.
pub const REFINEMENT_FLOOR: Real = 10.0;

/// Bit pattern of a coordinate, with `-0.0` folded onto `0.0`, usable as a hash key.
#[inline]
#[allow(clippy::unnecessary_cast)]
pub fn coordinate_bits(value: Real) -> u64 {
    (value + 0.0).to_bits() as u64
}
