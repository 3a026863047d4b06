//! Sampled points and the bisection root-finder.

use crate::float_types::{DISCONTINUITY_LIMIT, Real};
use nalgebra::{Point, SVector};
use std::fmt;

/// Sign of a sampled value. `NaN` has no sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classify `value`, returning `None` for `NaN`.
    #[inline]
    pub fn of(value: Real) -> Option<Sign> {
        if value > 0.0 {
            Some(Sign::Positive)
        } else if value < 0.0 {
            Some(Sign::Negative)
        } else if value == 0.0 {
            Some(Sign::Zero)
        } else {
            None
        }
    }
}

/// True when both values have the same sign. Any `NaN` compares unequal.
#[inline]
pub fn same_sign(a: Real, b: Real) -> bool {
    match (Sign::of(a), Sign::of(b)) {
        (Some(sa), Some(sb)) => sa == sb,
        _ => false,
    }
}

/// A position together with the value the oracle returned there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuedPoint<const D: usize> {
    pub pos: Point<Real, D>,
    pub val: Real,
}

impl<const D: usize> ValuedPoint<D> {
    /// Create a point with an already known value.
    pub const fn new(pos: Point<Real, D>, val: Real) -> Self {
        ValuedPoint { pos, val }
    }

    /// Sample `f` at `pos`.
    pub fn sample<F>(pos: Point<Real, D>, f: &F) -> Self
    where
        F: Fn(&Point<Real, D>) -> Real,
    {
        let val = f(&pos);
        ValuedPoint { pos, val }
    }

    /// The sign of the sampled value, `None` if it is `NaN`.
    #[inline]
    pub fn sign(&self) -> Option<Sign> {
        Sign::of(self.val)
    }

    /// Geometric midpoint of `p1` and `p2`, re-sampled.
    pub fn midpoint<F>(p1: &Self, p2: &Self, f: &F) -> Self
    where
        F: Fn(&Point<Real, D>) -> Real,
    {
        Self::sample(nalgebra::center(&p1.pos, &p2.pos), f)
    }

    /// Where the line through `(p1.pos, p1.val)` and `(p2.pos, p2.val)` reaches zero, re-sampled.
    ///
    /// Equal values give a non-finite position whose sample is usually `NaN`.
    pub fn intersect_zero<F>(p1: &Self, p2: &Self, f: &F) -> Self
    where
        F: Fn(&Point<Real, D>) -> Real,
    {
        let denom = p1.val - p2.val;
        let k1 = -p2.val / denom;
        let k2 = p1.val / denom;
        let coords: SVector<Real, D> = p1.pos.coords * k1 + p2.pos.coords * k2;
        Self::sample(Point::from(coords), f)
    }
}

impl<const D: usize> fmt::Display for ValuedPoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.pos.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "; {})", self.val)
    }
}

/// True when `value` lies between the bracket values `a` and `b`, ends included.
///
/// Once the bracket is a few floats wide the secant estimate often lands on
/// one of its ends, so equality has to count.
#[inline]
fn within_bracket(value: Real, a: Real, b: Real) -> bool {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    low <= value && value <= high
}

/// Locate a zero of `f` between `p1` and `p2` by sign bisection.
///
/// Bisection stops once the bracket is smaller than `tol` on every axis (or
/// can no longer be split in floating point); the final estimate is the secant
/// intersection of the bracket. The returned flag is `true` when that estimate
/// is an exact zero, or its value lies within the bracket values without being
/// so large that it is more likely a pole than a root.
pub fn binary_search_zero<const D: usize, F>(
    p1: &ValuedPoint<D>,
    p2: &ValuedPoint<D>,
    f: &F,
    tol: &SVector<Real, D>,
) -> (ValuedPoint<D>, bool)
where
    F: Fn(&Point<Real, D>) -> Real,
{
    let mut lo = *p1;
    let mut hi = *p2;

    loop {
        let span = hi.pos - lo.pos;
        let mid_pos = nalgebra::center(&lo.pos, &hi.pos);
        let converged = span.iter().zip(tol.iter()).all(|(s, t)| s.abs() < *t)
            || mid_pos == lo.pos
            || mid_pos == hi.pos;

        if converged {
            let pt = ValuedPoint::intersect_zero(&lo, &hi, f);
            let is_zero = pt.val == 0.0
                || (within_bracket(pt.val, lo.val, hi.val) && pt.val.abs() < DISCONTINUITY_LIMIT);
            return (pt, is_zero);
        }

        let mid = ValuedPoint::sample(mid_pos, f);
        if mid.val == 0.0 {
            return (mid, true);
        }
        if same_sign(mid.val, lo.val) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
}
