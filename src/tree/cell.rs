//! Cells of the adaptive tree and their lower-dimensional boundary pieces.

use crate::float_types::{REFINEMENT_FLOOR, Real};
use crate::point::{Sign, ValuedPoint};
use crate::tree::mask::{CornerMask, Side};
use nalgebra::{Point, SVector};

/// Index of a cell inside its [`CellTree`](crate::tree::CellTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Anything addressed by a bit-ordered list of sampled corners.
pub trait Corners<const D: usize> {
    /// Intrinsic dimension: `D` for a cell, less for faces and edges.
    fn dim(&self) -> usize;

    /// The `2^dim` corners in bit order.
    fn vertices(&self) -> &[ValuedPoint<D>];

    /// The `(dim - 1)`-dimensional piece on `side` of local axis `axis`.
    fn subcell(&self, axis: usize, side: Side) -> MinimalCell<D> {
        let vertices = self
            .vertices()
            .iter()
            .enumerate()
            .filter(|(i, _)| Side::from_bit(i >> axis) == side)
            .map(|(_, v)| *v)
            .collect();
        MinimalCell::new(self.dim().saturating_sub(1), vertices)
    }

    /// Midpoint of the two extreme corners, re-sampled.
    fn dual<F>(&self, f: &F) -> ValuedPoint<D>
    where
        F: Fn(&Point<Real, D>) -> Real,
    {
        let vertices = self.vertices();
        ValuedPoint::midpoint(&vertices[0], &vertices[vertices.len() - 1], f)
    }

    /// Lowest corner position.
    fn min_corner(&self) -> Point<Real, D> {
        self.vertices()[0].pos
    }

    /// Highest corner position.
    fn max_corner(&self) -> Point<Real, D> {
        self.vertices()[self.vertices().len() - 1].pos
    }

    /// Per-axis size.
    fn extent(&self) -> SVector<Real, D> {
        self.max_corner() - self.min_corner()
    }
}

/// A face, edge or vertex of a [`Cell`], without tree linkage.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimalCell<const D: usize> {
    dim: usize,
    vertices: Vec<ValuedPoint<D>>,
}

impl<const D: usize> MinimalCell<D> {
    pub const fn new(dim: usize, vertices: Vec<ValuedPoint<D>>) -> Self {
        MinimalCell { dim, vertices }
    }
}

impl<const D: usize> Corners<D> for MinimalCell<D> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn vertices(&self) -> &[ValuedPoint<D>] {
        &self.vertices
    }
}

/// A node of the adaptive tree.
#[derive(Debug, Clone)]
pub struct Cell<const D: usize> {
    pub(crate) vertices: Vec<ValuedPoint<D>>,
    pub(crate) depth: usize,
    /// Children are stored contiguously starting here
    pub(crate) first_child: Option<CellId>,
    pub(crate) parent: Option<CellId>,
    pub(crate) child_index: CornerMask<D>,
}

impl<const D: usize> Cell<D> {
    /// Sample `f` on the corners of the box `[pmin, pmax]`.
    pub(crate) fn new<F>(
        pmin: &Point<Real, D>,
        pmax: &Point<Real, D>,
        f: &F,
        depth: usize,
        parent: Option<CellId>,
        child_index: CornerMask<D>,
    ) -> Self
    where
        F: Fn(&Point<Real, D>) -> Real,
    {
        Cell {
            vertices: vertices_from_extremes(pmin, pmax, f),
            depth,
            first_child: None,
            parent,
            child_index,
        }
    }

    pub const fn depth(&self) -> usize {
        self.depth
    }

    pub const fn parent(&self) -> Option<CellId> {
        self.parent
    }

    /// Which of the parent's children this cell is.
    pub const fn child_index(&self) -> CornerMask<D> {
        self.child_index
    }

    pub const fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    /// Ids of the children in bit order, empty for a leaf.
    pub fn children(&self) -> impl Iterator<Item = CellId> + use<D> {
        let first = self.first_child.map_or(0, |c| c.0);
        let count = if self.first_child.is_some() {
            CornerMask::<D>::COUNT
        } else {
            0
        };
        (first..first + count).map(CellId)
    }

    /// Child with the given index, `None` for a leaf.
    pub fn child(&self, mask: CornerMask<D>) -> Option<CellId> {
        self.first_child.map(|c| CellId(c.0 + mask.to_linear()))
    }

    /// Corner boxes of the `2^D` children: child `i` spans from the parent's
    /// corner `i` to the parent's centre along every axis.
    pub(crate) fn child_extents(&self) -> Vec<(Point<Real, D>, Point<Real, D>)> {
        let lo = self.min_corner();
        let hi = self.max_corner();
        let mid = nalgebra::center(&lo, &hi);

        CornerMask::<D>::enumerate()
            .map(|mask| {
                let mut cmin = lo;
                let mut cmax = mid;
                for axis in 0..D {
                    if mask.is_set(axis) {
                        cmin[axis] = mid[axis];
                        cmax[axis] = hi[axis];
                    }
                }
                (cmin, cmax)
            })
            .collect()
    }
}

impl<const D: usize> Corners<D> for Cell<D> {
    fn dim(&self) -> usize {
        D
    }

    fn vertices(&self) -> &[ValuedPoint<D>] {
        &self.vertices
    }
}

/// Sample `f` on all `2^D` corners of `[pmin, pmax]`, in bit order.
pub fn vertices_from_extremes<const D: usize, F>(
    pmin: &Point<Real, D>,
    pmax: &Point<Real, D>,
    f: &F,
) -> Vec<ValuedPoint<D>>
where
    F: Fn(&Point<Real, D>) -> Real,
{
    CornerMask::<D>::enumerate()
        .map(|mask| {
            let mut pos = *pmin;
            for axis in 0..D {
                if mask.is_set(axis) {
                    pos[axis] = pmax[axis];
                }
            }
            ValuedPoint::sample(pos, f)
        })
        .collect()
}

/// Whether a cell past the minimum depth still needs refining.
///
/// Cells already within `REFINEMENT_FLOOR * tol` on every axis stop. Fully
/// undefined cells stop, partially undefined ones always split, and otherwise
/// a cell splits when its corners do not all share one sign.
pub fn should_descend<const D: usize, C: Corners<D>>(cell: &C, tol: &SVector<Real, D>) -> bool {
    let extent = cell.extent();
    if extent
        .iter()
        .zip(tol.iter())
        .all(|(e, t)| *e < REFINEMENT_FLOOR * t)
    {
        return false;
    }

    let vertices = cell.vertices();
    if vertices.iter().all(|v| v.val.is_nan()) {
        return false;
    }
    if vertices.iter().any(|v| v.val.is_nan()) {
        return true;
    }

    let first: Option<Sign> = vertices[0].sign();
    vertices[1..].iter().any(|v| v.sign() != first)
}
