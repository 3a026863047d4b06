//! Adaptive quadtree / octree over an axis-aligned box.
//!
//! The tree owns every [`Cell`] in a flat arena; children of a cell are stored
//! contiguously and refer back to their parent by [`CellId`]. Neighbour queries
//! climb and redescend through mirrored child indices, so they work across
//! cells of different depth.

pub mod cell;
pub mod mask;

pub use cell::{Cell, CellId, Corners, MinimalCell, should_descend, vertices_from_extremes};
pub use mask::{CornerMask, Side};

use crate::float_types::Real;
use nalgebra::{Point, SVector};
use std::collections::VecDeque;

/// Arena-backed cell tree of dimension `D`.
#[derive(Debug, Clone)]
pub struct CellTree<const D: usize> {
    cells: Vec<Cell<D>>,
}

impl<const D: usize> CellTree<D> {
    /// Create a tree holding only the root cell over `[pmin, pmax]`.
    pub fn new<F>(pmin: &Point<Real, D>, pmax: &Point<Real, D>, f: &F) -> Self
    where
        F: Fn(&Point<Real, D>) -> Real,
    {
        let root = Cell::new(pmin, pmax, f, 0, None, CornerMask::from_linear(0));
        CellTree { cells: vec![root] }
    }

    /// Build the adaptive tree breadth first.
    ///
    /// Every cell shallower than `min_depth` is split; deeper cells split while
    /// [`should_descend`] holds. Refinement stops once the number of leaves
    /// reaches `max(2^(D * min_depth), max_cells)`.
    pub fn build<F>(
        f: &F,
        pmin: &Point<Real, D>,
        pmax: &Point<Real, D>,
        min_depth: usize,
        max_cells: usize,
        tol: &SVector<Real, D>,
    ) -> Self
    where
        F: Fn(&Point<Real, D>) -> Real,
    {
        let branching = CornerMask::<D>::COUNT;
        let uniform_cells = u32::try_from(min_depth)
            .ok()
            .and_then(|depth| branching.checked_pow(depth))
            .unwrap_or(usize::MAX);
        let max_cells = uniform_cells.max(max_cells);

        let mut tree = Self::new(pmin, pmax, f);
        let mut queue = VecDeque::from([tree.root()]);
        let mut leaf_count = 1usize;

        while leaf_count < max_cells {
            let Some(id) = queue.pop_front() else {
                break;
            };
            let cell = tree.cell(id);
            if cell.depth < min_depth || should_descend(cell, tol) {
                tree.compute_children(id, f);
                queue.extend(tree.cell(id).children());
                leaf_count += branching - 1;
            }
        }

        if !queue.is_empty() {
            log::trace!(
                "cell budget of {} leaves reached with {} cells still queued",
                max_cells,
                queue.len()
            );
        }
        log::debug!(
            "built {}-d cell tree: {} cells, {} leaves, depth {}",
            D,
            tree.len(),
            leaf_count,
            tree.depth()
        );

        tree
    }

    pub const fn root(&self) -> CellId {
        CellId(0)
    }

    pub fn cell(&self, id: CellId) -> &Cell<D> {
        &self.cells[id.0]
    }

    /// Total number of cells, internal nodes included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Depth of the deepest cell.
    pub fn depth(&self) -> usize {
        self.cells.iter().map(|c| c.depth).max().unwrap_or(0)
    }

    /// All leaves, in arena order.
    pub fn leaves(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_leaf())
            .map(|(i, _)| CellId(i))
    }

    /// Child `mask` of `id`, `None` if `id` is a leaf.
    pub fn child(&self, id: CellId, mask: CornerMask<D>) -> Option<CellId> {
        self.cell(id).child(mask)
    }

    /// Split `id` at its centre into `2^D` sampled children. Does nothing if
    /// the cell already has children.
    pub fn compute_children<F>(&mut self, id: CellId, f: &F)
    where
        F: Fn(&Point<Real, D>) -> Real,
    {
        let cell = self.cell(id);
        if !cell.is_leaf() {
            return;
        }

        let depth = cell.depth + 1;
        let first = CellId(self.cells.len());
        let children: Vec<Cell<D>> = cell
            .child_extents()
            .iter()
            .zip(CornerMask::<D>::enumerate())
            .map(|((cmin, cmax), mask)| Cell::new(cmin, cmax, f, depth, Some(id), mask))
            .collect();

        self.cells.extend(children);
        self.cells[id.0].first_child = Some(first);
    }

    /// Leaf descendants of `id` lying on `side` along `axis`.
    pub fn leaves_in_direction(&self, id: CellId, axis: usize, side: Side) -> LeavesInDirection<'_, D> {
        LeavesInDirection {
            tree: self,
            axis,
            side,
            stack: vec![id],
        }
    }

    /// The neighbour of `id` across its `side` face along `axis`.
    ///
    /// The result has the same depth as `id` when the tree is refined that far
    /// on the other side, otherwise it is the shallower leaf covering that
    /// region. Returns `None` at the boundary of the domain.
    pub fn walk_in_direction(&self, id: CellId, axis: usize, side: Side) -> Option<CellId> {
        let cell = self.cell(id);
        let parent = cell.parent?;
        let mirrored = cell.child_index.toggled(axis);

        if cell.child_index.side(axis) == side {
            // on the outer half of the parent: the neighbour lives under the parent's neighbour
            let walked = self.walk_in_direction(parent, axis, side)?;
            Some(self.child(walked, mirrored).unwrap_or(walked))
        } else {
            self.child(parent, mirrored)
        }
    }

    /// Leaves adjacent to `id` across its `side` face along `axis`.
    ///
    /// Yields every leaf of the neighbouring subtree that touches the shared
    /// face, or a single `None` when `id` lies on the domain boundary.
    pub fn walk_leaves_in_direction(
        &self,
        id: CellId,
        axis: usize,
        side: Side,
    ) -> impl Iterator<Item = Option<CellId>> + '_ {
        let walked = self.walk_in_direction(id, axis, side);
        let boundary = walked.is_none().then_some(None);
        walked
            .into_iter()
            .flat_map(move |n| self.leaves_in_direction(n, axis, side.opposite()))
            .map(Some)
            .chain(boundary)
    }
}

/// Depth-first iterator over the leaves on one side of a subtree.
pub struct LeavesInDirection<'a, const D: usize> {
    tree: &'a CellTree<D>,
    axis: usize,
    side: Side,
    stack: Vec<CellId>,
}

impl<const D: usize> Iterator for LeavesInDirection<'_, D> {
    type Item = CellId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let cell = self.tree.cell(id);
            if cell.is_leaf() {
                return Some(id);
            }
            // reversed so children come out in ascending index order
            let mut facing: Vec<CellId> = CornerMask::<D>::on_side(self.axis, self.side)
                .filter_map(|mask| cell.child(mask))
                .collect();
            facing.reverse();
            self.stack.extend(facing);
        }
        None
    }
}
