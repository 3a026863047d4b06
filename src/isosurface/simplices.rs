//! Tetrahedral decomposition of an adaptive octree.
//!
//! Every leaf is split into tetrahedra that fan out from its centre through
//! each face it shares with a neighbour (or with the domain boundary). When
//! the neighbour is finer, the leaf is split against each of the neighbour's
//! smaller faces instead of its own, so both sides of the interface use the
//! same face and edge duals and the surface stays crack-free.

use crate::float_types::Real;
use crate::point::ValuedPoint;
use crate::tree::{Cell, CellId, CellTree, Corners, MinimalCell, Side};
use nalgebra::Point3;

/// A tetrahedron: volume dual, face dual, edge dual and one corner of that edge.
pub type Simplex = [ValuedPoint<3>; 4];

/// Enumerates the simplices of one octree.
pub struct SimplexGenerator<'a, F> {
    tree: &'a CellTree<3>,
    f: &'a F,
}

impl<'a, F> SimplexGenerator<'a, F>
where
    F: Fn(&Point3<Real>) -> Real,
{
    pub const fn new(tree: &'a CellTree<3>, f: &'a F) -> Self {
        SimplexGenerator { tree, f }
    }

    /// All simplices of the tree, leaf by leaf in depth-first order.
    pub fn simplices(&self) -> Vec<Simplex> {
        let mut out = Vec::new();
        self.simplices_within(self.tree.root(), &mut out);
        log::debug!(
            "decomposed octree of {} cells into {} simplices",
            self.tree.len(),
            out.len()
        );
        out
    }

    fn simplices_within(&self, id: CellId, out: &mut Vec<Simplex>) {
        let cell = self.tree.cell(id);
        if !cell.is_leaf() {
            for child in cell.children() {
                self.simplices_within(child, out);
            }
            return;
        }

        for axis in 0..3 {
            for side in Side::BOTH {
                for neighbor in self.tree.walk_leaves_in_direction(id, axis, side) {
                    match neighbor {
                        None => self.simplices_between_face(cell, &cell.subcell(axis, side), out),
                        Some(other) => self.simplices_between(cell, self.tree.cell(other), axis, side, out),
                    }
                }
            }
        }
    }

    /// Simplices of `volume` against the interface it shares with `neighbor`,
    /// which lies on its `side` along `axis`.
    ///
    /// The interface is the finer cell's face. Only `volume`'s simplices are
    /// emitted; the neighbour's come from its own visit.
    fn simplices_between(
        &self,
        volume: &Cell<3>,
        neighbor: &Cell<3>,
        axis: usize,
        side: Side,
        out: &mut Vec<Simplex>,
    ) {
        let face = if volume.depth() > neighbor.depth() {
            volume.subcell(axis, side)
        } else {
            neighbor.subcell(axis, side.opposite())
        };
        self.simplices_between_face(volume, &face, out);
    }

    /// Eight simplices joining the centre of `volume` to `face`: one for each
    /// edge of the face and each end of that edge.
    fn simplices_between_face(&self, volume: &Cell<3>, face: &MinimalCell<3>, out: &mut Vec<Simplex>) {
        let volume_dual = volume.dual(self.f);
        let face_dual = face.dual(self.f);

        for i in 0..4 {
            let edge = face.subcell(i % 2, Side::from_bit(i / 2));
            let edge_dual = edge.dual(self.f);
            for &v in edge.vertices() {
                out.push([volume_dual, face_dual, edge_dual, v]);
            }
        }
    }
}
