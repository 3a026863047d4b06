//! Property tests for the adaptive tree and the root-finder.

use isoplot::float_types::Real;
use isoplot::tree::{Cell, CellTree, Corners, Side, should_descend};
use isoplot::{ValuedPoint, binary_search_zero};
use nalgebra::{Point2, Point3, Vector2, Vector3};
use proptest::prelude::*;

fn offset_circle(cx: Real, cy: Real, r: Real) -> impl Fn(&Point2<Real>) -> Real {
    move |p: &Point2<Real>| (p.x - cx).powi(2) + (p.y - cy).powi(2) - r * r
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn leaves_tile_the_domain(
        cx in -1.5..1.5f64,
        cy in -1.5..1.5f64,
        r in 0.1..1.5f64,
        min_depth in 0usize..4,
    ) {
        let f = offset_circle(cx as Real, cy as Real, r as Real);
        let tol = Vector2::new(0.01, 0.01);
        let tree = CellTree::build(&f, &Point2::new(-2.0, -2.0), &Point2::new(2.0, 2.0), min_depth, 2000, &tol);

        for leaf in tree.leaves() {
            let mut id = leaf;
            while let Some(parent) = tree.cell(id).parent() {
                let volume = |c: &Cell<2>| c.extent().x * c.extent().y;
                let children: Real = tree.cell(parent).children().map(|c| volume(tree.cell(c))).sum();
                prop_assert!((children - volume(tree.cell(parent))).abs() < 1e-9);
                id = parent;
            }
        }

        let mut area = 0.0;
        for leaf in tree.leaves() {
            let cell = tree.cell(leaf);
            let e = cell.extent();
            area += e.x * e.y;
            prop_assert!(cell.depth() >= min_depth);
        }
        prop_assert!((area - 16.0).abs() < 1e-9);
    }

    #[test]
    fn refinement_stops_only_where_allowed(
        cx in -1.5..1.5f64,
        cy in -1.5..1.5f64,
        r in 0.1..1.5f64,
    ) {
        let f = offset_circle(cx as Real, cy as Real, r as Real);
        let tol = Vector2::new(0.01, 0.01);
        // large enough that the leaf budget never interrupts refinement
        let tree = CellTree::build(&f, &Point2::new(-2.0, -2.0), &Point2::new(2.0, 2.0), 2, 1_000_000, &tol);

        for leaf in tree.leaves() {
            prop_assert!(!should_descend(tree.cell(leaf), &tol));
        }
    }

    #[test]
    fn neighbours_walk_back(
        cx in -1.5..1.5f64,
        cy in -1.5..1.5f64,
        r in 0.1..1.5f64,
    ) {
        let f = offset_circle(cx as Real, cy as Real, r as Real);
        let tol = Vector2::new(0.05, 0.05);
        let tree = CellTree::build(&f, &Point2::new(-2.0, -2.0), &Point2::new(2.0, 2.0), 2, 2000, &tol);

        for leaf in tree.leaves() {
            let depth = tree.cell(leaf).depth();
            for axis in 0..2 {
                for side in Side::BOTH {
                    let Some(neighbor) = tree.walk_in_direction(leaf, axis, side) else {
                        continue;
                    };
                    let neighbor_depth = tree.cell(neighbor).depth();
                    prop_assert!(neighbor_depth <= depth);

                    // a coarser neighbour walks back to the leaf's ancestor at its own depth
                    let mut expected = leaf;
                    while tree.cell(expected).depth() > neighbor_depth {
                        expected = tree.cell(expected).parent().unwrap();
                    }
                    prop_assert_eq!(tree.walk_in_direction(neighbor, axis, side.opposite()), Some(expected));
                }
            }
        }
    }

    #[test]
    fn adjacent_leaves_share_their_face(
        cx in -1.0..1.0f64,
        cy in -1.0..1.0f64,
        cz in -1.0..1.0f64,
    ) {
        let f = move |p: &Point3<Real>| (p.coords - Vector3::new(cx as Real, cy as Real, cz as Real)).norm() - 0.7;
        let tol = Vector3::new(0.05, 0.05, 0.05);
        let tree = CellTree::build(
            &f,
            &Point3::new(-2.0, -2.0, -2.0),
            &Point3::new(2.0, 2.0, 2.0),
            1,
            1000,
            &tol,
        );

        for leaf in tree.leaves() {
            let cell = tree.cell(leaf);
            for axis in 0..3 {
                for side in Side::BOTH {
                    let plane = cell.subcell(axis, side).min_corner()[axis];
                    for neighbor in tree.walk_leaves_in_direction(leaf, axis, side).flatten() {
                        let other = tree.cell(neighbor).subcell(axis, side.opposite());
                        prop_assert_eq!(other.min_corner()[axis], plane);
                    }
                }
            }
        }
    }

    #[test]
    fn bisection_brackets_the_root(root in -0.9..0.9f64, slope in 0.5..4.0f64) {
        let (root, slope) = (root as Real, slope as Real);
        let f = move |p: &Point2<Real>| slope * (p.x - root) + (p.x - root).powi(3);
        let tol = Vector2::new(1e-6, 1e-6);
        let a = ValuedPoint::sample(Point2::new(-1.0, 0.0), &f);
        let b = ValuedPoint::sample(Point2::new(1.0, 0.0), &f);

        let (found, is_zero) = binary_search_zero(&a, &b, &f, &tol);
        prop_assert!(is_zero);
        prop_assert!((found.pos.x - root).abs() < 1e-5);
    }
}
