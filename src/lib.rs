//! Adaptive **isoline** and **isosurface** extraction for implicit functions
//! `f(x, y) = 0` and `f(x, y, z) = 0`.
//!
//! The domain is refined into a quadtree or octree wherever the function
//! changes sign, the tree is split into triangles or tetrahedra that stay
//! consistent across cells of different depth, and the zero set is located on
//! every crossed edge by bisection. Cells where the function is only partly
//! defined (`NaN`) are refined too, so curves and surfaces stop cleanly at the
//! edge of the function's domain.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for marching tetrahedra

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod isoline;
pub mod isosurface;
pub mod point;
pub mod settings;
pub mod tree;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::IsoError;
pub use float_types::Real;
pub use isoline::{Polyline, extract_isoline};
pub use isosurface::{Face, Isosurface, extract_isosurface};
pub use point::{Sign, ValuedPoint, binary_search_zero};
pub use settings::Settings;
pub use tree::{CellTree, Corners};
