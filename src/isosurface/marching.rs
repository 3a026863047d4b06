//! Marching tetrahedra over dual simplices.

use crate::errors::IsoError;
use crate::float_types::Real;
use crate::isosurface::simplices::Simplex;
use crate::point::binary_search_zero;
use nalgebra::{Point3, Vector3};

/// A triangle of the extracted surface.
pub type Face = [Point3<Real>; 3];

/// Simplex edges crossed by the surface for a sign code with one or two
/// positive corners. Corner 0 is the most significant bit of the code.
///
/// Codes with three or four positive corners are covered by their complement,
/// since flipping every sign crosses the same edges.
const fn tetrahedron_edges(code: u8) -> Option<&'static [[usize; 2]]> {
    match code {
        0b0000 => Some(&[]),
        0b0001 => Some(&[[0, 3], [1, 3], [2, 3]]),
        0b0010 => Some(&[[0, 2], [1, 2], [3, 2]]),
        0b0100 => Some(&[[0, 1], [2, 1], [3, 1]]),
        0b1000 => Some(&[[1, 0], [2, 0], [3, 0]]),
        0b0011 => Some(&[[0, 2], [2, 1], [1, 3], [3, 0]]),
        0b0110 => Some(&[[0, 1], [1, 3], [3, 2], [2, 0]]),
        0b0101 => Some(&[[0, 1], [1, 2], [2, 3], [3, 0]]),
        _ => None,
    }
}

/// 4-bit code with a bit set for every corner whose value is positive.
pub fn sign_code(simplex: &Simplex) -> u8 {
    simplex
        .iter()
        .fold(0u8, |code, p| (code << 1) | u8::from(p.val > 0.0))
}

/// Corner pairs whose edges the surface crosses, in winding order.
pub fn march_indices(simplex: &Simplex) -> &'static [[usize; 2]] {
    let code = sign_code(simplex);
    tetrahedron_edges(code)
        .or_else(|| tetrahedron_edges(0b1111 ^ code))
        .unwrap_or(&[])
}

/// Triangles cutting `simplex` along `f = 0`.
///
/// Each crossing is located with [`binary_search_zero`]; a crossing it cannot
/// confirm means the sign code and the field disagree, which aborts with
/// [`IsoError::NotAtZero`]. A quadrilateral cut is split along its `1-3`
/// diagonal. Triangles whose corners collapse onto one another are dropped.
pub fn march_simplex<F>(simplex: &Simplex, f: &F, tol: &Vector3<Real>) -> Result<Vec<Face>, IsoError>
where
    F: Fn(&Point3<Real>) -> Real,
{
    let indices = march_indices(simplex);
    if indices.is_empty() {
        return Ok(Vec::new());
    }

    let mut points = Vec::with_capacity(indices.len());
    for &[i, j] in indices {
        let (intersection, is_zero) = binary_search_zero(&simplex[i], &simplex[j], f, tol);
        if !is_zero {
            return Err(IsoError::NotAtZero {
                point: intersection.pos,
                value: intersection.val,
            });
        }
        points.push(intersection.pos);
    }

    let faces = if points.len() == 3 {
        vec![[points[0], points[1], points[2]]]
    } else {
        vec![
            [points[0], points[1], points[3]],
            [points[1], points[2], points[3]],
        ]
    };

    Ok(faces
        .into_iter()
        .filter(|face| {
            let degenerate = face[0] == face[1] || face[1] == face[2] || face[2] == face[0];
            if degenerate {
                log::trace!("dropping collapsed face at {}", face[0]);
            }
            !degenerate
        })
        .collect())
}
