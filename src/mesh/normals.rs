use na::Unit;

use crate::math::{Point, Vector, DEFAULT_EPSILON};

/// Computes smooth per-vertex normals for an indexed triangle mesh.
///
/// Every triangle's cross-product normal is accumulated onto its three
/// vertices and the sums are normalized per vertex. The cross product's
/// magnitude is twice the face area, so larger faces weigh more, matching
/// the smoothing pass rendering engines apply after mesh submission.
///
/// Vertices referenced by no triangle, or whose accumulated normal is
/// degenerate, get the `+y` axis.
pub fn vertex_normals(vertices: &[Point], indices: &[[u32; 3]]) -> Vec<Vector> {
    let mut normals = vec![Vector::zeros(); vertices.len()];

    for idx in indices {
        let a = vertices[idx[0] as usize];
        let b = vertices[idx[1] as usize];
        let c = vertices[idx[2] as usize];
        let n = (b - a).cross(&(c - a));

        for i in idx {
            normals[*i as usize] += n;
        }
    }

    normals
        .into_iter()
        .map(|n| {
            Unit::try_new(n, DEFAULT_EPSILON)
                .map(|n| n.into_inner())
                .unwrap_or_else(Vector::y)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::vertex_normals;
    use crate::math::{Point, Vector};

    #[test]
    fn flat_quad_points_up() {
        let vertices = vec![
            Point::new(-1.0, 0.0, -1.0),
            Point::new(0.0, 0.0, -1.0),
            Point::new(-1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
        ];
        let normals = vertex_normals(&vertices, &[[0, 2, 1], [1, 2, 3]]);

        assert_eq!(normals, vec![Vector::y(); 4]);
    }

    #[test]
    fn unreferenced_vertex_defaults_to_up() {
        let vertices = vec![Point::origin()];
        assert_eq!(vertex_normals(&vertices, &[]), vec![Vector::y()]);
    }
}
