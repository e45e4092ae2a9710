/// Unit cube vertices, edge list, and the per-frame rotation used by the
/// Skills section's decorative wireframe cube.
pub const VERTICES: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

const CAMERA_DISTANCE: f64 = 4.0;

fn rotate(vertex: [f64; 3], rx: f64, ry: f64, rz: f64) -> [f64; 3] {
    let [x, y, z] = vertex;
    let (sx, cx) = rx.sin_cos();
    let (sy, cy) = ry.sin_cos();
    let (sz, cz) = rz.sin_cos();

    let (y1, z1) = (cx * y - sx * z, sx * y + cx * z);
    let (x2, z2) = (cy * x + sy * z1, -sy * x + cy * z1);
    let (x3, y3) = (cz * x2 - sz * y1, sz * x2 + cz * y1);

    [x3, y3, z2]
}

/// Cube pose at `time` seconds: rotation rates (0.3, 0.4, 0.2) rad/s.
pub fn rotated(time: f64) -> [[f64; 3]; 8] {
    let rx = time * 0.3;
    let ry = time * 0.4;
    let rz = time * 0.2;
    VERTICES.map(|vertex| rotate(vertex, rx, ry, rz))
}

/// Mild-perspective projection onto a size × size canvas.
pub fn project(vertex: [f64; 3], size: f64) -> (f64, f64) {
    let [x, y, z] = vertex;
    let scale = size * 0.22 * (CAMERA_DISTANCE / (CAMERA_DISTANCE - z));
    (size / 2.0 + x * scale, size / 2.0 + y * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_preserves_vertex_norms() {
        let expected = 3.0_f64.sqrt();
        for vertex in rotated(12.7) {
            let norm = (vertex[0].powi(2) + vertex[1].powi(2) + vertex[2].powi(2)).sqrt();
            assert!((norm - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_time_is_the_identity_pose() {
        assert_eq!(rotated(0.0), VERTICES);
    }

    #[test]
    fn every_edge_references_a_valid_vertex() {
        for (a, b) in EDGES {
            assert!(a < VERTICES.len() && b < VERTICES.len());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn projection_is_finite_over_a_full_spin() {
        for tick in 0..400 {
            let time = tick as f64 * 0.05;
            for vertex in rotated(time) {
                let (x, y) = project(vertex, 280.0);
                assert!(x.is_finite() && y.is_finite());
                assert!((-280.0..=560.0).contains(&x));
                assert!((-280.0..=560.0).contains(&y));
            }
        }
    }
}
