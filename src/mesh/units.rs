use crate::Vec3;

/// Metres in the source files, centimetres in the renderer.
pub const DEFAULT_UNIT_SCALE: f32 = 100.0;

/// Multiply every position component by `scale`.
pub fn scale_vertices(vertices: &mut [Vec3], scale: f32) {
    for vertex in vertices.iter_mut() {
        for component in vertex.iter_mut() {
            *component *= scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let mut vertices = vec![[0.25, -0.5, 1.0]];
        scale_vertices(&mut vertices, DEFAULT_UNIT_SCALE);
        assert_eq!(vertices, vec![[25.0, -50.0, 100.0]]);
    }

    #[test]
    fn test_scale_composes() {
        let start = vec![[0.3, -1.7, 2.25], [1e-3, 4.0, -0.125]];
        let mut twice = start.clone();
        scale_vertices(&mut twice, 2.5);
        scale_vertices(&mut twice, 0.4);

        let mut once = start;
        scale_vertices(&mut once, 2.5 * 0.4);

        for (a, b) in twice.iter().flatten().zip(once.iter().flatten()) {
            assert!((a - b).abs() <= 1e-5 * b.abs().max(1.0), "{a} vs {b}");
        }
    }
}
