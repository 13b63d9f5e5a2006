//! Per-chunk elevation grid with bilinear height queries.
//!
//! The height-field backs both ground-mesh construction and the read-only
//! height query used by placement and physics callers.

use crate::coord::{CHUNK_SIZE, VERTS_PER_EDGE};

/// A `(CHUNK_SIZE + 1) x (CHUNK_SIZE + 1)` grid of elevation samples.
///
/// Stored row-major with x varying fastest. Sample `(i, j)` is the ground
/// height at chunk-local position `(i as f32, j as f32)`, so the outermost
/// rows/columns lie exactly on the chunk boundary and are shared (by value)
/// with the neighboring chunk's field.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    samples: Vec<f32>,
}

impl HeightField {
    /// Builds a height-field by evaluating `f(i, j)` at every grid point.
    ///
    /// `f` is called in row-major order (j outer, i inner), so callers that
    /// sample sequential noise get a deterministic evaluation order.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut samples = Vec::with_capacity(VERTS_PER_EDGE * VERTS_PER_EDGE);
        for j in 0..VERTS_PER_EDGE {
            for i in 0..VERTS_PER_EDGE {
                samples.push(f(i, j));
            }
        }
        Self { samples }
    }

    /// Height at the exact grid point `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` exceeds [`CHUNK_SIZE`].
    pub fn sample(&self, i: usize, j: usize) -> f32 {
        assert!(i < VERTS_PER_EDGE && j < VERTS_PER_EDGE);
        self.samples[j * VERTS_PER_EDGE + i]
    }

    /// The highest sample in the field.
    ///
    /// Placement probes originate above this height, guaranteeing they start
    /// above the ground surface everywhere in the chunk.
    pub fn max_height(&self) -> f32 {
        self.samples.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Bilinearly interpolated ground height at a chunk-local position.
    ///
    /// `local_x` and `local_z` are expected in `[0, CHUNK_SIZE]`. Inputs
    /// slightly outside that range (floating-point error from callers) are
    /// clamped to the boundary samples; this never indexes out of bounds.
    pub fn height_at(&self, local_x: f32, local_z: f32) -> f32 {
        let max = CHUNK_SIZE;
        let x0 = (local_x.floor() as i32).clamp(0, max) as usize;
        let x1 = (local_x.ceil() as i32).clamp(0, max) as usize;
        let z0 = (local_z.floor() as i32).clamp(0, max) as usize;
        let z1 = (local_z.ceil() as i32).clamp(0, max) as usize;

        let h00 = self.sample(x0, z0);
        let h10 = self.sample(x1, z0);
        let h01 = self.sample(x0, z1);
        let h11 = self.sample(x1, z1);

        let tx = (local_x - x0 as f32).clamp(0.0, 1.0);
        let tz = (local_z - z0 as f32).clamp(0.0, 1.0);

        let near = h00 + (h10 - h00) * tx;
        let far = h01 + (h11 - h01) * tx;
        near + (far - near) * tz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    /// A field whose height is `i + 10 * j`, handy for spotting index mixups.
    fn ramp_field() -> HeightField {
        HeightField::from_fn(|i, j| i as f32 + 10.0 * j as f32)
    }

    #[test]
    fn test_exact_grid_points_return_stored_height() {
        let field = ramp_field();
        for j in 0..VERTS_PER_EDGE {
            for i in 0..VERTS_PER_EDGE {
                let expected = i as f32 + 10.0 * j as f32;
                assert_eq!(field.sample(i, j), expected);
                let queried = field.height_at(i as f32, j as f32);
                assert!(
                    (queried - expected).abs() < EPSILON,
                    "height_at({i}, {j}) = {queried}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_quad_midpoint_averages_four_corners() {
        let field = HeightField::from_fn(|i, j| match (i, j) {
            (0, 0) => 1.0,
            (1, 0) => 3.0,
            (0, 1) => 5.0,
            (1, 1) => 7.0,
            _ => 0.0,
        });
        let mid = field.height_at(0.5, 0.5);
        assert!(
            (mid - 4.0).abs() < EPSILON,
            "midpoint should average the four corners, got {mid}"
        );
    }

    #[test]
    fn test_interpolates_along_one_axis() {
        let field = ramp_field();
        let h = field.height_at(2.25, 3.0);
        assert!((h - (2.25 + 30.0)).abs() < EPSILON);
        let h = field.height_at(2.0, 3.75);
        assert!((h - (2.0 + 37.5)).abs() < EPSILON);
    }

    #[test]
    fn test_boundary_values_are_exact() {
        let field = ramp_field();
        let s = CHUNK_SIZE as f32;
        assert!((field.height_at(0.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((field.height_at(s, 0.0) - s).abs() < EPSILON);
        assert!((field.height_at(0.0, s) - 10.0 * s).abs() < EPSILON);
        assert!((field.height_at(s, s) - (s + 10.0 * s)).abs() < EPSILON);
    }

    #[test]
    fn test_out_of_range_inputs_clamp_without_panicking() {
        let field = ramp_field();
        let s = CHUNK_SIZE as f32;
        for (x, z) in [
            (-0.4, -0.4),
            (s + 0.4, s + 0.4),
            (-1000.0, 5.0),
            (5.0, 1000.0),
            (s + 0.4, 2.0),
        ] {
            let h = field.height_at(x, z);
            assert!(h.is_finite(), "height_at({x}, {z}) must stay finite");
        }
        // Just beyond the far edge clamps to the edge sample.
        let edge = field.height_at(s, 2.0);
        let beyond = field.height_at(s + 0.4, 2.0);
        assert!((edge - beyond).abs() < EPSILON);
    }

    #[test]
    fn test_max_height_finds_peak() {
        let field = HeightField::from_fn(|i, j| if (i, j) == (4, 9) { 42.5 } else { 1.0 });
        assert_eq!(field.max_height(), 42.5);
    }
}
