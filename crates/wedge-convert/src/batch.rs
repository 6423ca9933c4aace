//! Batch conversion pipeline.
//!
//! Maps bisection and wedge conversion over a triangle batch. Every
//! triangle is independent of every other, so the per-triangle work fans
//! out across a rayon thread pool; results are reassembled in input order
//! before being handed to the codec.

use rayon::prelude::*;
use tracing::{debug, info};
use wedge_types::{Triangle, Wedge};

use crate::bisect::bisect;
use crate::convert::to_wedge;

/// Result of converting a triangle batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// The produced wedges, in input order (a bisected triangle
    /// contributes its two wedges adjacently).
    pub wedges: Vec<Wedge>,

    /// Number of input triangles.
    pub source_triangles: usize,

    /// Number of right triangles skipped because their geometry was
    /// degenerate (zero-length longest edge or zero-area slivers).
    pub skipped_degenerate: usize,
}

impl BatchResult {
    /// Check whether every input triangle produced wedges.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.skipped_degenerate == 0
    }
}

impl std::fmt::Display for BatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Converted {} triangles into {} wedges ({} degenerate skipped)",
            self.source_triangles,
            self.wedges.len(),
            self.skipped_degenerate
        )
    }
}

/// Convert a batch of triangles into wedges.
///
/// Each triangle is bisected into one or two right triangles and each
/// right triangle becomes one wedge. Output order matches input order.
/// Degenerate geometry is skipped and counted rather than failing the
/// batch; use [`bisect`] and [`to_wedge`] directly for fail-fast
/// behavior.
///
/// # Example
///
/// ```
/// use wedge_convert::process_batch;
/// use wedge_types::Triangle;
///
/// let triangles = vec![
///     // Right triangle: one wedge
///     Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
///     // Equilateral: bisected into two wedges
///     Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 0.866, 0.0]),
/// ];
///
/// let result = process_batch(&triangles);
/// assert_eq!(result.wedges.len(), 3);
/// assert!(result.is_complete());
/// ```
#[must_use]
pub fn process_batch(triangles: &[Triangle]) -> BatchResult {
    info!(triangles = triangles.len(), "Starting wedge conversion");

    // Parallel map keyed by input index; collect preserves order.
    let per_triangle: Vec<(Vec<Wedge>, usize)> = triangles
        .par_iter()
        .enumerate()
        .map(|(index, triangle)| convert_one(index, triangle))
        .collect();

    let mut wedges = Vec::with_capacity(per_triangle.iter().map(|(w, _)| w.len()).sum());
    let mut skipped_degenerate = 0;
    for (mut produced, skipped) in per_triangle {
        wedges.append(&mut produced);
        skipped_degenerate += skipped;
    }

    let result = BatchResult {
        wedges,
        source_triangles: triangles.len(),
        skipped_degenerate,
    };

    info!(
        wedges = result.wedges.len(),
        skipped = result.skipped_degenerate,
        "Finished wedge conversion"
    );

    result
}

/// Convert one triangle, returning its wedges and a skip count.
fn convert_one(index: usize, triangle: &Triangle) -> (Vec<Wedge>, usize) {
    let bisection = match bisect(triangle) {
        Ok(b) => b,
        Err(error) => {
            debug!(index, %error, "Skipping triangle");
            return (Vec::new(), 1);
        }
    };

    let mut wedges = Vec::with_capacity(bisection.len());
    let mut skipped = 0;
    for right in bisection {
        match to_wedge(&right) {
            Ok(wedge) => wedges.push(wedge),
            Err(error) => {
                debug!(index, %error, "Skipping bisected half");
                skipped += 1;
            }
        }
    }
    (wedges, skipped)
}
