// file: src/weaver/mod.rs
// version: 1.0.0
// guid: 01c33d17-fd7f-4a02-970a-713c77863575

//! Hamiltonian cycle solver for discocube graphs.
//!
//! The lower hemisphere is woven level by level out of a prespun 2D
//! yarn, the resulting threads are mirrored through the equator into
//! closed cycles and finally merged into a single cycle.

pub mod graph;
pub mod loom;
pub mod merge;
pub mod types;
pub mod yarn;

pub use graph::{
    layers_from_radius, level_specs, order_from_layers, order_from_radius, radius_from_layers,
    vertices,
};
pub use types::{Solution, Vert, YarnColor};

use crate::error::{Result, WeaveError};
use crate::weaver::loom::{chop, extend_threads, mirror_chains, pin_ends};
use crate::weaver::types::{Loom, Tour};
use crate::weaver::yarn::spin;
use tracing::debug;

/// Weave a Hamiltonian cycle on the discocube graph with `n` layers
/// per hemisphere, visiting all `4(n + 2)(n + 1)n / 3` vertices.
pub fn weave(n: u32) -> Result<Solution> {
    if n == 0 {
        return Err(WeaveError::invalid_argument(
            "number of layers must be at least 1",
        ));
    }
    let radius = graph::radius_from_layers(n);
    let spool = spin(radius);
    let mut loom = Loom::new();
    for spec in graph::level_specs(n) {
        debug!(
            "Weaving level z={} from {} yarn ({} vertices)",
            spec.z,
            spec.color.as_str(),
            spec.size
        );
        let pins = pin_ends(&mut loom, spec.z);
        let tour: Tour = spool.yarn(spec.color)[..spec.size]
            .iter()
            .map(|&(x, y)| (x, y, spec.z))
            .collect();
        extend_threads(&mut loom, chop(tour, &pins));
    }
    let mut cycles: Vec<Tour> = loom.into_iter().map(Vec::from).collect();
    mirror_chains(&mut cycles);
    merge::merge_cycles(cycles, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_weave_smallest_cube() {
        // Arrange & Act
        let solution = weave(1).unwrap();

        // Assert
        assert_eq!(
            solution,
            vec![
                (1, 1, -1),
                (1, -1, -1),
                (-1, -1, -1),
                (-1, 1, -1),
                (-1, 1, 1),
                (-1, -1, 1),
                (1, -1, 1),
                (1, 1, 1),
            ]
        );
    }

    #[test]
    fn test_weave_two_layers_lower_half() {
        // Arrange & Act
        let solution = weave(2).unwrap();

        // Assert
        assert_eq!(solution.len(), 32);
        assert_eq!(
            &solution[..16],
            &[
                (-1, 3, -1),
                (1, 3, -1),
                (1, 1, -1),
                (1, 1, -3),
                (1, -1, -3),
                (-1, -1, -3),
                (-1, 1, -3),
                (-1, 1, -1),
                (-3, 1, -1),
                (-3, -1, -1),
                (-1, -1, -1),
                (-1, -3, -1),
                (1, -3, -1),
                (1, -1, -1),
                (3, -1, -1),
                (3, 1, -1),
            ]
        );
    }

    #[test]
    fn test_weave_visits_every_vertex_once() {
        // Arrange & Act & Assert
        for n in 1..=6 {
            let solution = weave(n).unwrap();
            assert_eq!(solution.len(), order_from_layers(n));
            let seen: HashSet<Vert> = solution.iter().copied().collect();
            assert_eq!(seen.len(), solution.len());
            let expected: HashSet<Vert> = vertices(n).into_iter().collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn test_weave_steps_stay_on_graph_edges() {
        // Arrange
        let solution = weave(4).unwrap();

        // Act & Assert
        let len = solution.len();
        for i in 0..len {
            let (ax, ay, az) = solution[i];
            let (bx, by, bz) = solution[(i + 1) % len];
            let deltas = [(ax - bx).abs(), (ay - by).abs(), (az - bz).abs()];
            assert_eq!(deltas.iter().sum::<i32>(), 2, "step {i} is not an edge");
            assert_eq!(deltas.iter().filter(|&&d| d == 2).count(), 1);
        }
    }

    #[test]
    fn test_weave_rejects_zero_layers() {
        // Arrange & Act
        let result = weave(0);

        // Assert
        assert!(matches!(result, Err(WeaveError::InvalidArgument(_))));
    }
}
