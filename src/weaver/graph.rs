// file: src/weaver/graph.rs
// version: 1.0.0
// guid: a6d7b657-2c2f-4a5f-b657-95288862564f

//! Discocube graph arithmetic and the level schedule for the loom

use crate::weaver::types::{Vert, YarnColor};

/// Specification of one z level below the equator: which yarn color to
/// cut and how many points of it make up the level tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSpec {
    pub z: i32,
    pub color: YarnColor,
    pub size: usize,
}

/// Number of vertices in the discocube with `n` layers per hemisphere
pub fn order_from_layers(n: u32) -> usize {
    let n = n as u64;
    (4 * (n + 2) * (n + 1) * n / 3) as usize
}

/// Radius of the widest level, always odd
pub fn radius_from_layers(n: u32) -> i32 {
    2 * n as i32 - 1
}

/// Inverse of [`radius_from_layers`]
pub fn layers_from_radius(radius: i32) -> u32 {
    ((radius + 1) / 2) as u32
}

/// Number of vertices in the discocube whose widest level has `radius`
pub fn order_from_radius(radius: i32) -> usize {
    order_from_layers(layers_from_radius(radius))
}

/// Per-level schedule for the lower hemisphere, bottom to top.
///
/// Levels sit at odd z from `-(2n - 1)` up to `-1` and grow towards the
/// equator. Colors alternate so that the level at z = -1 is always blue,
/// which fixes the bottom color by the parity of `n`.
pub fn level_specs(n: u32) -> Vec<LevelSpec> {
    let radius = radius_from_layers(n);
    (0..n)
        .map(|i| {
            let f = (i + 1) as i32;
            LevelSpec {
                z: -radius + 2 * i as i32,
                color: if (n % 2 == 0) == (i % 2 == 0) {
                    YarnColor::Red
                } else {
                    YarnColor::Blue
                },
                size: (2 * f * (f + 1)) as usize,
            }
        })
        .collect()
}

/// All vertices of the discocube with `n` layers: odd integer points
/// (x, y, z) with |x| + |y| + |z| <= 2n + 1.
pub fn vertices(n: u32) -> Vec<Vert> {
    let bound = radius_from_layers(n) + 2;
    let mut verts = Vec::with_capacity(order_from_layers(n));
    let odd_range = |limit: i32| (-limit..=limit).filter(|v| v % 2 != 0);
    for x in odd_range(bound) {
        for y in odd_range(bound) {
            for z in odd_range(bound) {
                if x.abs() + y.abs() + z.abs() <= bound {
                    verts.push((x, y, z));
                }
            }
        }
    }
    verts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_layers() {
        // Arrange
        let expected = [
            (1, 8),
            (2, 32),
            (3, 80),
            (4, 160),
            (5, 280),
            (6, 448),
            (100, 1_373_600),
        ];

        // Act & Assert
        for (n, order) in expected {
            assert_eq!(order_from_layers(n), order);
        }
    }

    #[test]
    fn test_radius_layer_roundtrip() {
        // Arrange & Act & Assert
        for n in 1..=64 {
            let radius = radius_from_layers(n);
            assert_eq!(radius % 2, 1);
            assert_eq!(layers_from_radius(radius), n);
            assert_eq!(order_from_radius(radius), order_from_layers(n));
        }
    }

    #[test]
    fn test_level_specs_alternate_up_to_blue() {
        // Arrange
        for n in 1..=8 {
            // Act
            let specs = level_specs(n);

            // Assert
            assert_eq!(specs.len(), n as usize);
            let top = specs.last().unwrap();
            assert_eq!(top.z, -1);
            assert_eq!(top.color, YarnColor::Blue);
            for pair in specs.windows(2) {
                assert_eq!(pair[1].z - pair[0].z, 2);
                assert_ne!(pair[1].color, pair[0].color);
            }
            assert_eq!(specs[0].z, -radius_from_layers(n));
        }
    }

    #[test]
    fn test_level_sizes_sum_to_hemisphere() {
        // Arrange
        for n in 1..=8 {
            // Act
            let total: usize = level_specs(n).iter().map(|spec| spec.size).sum();

            // Assert
            assert_eq!(total * 2, order_from_layers(n));
            assert_eq!(level_specs(n)[0].size, 4);
        }
    }

    #[test]
    fn test_vertices_count_matches_order() {
        // Arrange & Act & Assert
        for n in 1..=6 {
            assert_eq!(vertices(n).len(), order_from_layers(n));
        }
    }

    #[test]
    fn test_vertices_are_odd_and_bounded() {
        // Arrange
        let n = 3;
        let bound = 2 * n as i32 + 1;

        // Act
        let verts = vertices(n);

        // Assert
        for (x, y, z) in verts {
            assert_eq!(x.rem_euclid(2), 1);
            assert_eq!(y.rem_euclid(2), 1);
            assert_eq!(z.rem_euclid(2), 1);
            assert!(x.abs() + y.abs() + z.abs() <= bound);
        }
    }
}
