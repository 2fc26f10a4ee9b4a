// file: src/weaver/yarn.rs
// version: 1.0.0
// guid: 77939cda-d9c1-4cd9-bfd1-3de4cb51e091

//! Spins the 2D yarn from which every level tour is cut

use crate::weaver::graph::layers_from_radius;
use crate::weaver::types::{Vert2, YarnColor};

/// Zigzag displacement pairs, one pair per quadrant turn. Within a
/// segment the two vectors of the active pair alternate.
const ZIGZAGS: [[Vert2; 2]; 4] = [
    [(0, 2), (2, 0)],
    [(0, 2), (-2, 0)],
    [(0, -2), (-2, 0)],
    [(0, -2), (2, 0)],
];

/// Both yarns for one radius. Blue is spun directly, red is blue
/// turned half a revolution and displaced up by one step.
#[derive(Debug, Clone)]
pub struct Spool {
    pub blue: Vec<Vert2>,
    pub red: Vec<Vert2>,
}

impl Spool {
    /// Yarn of the requested color
    pub fn yarn(&self, color: YarnColor) -> &[Vert2] {
        match color {
            YarnColor::Blue => &self.blue,
            YarnColor::Red => &self.red,
        }
    }
}

/// Spin the spool for the widest level of the given radius.
///
/// The blue yarn starts near the origin and spirals outwards in zigzag
/// segments whose lengths run through the odd numbers up to `radius`,
/// each used twice and the last three times, ending at (radius, 1). A
/// prefix of the right length then covers any smaller level exactly.
pub fn spin(radius: i32) -> Spool {
    let layers = layers_from_radius(radius);
    let turns = if layers % 2 == 0 { 0 } else { 2 };
    let start: Vert2 = if turns == 0 { (1, 1) } else { (-1, 1) };

    let mut blue = Vec::with_capacity((2 * layers * (layers + 1)) as usize);
    blue.push(start);
    let mut cursor = start;
    let lengths = (1..=radius)
        .step_by(2)
        .flat_map(|len| std::iter::repeat(len).take(if len == radius { 3 } else { 2 }));
    for (segment, length) in lengths.enumerate() {
        let pair = ZIGZAGS[(segment + turns) % 4];
        for step in 0..length as usize {
            let (dx, dy) = pair[(segment + step) % 2];
            cursor = (cursor.0 + dx, cursor.1 + dy);
            blue.push(cursor);
        }
    }

    let red = blue.iter().map(|&(x, y)| (-x, -y + 2)).collect();
    Spool { blue, red }
}
