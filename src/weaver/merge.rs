// file: src/weaver/merge.rs
// version: 1.0.0
// guid: c3a589e9-617c-4520-9384-881bd3c013cb

//! Merges the mirrored cycles into one Hamiltonian cycle by bridging
//! each remaining warp cycle into the growing weft

use crate::error::{Result, WeaveError};
use crate::weaver::types::{Edge, Edges, Solution, Tour, Vert};

/// The growing weft: the main cycle every other cycle is joined into.
///
/// `z_abs_max` and `zc_abs_sum` track which z band still has free weft
/// edges as joins consume them from the outside in.
struct Weaver {
    data: Solution,
    joined: bool,
    z_abs_max: i32,
    zc_abs_sum: i32,
}

impl Weaver {
    fn new(data: Solution, radius: i32) -> Self {
        let z_abs_max = radius - 4;
        Weaver {
            data,
            joined: false,
            z_abs_max,
            zc_abs_sum: z_abs_max * 2,
        }
    }

    /// Scan the weft for the first loose edge whose displaced twin lies
    /// on the warp, returning the weft edge and its warp counterpart.
    fn find_bridge(&self, candidates: &Edges, warp_edges: &Edges) -> Option<(Edge, Edge)> {
        for pair in self.data.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let loose = if self.joined {
                u.0 == 1 && v.0 == 1 && (u.2 + v.2).abs() == self.zc_abs_sum.abs()
            } else {
                u.0 == 1 && v.0 == 3
            };
            if !loose {
                continue;
            }
            let edge = minmax(u, v);
            if candidates.contains(&edge) {
                let warp_edge = weft_to_warp(edge);
                if warp_edges.contains(&warp_edge) {
                    return Some((edge, warp_edge));
                }
            }
        }
        None
    }

    /// Absorb an aligned warp and move the loose band inwards
    fn join(&mut self, mut warp: Tour) {
        self.data.append(&mut warp);
        if self.joined {
            self.z_abs_max -= 4;
        } else {
            self.joined = true;
            self.z_abs_max -= 2;
        }
        self.zc_abs_sum = self.z_abs_max * 2 - 2;
    }
}

fn minmax(u: Vert, v: Vert) -> Edge {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Edges of a warp cycle that may serve as its half of a bridge. The
/// admissible corner pattern flips once the weft has absorbed a warp.
fn warp_edges(warp: &[Vert], joined: bool) -> Edges {
    let want = if joined { [1, 3, 1] } else { [3, 1, 3] };
    warp.windows(2)
        .filter_map(|pair| {
            let (m, n) = (pair[0], pair[1]);
            ([n.1, m.0, m.1] == want).then(|| minmax(m, n))
        })
        .collect()
}

/// Displace warp edges onto the weft edges that would run parallel to
/// them at unit graph distance
fn warp_to_weft(edges: &Edges) -> Edges {
    edges
        .iter()
        .filter_map(|&((a, b, c), (x, y, z))| {
            ((x == 1 || x == 3) && (y == 1 || y == 3)).then(|| {
                if a != x {
                    ((a, b - 2, c), (x, y - 2, z))
                } else if b != y {
                    ((a, b, c + 2), (x, y, z + 2))
                } else {
                    ((a - 2, b, c), (x - 2, y, z))
                }
            })
        })
        .collect()
}

/// Map a chosen weft bridge back to the warp edge it pairs with
fn weft_to_warp(edge: Edge) -> Edge {
    let ((a, b, c), (x, y, z)) = edge;
    if a != x {
        ((a, b + 2, c), (x, y + 2, z))
    } else {
        ((a + 2, b, c), (x + 2, y, z))
    }
}

/// Reorder a cycle in place so it starts at `lhs` and ends at `rhs`.
/// The two vertices must be adjacent in the cycle.
fn align_to(data: &mut [Vert], lhs: Vert, rhs: Vert) -> Result<()> {
    let lix = data
        .iter()
        .position(|&v| v == lhs)
        .ok_or_else(|| WeaveError::merge(format!("vertex {lhs:?} not on cycle")))?;
    let rix = data
        .iter()
        .position(|&v| v == rhs)
        .ok_or_else(|| WeaveError::merge(format!("vertex {rhs:?} not on cycle")))?;
    if lix < rix {
        data[..rix].reverse();
        data[rix..].reverse();
    } else {
        data.rotate_left(lix);
    }
    Ok(())
}

/// Join all mirrored cycles into a single Hamiltonian cycle. The first
/// thread seeds the weft, every further thread is aligned at a bridge
/// and absorbed.
pub fn merge_cycles(mut loom: Vec<Tour>, radius: i32) -> Result<Solution> {
    if loom.is_empty() {
        return Err(WeaveError::merge("cannot merge an empty loom"));
    }
    let mut weaver = Weaver::new(loom.remove(0), radius);
    for mut warp in loom {
        let warp_edges = warp_edges(&warp, weaver.joined);
        let candidates = warp_to_weft(&warp_edges);
        let (weft_bridge, warp_bridge) = weaver
            .find_bridge(&candidates, &warp_edges)
            .ok_or_else(|| WeaveError::merge("no bridge edge between weft and warp"))?;
        align_to(&mut weaver.data, weft_bridge.0, weft_bridge.1)?;
        align_to(&mut warp, warp_bridge.1, warp_bridge.0)?;
        weaver.join(warp);
    }
    Ok(weaver.data)
}
