// file: src/certify.rs
// version: 1.0.0
// guid: b0769764-e605-4e95-9ae7-52bae95623b5

//! Certifies that a solution is a Hamiltonian cycle on its discocube

use std::collections::HashSet;

use crate::error::{Result, WeaveError};
use crate::weaver::graph::order_from_radius;
use crate::weaver::types::Vert;

/// Check that `solution` is a Hamiltonian cycle on the discocube graph
/// implied by its own extent.
///
/// The expected order is derived from the largest coordinate found in
/// the solution, so a cycle that misses the outer rim fails the length
/// check rather than passing against a smaller graph.
pub fn certify(solution: &[Vert]) -> Result<()> {
    let radius = solution
        .iter()
        .flat_map(|&(x, y, z)| [x, y, z])
        .max()
        .ok_or_else(|| WeaveError::certification("solution is empty"))?;
    if radius < 1 {
        return Err(WeaveError::certification(format!(
            "largest coordinate {radius} is not a valid radius"
        )));
    }
    let order = order_from_radius(radius);
    if solution.len() != order {
        return Err(WeaveError::certification(format!(
            "solution has {} vertices but the discocube of radius {} has order {}",
            solution.len(),
            radius,
            order
        )));
    }

    let unique: HashSet<Vert> = solution.iter().copied().collect();
    if unique.len() != solution.len() {
        return Err(WeaveError::certification(format!(
            "solution revisits {} vertices",
            solution.len() - unique.len()
        )));
    }

    for i in 0..solution.len() {
        let (ax, ay, az) = solution[i];
        let (bx, by, bz) = solution[(i + 1) % solution.len()];
        let nonzero: Vec<i32> = [bx - ax, by - ay, bz - az]
            .into_iter()
            .filter(|&d| d != 0)
            .collect();
        if nonzero.len() != 1 || nonzero[0].abs() != 2 {
            return Err(WeaveError::certification(format!(
                "illegal step from ({ax}, {ay}, {az}) to ({bx}, {by}, {bz})"
            )));
        }
    }
    Ok(())
}
