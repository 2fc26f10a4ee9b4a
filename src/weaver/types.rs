// file: src/weaver/types.rs
// version: 1.0.0
// guid: a7027443-3036-40d7-a4fd-a35d55037207

//! Shared vocabulary types for the weaving pipeline

use std::collections::{HashSet, VecDeque};

/// A 2D yarn point with odd coordinates
pub type Vert2 = (i32, i32);

/// A 3D vertex of the discocube graph, all coordinates odd
pub type Vert = (i32, i32, i32);

/// An edge between two vertices, stored min-max normalized
pub type Edge = (Vert, Vert);

/// A set of normalized edges
pub type Edges = HashSet<Edge>;

/// A path of 3D vertices
pub type Tour = Vec<Vert>;

/// Tours produced by cutting a level tour at its pins
pub type Subtours = Vec<Tour>;

/// Thread endpoints lifted to the next level, used to cut yarn
pub type Pins = HashSet<Vert>;

/// The loom: ordered threads under construction, extendable at both ends
pub type Loom = Vec<VecDeque<Vert>>;

/// A finished Hamiltonian cycle
pub type Solution = Vec<Vert>;

/// Yarn colors. Blue is spun directly, red is its rotated displaced copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YarnColor {
    Blue,
    Red,
}

impl YarnColor {
    /// Get the color as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            YarnColor::Blue => "blue",
            YarnColor::Red => "red",
        }
    }
}
