// file: src/lib.rs
// version: 1.0.0
// guid: 9b61c9eb-50d6-465a-bb09-251d09545fb9

//! # weave
//!
//! Weaves a Hamiltonian cycle of the discocube graph for every instance in a
//! requested range, certifies each cycle, and can render a chosen solution
//! as an interactive 3D line plot.
//!
//! A discocube graph of `n` layers has as vertices all points `(x, y, z)`
//! with odd coordinates and `|x| + |y| + |z| <= 2n + 1`, joined wherever two
//! vertices sit one unit-cube edge (2 units) apart along a single axis. Its
//! vertex count is the uncentered octahedral number `4(n+2)(n+1)n / 3`.
//! The solver builds the cycle in linear time by spinning a 2D yarn over the
//! widest level, cutting it against a loom of growing threads level by
//! level, mirroring the finished threads into loops, and splicing the loops
//! into a single cycle over bridge edges.

pub mod certify;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod plot;
pub mod store;
pub mod weaver;

pub use error::{Result, WeaveError};
pub use weaver::weave;

/// Version information for the tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
