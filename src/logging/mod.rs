// file: src/logging/mod.rs
// version: 1.0.0
// guid: 2ff824c5-fcf2-40bc-afa2-06e6aafad9f8

//! Logging system for the weave solver

pub mod logger;

pub use logger::init_logger;
