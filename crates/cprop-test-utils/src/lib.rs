//! Shared test helpers: lattice-law assertions and canned programs.

pub mod lattice;
pub mod programs;
