//! Generic monotone dataflow framework over [`cprop_ir::Cfg`].
//!
//! An analysis implements [`DataflowAnalysis`]; the [`Solver`] owns one IN
//! and one OUT fact per CFG node and iterates a worklist until no fact
//! changes, returning the facts as a [`DataflowResult`].

mod analysis;
mod config;
mod error;
mod fact;
mod result;
mod solver;

pub use analysis::DataflowAnalysis;
pub use config::{AnalysisConfig, DEFAULT_MAX_ITERATIONS};
pub use error::DataflowError;
pub use fact::{MapFact, SetFact};
pub use result::DataflowResult;
pub use solver::{Solver, solve};
