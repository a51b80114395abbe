use cprop_ir::{Cfg, Stmt};

use crate::AnalysisConfig;

/// A monotone dataflow analysis, driven by the [`Solver`](crate::Solver).
///
/// The solver holds one IN and one OUT fact per node and hands out
/// exclusive borrows, so an analysis never sees aliased facts. For a forward
/// analysis the solver merges predecessors' OUT facts into a node's IN with
/// [`meet_into`](Self::meet_into) and then calls
/// [`transfer_node`](Self::transfer_node) with `input = IN`, `output = OUT`.
/// A backward analysis is the mirror image: successors' IN facts are merged
/// into OUT and the transfer computes IN from OUT.
///
/// ## Contracts
///
/// - `meet_into` is associative, commutative and monotone.
/// - `transfer_node` is monotone and returns `true` iff `output` changed.
/// - The fact lattice has finite height, or the solver's iteration limit
///   stops the run.
pub trait DataflowAnalysis {
    type Fact: Clone + PartialEq + std::fmt::Debug;

    fn config(&self) -> &AnalysisConfig;

    /// `true` to propagate along successors, `false` along predecessors.
    fn is_forward(&self) -> bool;

    /// Fact installed at the entry (forward) or exit (backward) node.
    fn new_boundary_fact(&self, cfg: &Cfg) -> Self::Fact;

    /// Fact every other node starts with.
    fn new_initial_fact(&self) -> Self::Fact;

    /// Merge `fact` into `target`.
    fn meet_into(&self, fact: &Self::Fact, target: &mut Self::Fact);

    /// Recompute `output` from `input` for `stmt`. Returns whether
    /// `output` changed.
    fn transfer_node(&self, stmt: &Stmt, input: &Self::Fact, output: &mut Self::Fact) -> bool;
}
