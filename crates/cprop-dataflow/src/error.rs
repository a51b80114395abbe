use cprop_ir::NodeIndex;

/// Error type for solver failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataflowError {
    /// The worklist did not drain within the configured iteration limit.
    #[error("fixpoint not reached within {limit} iterations")]
    FuelExhausted { limit: usize },
    /// A result was queried for a node that is not part of the analysed CFG.
    #[error("no fact recorded for node {0:?}")]
    MissingFact(NodeIndex),
}
