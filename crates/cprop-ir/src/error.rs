use crate::{Label, VarId};

/// Errors raised while constructing or querying IR.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IrError {
    /// An operator symbol outside the closed operator set.
    #[error("unknown binary operator `{0}`")]
    UnknownOperator(String),
    /// A jump refers to a label that was never bound to a statement.
    #[error("label {0} is not bound to a statement")]
    UnboundLabel(Label),
    /// A label was bound twice.
    #[error("label {0} is already bound")]
    DuplicateLabel(Label),
    /// The variable id does not belong to this IR.
    #[error("unknown variable {0:?}")]
    UnknownVar(VarId),
}
