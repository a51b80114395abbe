use cprop_ir::BinaryOp;

/// Faults raised while folding a binary expression over two constants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// `/` or `%` with a constant zero divisor.
    #[error("`{dividend} {op} 0` divides by zero")]
    DivideByZero { op: BinaryOp, dividend: i32 },
}
