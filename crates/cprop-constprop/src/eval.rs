use cprop_ir::{ArithmeticOp, BinaryExp, BinaryOp, BitwiseOp, ConditionOp, Exp, ShiftOp};
use log::debug;

use crate::{CpFact, EvalError, Value};

/// Abstract value of `exp` in the state `in_fact`.
///
/// Total: an arithmetic fault while folding makes this one expression
/// [`Value::Nac`]; see [`try_evaluate`] to observe the fault instead.
pub fn evaluate(exp: &Exp, in_fact: &CpFact) -> Value {
    try_evaluate(exp, in_fact).unwrap_or_else(|err| {
        debug!("`{exp}` evaluates to NAC: {err}");
        Value::Nac
    })
}

/// Like [`evaluate`], but reports arithmetic faults.
pub fn try_evaluate(exp: &Exp, in_fact: &CpFact) -> Result<Value, EvalError> {
    match exp {
        Exp::IntLiteral(value) => Ok(Value::Constant(*value)),
        Exp::Var(var) => Ok(in_fact.get(var)),
        Exp::Binary(binary) => evaluate_binary(binary, in_fact),
        Exp::LongLiteral(_)
        | Exp::Neg(_)
        | Exp::Cast { .. }
        | Exp::FieldAccess(_)
        | Exp::ArrayAccess(_)
        | Exp::Invoke(_)
        | Exp::New(_) => Ok(Value::Nac),
    }
}

fn evaluate_binary(binary: &BinaryExp, in_fact: &CpFact) -> Result<Value, EvalError> {
    // operands are variables; look them up, never re-evaluate
    let y = in_fact.get(binary.operand1());
    let z = in_fact.get(binary.operand2());
    match (y, z) {
        (Value::Nac, _) | (_, Value::Nac) => Ok(Value::Nac),
        (Value::Constant(y), Value::Constant(z)) => {
            fold(binary.operator(), y, z).map(Value::Constant)
        }
        _ => Ok(Value::Undef),
    }
}

/// Apply `op` to two concrete `int`s with two's-complement wraparound.
///
/// Division and remainder truncate toward zero, and `i32::MIN / -1`
/// wraps to `i32::MIN`. Shift distances use only their low five bits.
/// Comparisons yield `1` or `0`.
///
/// ```
/// use cprop_constprop::fold;
/// use cprop_ir::{ArithmeticOp, ShiftOp};
///
/// assert_eq!(fold(ArithmeticOp::Add.into(), i32::MAX, 1), Ok(i32::MIN));
/// assert_eq!(fold(ShiftOp::Ushr.into(), -1, 28), Ok(0xf));
/// ```
pub fn fold(op: BinaryOp, y: i32, z: i32) -> Result<i32, EvalError> {
    let value = match op {
        BinaryOp::Arithmetic(op) => match op {
            ArithmeticOp::Add => y.wrapping_add(z),
            ArithmeticOp::Sub => y.wrapping_sub(z),
            ArithmeticOp::Mul => y.wrapping_mul(z),
            ArithmeticOp::Div | ArithmeticOp::Rem if z == 0 => {
                return Err(EvalError::DivideByZero {
                    op: op.into(),
                    dividend: y,
                });
            }
            ArithmeticOp::Div => y.wrapping_div(z),
            ArithmeticOp::Rem => y.wrapping_rem(z),
        },
        BinaryOp::Condition(op) => {
            let holds = match op {
                ConditionOp::Eq => y == z,
                ConditionOp::Ne => y != z,
                ConditionOp::Lt => y < z,
                ConditionOp::Gt => y > z,
                ConditionOp::Le => y <= z,
                ConditionOp::Ge => y >= z,
            };
            i32::from(holds)
        }
        BinaryOp::Shift(op) => {
            let distance = z as u32;
            match op {
                ShiftOp::Shl => y.wrapping_shl(distance),
                ShiftOp::Shr => y.wrapping_shr(distance),
                ShiftOp::Ushr => (y as u32).wrapping_shr(distance) as i32,
            }
        }
        BinaryOp::Bitwise(op) => match op {
            BitwiseOp::Or => y | z,
            BitwiseOp::And => y & z,
            BitwiseOp::Xor => y ^ z,
        },
    };
    Ok(value)
}
