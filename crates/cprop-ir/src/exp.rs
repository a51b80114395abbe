use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::IrError;
use crate::ty::Type;
use crate::var::Var;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// Comparison operators. Folded results follow integer semantics: 1 for
/// true, 0 for false.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftOp {
    Shl,
    /// Arithmetic right shift.
    Shr,
    /// Logical right shift.
    Ushr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitwiseOp {
    Or,
    And,
    Xor,
}

/// Binary operators, grouped the way the evaluator folds them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Arithmetic(ArithmeticOp),
    Condition(ConditionOp),
    Shift(ShiftOp),
    Bitwise(BitwiseOp),
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 17] = [
        BinaryOp::Arithmetic(ArithmeticOp::Add),
        BinaryOp::Arithmetic(ArithmeticOp::Sub),
        BinaryOp::Arithmetic(ArithmeticOp::Mul),
        BinaryOp::Arithmetic(ArithmeticOp::Div),
        BinaryOp::Arithmetic(ArithmeticOp::Rem),
        BinaryOp::Condition(ConditionOp::Eq),
        BinaryOp::Condition(ConditionOp::Ne),
        BinaryOp::Condition(ConditionOp::Lt),
        BinaryOp::Condition(ConditionOp::Gt),
        BinaryOp::Condition(ConditionOp::Le),
        BinaryOp::Condition(ConditionOp::Ge),
        BinaryOp::Shift(ShiftOp::Shl),
        BinaryOp::Shift(ShiftOp::Shr),
        BinaryOp::Shift(ShiftOp::Ushr),
        BinaryOp::Bitwise(BitwiseOp::Or),
        BinaryOp::Bitwise(BitwiseOp::And),
        BinaryOp::Bitwise(BitwiseOp::Xor),
    ];

    /// Source-level spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Arithmetic(op) => match op {
                ArithmeticOp::Add => "+",
                ArithmeticOp::Sub => "-",
                ArithmeticOp::Mul => "*",
                ArithmeticOp::Div => "/",
                ArithmeticOp::Rem => "%",
            },
            BinaryOp::Condition(op) => match op {
                ConditionOp::Eq => "==",
                ConditionOp::Ne => "!=",
                ConditionOp::Lt => "<",
                ConditionOp::Gt => ">",
                ConditionOp::Le => "<=",
                ConditionOp::Ge => ">=",
            },
            BinaryOp::Shift(op) => match op {
                ShiftOp::Shl => "<<",
                ShiftOp::Shr => ">>",
                ShiftOp::Ushr => ">>>",
            },
            BinaryOp::Bitwise(op) => match op {
                BitwiseOp::Or => "|",
                BitwiseOp::And => "&",
                BitwiseOp::Xor => "^",
            },
        }
    }
}

impl FromStr for BinaryOp {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| IrError::UnknownOperator(s.to_owned()))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

macro_rules! impl_from_op {
    ($($group:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$group> for BinaryOp {
                fn from(op: $group) -> Self {
                    BinaryOp::$variant(op)
                }
            }
        )*
    };
}

impl_from_op! {
    ArithmeticOp => Arithmetic,
    ConditionOp => Condition,
    ShiftOp => Shift,
    BitwiseOp => Bitwise,
}

/// `op1 <op> op2` where both operands are variables (three-address form).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExp {
    op1: Var,
    op2: Var,
    op: BinaryOp,
}

impl BinaryExp {
    pub fn new(op: impl Into<BinaryOp>, op1: Var, op2: Var) -> Self {
        Self {
            op1,
            op2,
            op: op.into(),
        }
    }

    pub fn operand1(&self) -> &Var {
        &self.op1
    }

    pub fn operand2(&self) -> &Var {
        &self.op2
    }

    pub fn operator(&self) -> BinaryOp {
        self.op
    }
}

impl fmt::Display for BinaryExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.op1, self.op, self.op2)
    }
}

/// Instance field access `base.field`, or a static field when `base` is
/// `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldAccess {
    pub base: Option<Var>,
    pub field: Arc<str>,
}

impl fmt::Display for FieldAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.base {
            Some(base) => write!(f, "{base}.{}", self.field),
            None => f.write_str(&self.field),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayAccess {
    pub base: Var,
    pub index: Var,
}

impl fmt::Display for ArrayAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.base, self.index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvokeExp {
    pub method: Arc<str>,
    pub receiver: Option<Var>,
    pub args: Vec<Var>,
}

impl fmt::Display for InvokeExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(receiver) = &self.receiver {
            write!(f, "{receiver}.")?;
        }
        write!(f, "{}(", self.method)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// Right-hand side expressions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Exp {
    IntLiteral(i32),
    LongLiteral(i64),
    Var(Var),
    Binary(BinaryExp),
    Neg(Var),
    Cast { value: Var, ty: Type },
    FieldAccess(FieldAccess),
    ArrayAccess(ArrayAccess),
    Invoke(InvokeExp),
    New(Type),
}

impl Exp {
    pub fn int(value: i32) -> Self {
        Exp::IntLiteral(value)
    }

    pub fn binary(op: impl Into<BinaryOp>, op1: &Var, op2: &Var) -> Self {
        Exp::Binary(BinaryExp::new(op, op1.clone(), op2.clone()))
    }

    pub fn invoke(method: impl Into<Arc<str>>, args: &[Var]) -> Self {
        Exp::Invoke(InvokeExp {
            method: method.into(),
            receiver: None,
            args: args.to_vec(),
        })
    }
}

impl From<&Var> for Exp {
    fn from(value: &Var) -> Self {
        Exp::Var(value.clone())
    }
}

impl From<BinaryExp> for Exp {
    fn from(value: BinaryExp) -> Self {
        Exp::Binary(value)
    }
}

impl From<i32> for Exp {
    fn from(value: i32) -> Self {
        Exp::IntLiteral(value)
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::IntLiteral(v) => write!(f, "{v}"),
            Exp::LongLiteral(v) => write!(f, "{v}L"),
            Exp::Var(v) => write!(f, "{v}"),
            Exp::Binary(b) => write!(f, "{b}"),
            Exp::Neg(v) => write!(f, "-{v}"),
            Exp::Cast { value, ty } => write!(f, "({ty}) {value}"),
            Exp::FieldAccess(a) => write!(f, "{a}"),
            Exp::ArrayAccess(a) => write!(f, "{a}"),
            Exp::Invoke(i) => write!(f, "{i}"),
            Exp::New(ty) => write!(f, "new {ty}"),
        }
    }
}

/// Targets of a definition statement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LValue {
    Var(Var),
    Field(FieldAccess),
    Array(ArrayAccess),
}

impl LValue {
    pub fn as_var(&self) -> Option<&Var> {
        match self {
            LValue::Var(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&Var> for LValue {
    fn from(value: &Var) -> Self {
        LValue::Var(value.clone())
    }
}

impl fmt::Display for LValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LValue::Var(v) => write!(f, "{v}"),
            LValue::Field(a) => write!(f, "{a}"),
            LValue::Array(a) => write!(f, "{a}"),
        }
    }
}
