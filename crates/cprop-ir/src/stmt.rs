use std::fmt;
use std::sync::Arc;

use crate::exp::{ArrayAccess, BinaryExp, Exp, FieldAccess, InvokeExp, LValue};
use crate::identifier;
use crate::var::Var;

identifier! {
    /// A jump target, bound to a statement index by
    /// [`IrBuilder::bind`](crate::IrBuilder::bind).
    struct Label
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.index())
    }
}

/// `lvalue = rvalue`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefinitionStmt {
    lvalue: LValue,
    rvalue: Exp,
}

impl DefinitionStmt {
    pub fn new(lvalue: impl Into<LValue>, rvalue: impl Into<Exp>) -> Self {
        Self {
            lvalue: lvalue.into(),
            rvalue: rvalue.into(),
        }
    }

    pub fn lvalue(&self) -> &LValue {
        &self.lvalue
    }

    pub fn rvalue(&self) -> &Exp {
        &self.rvalue
    }
}

/// `if (condition) goto target`; falls through otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStmt {
    condition: BinaryExp,
    target: Label,
}

impl IfStmt {
    pub fn condition(&self) -> &BinaryExp {
        &self.condition
    }

    pub fn target(&self) -> Label {
        self.target
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    Definition(DefinitionStmt),
    If(IfStmt),
    Goto(Label),
    /// A call whose result, if any, is discarded.
    Invoke(InvokeExp),
    Return(Option<Var>),
    Nop,
}

impl Stmt {
    pub fn assign(lhs: &Var, rvalue: impl Into<Exp>) -> Self {
        Stmt::Definition(DefinitionStmt::new(lhs, rvalue))
    }

    pub fn store_field(base: Option<&Var>, field: impl Into<Arc<str>>, value: &Var) -> Self {
        let target = FieldAccess {
            base: base.cloned(),
            field: field.into(),
        };
        Stmt::Definition(DefinitionStmt::new(LValue::Field(target), value))
    }

    pub fn store_array(base: &Var, index: &Var, value: &Var) -> Self {
        let target = ArrayAccess {
            base: base.clone(),
            index: index.clone(),
        };
        Stmt::Definition(DefinitionStmt::new(LValue::Array(target), value))
    }

    pub fn if_goto(condition: BinaryExp, target: Label) -> Self {
        Stmt::If(IfStmt { condition, target })
    }

    pub fn goto(target: Label) -> Self {
        Stmt::Goto(target)
    }

    pub fn invoke(method: impl Into<Arc<str>>, args: &[Var]) -> Self {
        Stmt::Invoke(InvokeExp {
            method: method.into(),
            receiver: None,
            args: args.to_vec(),
        })
    }

    pub fn ret(value: Option<&Var>) -> Self {
        Stmt::Return(value.cloned())
    }

    pub fn as_definition(&self) -> Option<&DefinitionStmt> {
        match self {
            Stmt::Definition(def) => Some(def),
            _ => None,
        }
    }

    /// Variables read by this statement.
    pub fn uses(&self) -> Vec<&Var> {
        fn exp_uses(exp: &Exp) -> Vec<&Var> {
            match exp {
                Exp::IntLiteral(_) | Exp::LongLiteral(_) | Exp::New(_) => vec![],
                Exp::Var(v) | Exp::Neg(v) | Exp::Cast { value: v, .. } => vec![v],
                Exp::Binary(b) => vec![b.operand1(), b.operand2()],
                Exp::FieldAccess(a) => a.base.iter().collect(),
                Exp::ArrayAccess(a) => vec![&a.base, &a.index],
                Exp::Invoke(i) => i.receiver.iter().chain(i.args.iter()).collect(),
            }
        }

        match self {
            Stmt::Definition(def) => {
                let mut uses = exp_uses(def.rvalue());
                match def.lvalue() {
                    LValue::Var(_) => {}
                    LValue::Field(a) => uses.extend(a.base.iter()),
                    LValue::Array(a) => uses.extend([&a.base, &a.index]),
                }
                uses
            }
            Stmt::If(s) => vec![s.condition.operand1(), s.condition.operand2()],
            Stmt::Invoke(i) => i.receiver.iter().chain(i.args.iter()).collect(),
            Stmt::Return(v) => v.iter().collect(),
            Stmt::Goto(_) | Stmt::Nop => vec![],
        }
    }

    /// The variable written by this statement, if it is a variable
    /// definition.
    pub fn def(&self) -> Option<&Var> {
        self.as_definition().and_then(|def| def.lvalue().as_var())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Definition(def) => write!(f, "{} = {}", def.lvalue, def.rvalue),
            Stmt::If(s) => write!(f, "if ({}) goto {}", s.condition, s.target),
            Stmt::Goto(target) => write!(f, "goto {target}"),
            Stmt::Invoke(i) => write!(f, "{i}"),
            Stmt::Return(Some(v)) => write!(f, "return {v}"),
            Stmt::Return(None) => f.write_str("return"),
            Stmt::Nop => f.write_str("nop"),
        }
    }
}
