//! Host-side IR for the constant propagation engine: typed variables,
//! three-address expressions and statements, and a statement-level CFG.

mod arena;
mod builder;
mod cfg;
mod error;
mod exp;
mod ir;
mod lattice;
mod stmt;
mod ty;
mod var;

pub use arena::{Arena, Id, Identifier};
pub use builder::IrBuilder;
pub use cfg::{Cfg, EdgeKind, Neighbors};
pub use error::IrError;
pub use exp::{
    ArithmeticOp, ArrayAccess, BinaryExp, BinaryOp, BitwiseOp, ConditionOp, Exp, FieldAccess,
    InvokeExp, LValue, ShiftOp,
};
pub use ir::Ir;
pub use lattice::{FiniteLattice, HasBottom, HasTop, Lattice};
pub use stmt::{DefinitionStmt, IfStmt, Label, Stmt};
pub use ty::{PrimitiveType, Type};
pub use var::{Var, VarId};

pub use petgraph::graph::NodeIndex;
pub use smallvec::{self, SmallVec};
