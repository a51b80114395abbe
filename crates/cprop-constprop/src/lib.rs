//! Constant propagation for `int`-like local variables.
//!
//! Each tracked variable is mapped to a [`Value`] in the three-level
//! lattice `Undef ⊑ Constant(k) ⊑ NAC`. [`ConstantPropagation`] plugs the
//! lattice, the expression [`evaluate`]r and the per-statement transfer
//! into the generic [`cprop_dataflow::Solver`].
//!
//! ```
//! use cprop_constprop::{ConstantPropagation, Value};
//! use cprop_ir::{ArithmeticOp, Cfg, Exp, IrBuilder, PrimitiveType, Stmt};
//!
//! let mut b = IrBuilder::new("sum");
//! let x = b.var().name("x").ty(PrimitiveType::Int).new();
//! let y = b.var().name("y").ty(PrimitiveType::Int).new();
//! let z = b.var().name("z").ty(PrimitiveType::Int).new();
//! b.push(Stmt::assign(&x, Exp::int(1)));
//! b.push(Stmt::assign(&y, Exp::int(2)));
//! let last = b.push(Stmt::assign(&z, Exp::binary(ArithmeticOp::Add, &x, &y)));
//! let cfg = Cfg::build(b.build()).unwrap();
//!
//! let result = ConstantPropagation::default().analyze(&cfg).unwrap();
//! let out = result.out_fact(cfg.node_of(last).unwrap()).unwrap();
//! assert_eq!(out.get(&z), Value::Constant(3));
//! ```

mod analysis;
mod error;
mod eval;
mod fact;
mod value;

pub use analysis::ConstantPropagation;
pub use error::EvalError;
pub use eval::{evaluate, fold, try_evaluate};
pub use fact::CpFact;
pub use value::Value;
