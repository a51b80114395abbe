//! Intraprocedural constant propagation.
//!
//! The workspace is split into a host IR with its CFG ([`ir`]), a generic
//! dataflow solver ([`dataflow`]) and the constant propagation analysis
//! itself ([`constprop`]).
//!
//! ```
//! use cprop::prelude::*;
//!
//! let mut b = IrBuilder::new("f");
//! let n = b.var().name("n").ty(PrimitiveType::Int).param(true).new();
//! let k = b.var().name("k").ty(PrimitiveType::Int).new();
//! let m = b.var().name("m").ty(PrimitiveType::Int).new();
//! b.push(Stmt::assign(&k, Exp::int(6)));
//! b.push(Stmt::assign(&m, Exp::binary(ArithmeticOp::Mul, &k, &n)));
//! let cfg = Cfg::build(b.build())?;
//!
//! let result = ConstantPropagation::default().analyze(&cfg)?;
//! let exit = result.in_fact(cfg.exit()).unwrap();
//! assert_eq!(exit.get(&k), Value::Constant(6));
//! assert_eq!(exit.get(&m), Value::Nac);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use cprop_constprop as constprop;
pub use cprop_dataflow as dataflow;
pub use cprop_ir as ir;

pub mod prelude {
    pub use cprop_constprop::*;
    pub use cprop_dataflow::*;
    pub use cprop_ir::*;
}
