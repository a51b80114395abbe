use std::fmt;
use std::sync::Arc;

use crate::arena::Arena;
use crate::error::IrError;
use crate::stmt::{Label, Stmt};
use crate::var::{Var, VarId};

/// Three-address body of one procedure.
///
/// Built with [`IrBuilder`](crate::IrBuilder). Statements are addressed by
/// their position in [`Ir::stmts`].
#[derive(Clone, Debug)]
pub struct Ir {
    pub(crate) name: Arc<str>,
    pub(crate) params: Vec<Var>,
    pub(crate) vars: Arena<VarId, Var>,
    pub(crate) stmts: Vec<Stmt>,
    pub(crate) labels: Arena<Label, Option<usize>>,
}

impl Ir {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formal parameters in declaration order.
    pub fn params(&self) -> &[Var] {
        &self.params
    }

    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.vars.iter().map(|(_, var)| var)
    }

    pub fn var(&self, id: VarId) -> Result<&Var, IrError> {
        self.vars.get(id).ok_or(IrError::UnknownVar(id))
    }

    /// Look up a variable by name. Returns the first match.
    pub fn var_by_name(&self, name: &str) -> Option<&Var> {
        self.vars().find(|var| var.name() == name)
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    /// Index of the statement `label` is bound to. A label bound after the
    /// last statement resolves to `stmts().len()`, the procedure exit.
    pub fn label_target(&self, label: Label) -> Result<usize, IrError> {
        self.labels
            .get(label)
            .copied()
            .flatten()
            .ok_or(IrError::UnboundLabel(label))
    }
}

impl fmt::Display for Ir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", param.ty(), param)?;
        }
        writeln!(f, ")")?;
        for (index, stmt) in self.stmts.iter().enumerate() {
            writeln!(f, "  [{index}] {stmt}")?;
        }
        Ok(())
    }
}
