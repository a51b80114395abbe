use std::sync::Arc;

use crate::arena::Arena;
use crate::error::IrError;
use crate::ir::Ir;
use crate::stmt::{Label, Stmt};
use crate::ty::Type;
use crate::var::{Var, VarId};

/// Incremental builder for an [`Ir`].
///
/// ```
/// use cprop_ir::{Exp, IrBuilder, PrimitiveType, Stmt};
///
/// let mut b = IrBuilder::new("f");
/// let p = b.var().name("p").ty(PrimitiveType::Int).param(true).new();
/// let x = b.var().name("x").ty(PrimitiveType::Int).new();
/// b.push(Stmt::assign(&x, &p));
/// b.push(Stmt::ret(Some(&x)));
/// let ir = b.build();
/// assert_eq!(ir.params(), &[p]);
/// assert_eq!(ir.stmts().len(), 2);
/// ```
#[derive(Debug)]
pub struct IrBuilder {
    name: Arc<str>,
    params: Vec<Var>,
    vars: Arena<VarId, Var>,
    stmts: Vec<Stmt>,
    labels: Arena<Label, Option<usize>>,
}

impl IrBuilder {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            vars: Arena::default(),
            stmts: Vec::new(),
            labels: Arena::default(),
        }
    }

    /// Allocate an unbound label.
    pub fn label(&mut self) -> Label {
        self.labels.alloc(None)
    }

    /// Bind `label` to the next statement pushed (or to the exit when no
    /// statement follows).
    pub fn bind(&mut self, label: Label) -> Result<(), IrError> {
        let slot = self
            .labels
            .get_mut(label)
            .ok_or(IrError::UnboundLabel(label))?;
        if slot.is_some() {
            return Err(IrError::DuplicateLabel(label));
        }
        *slot = Some(self.stmts.len());
        Ok(())
    }

    /// Append a statement and return its index.
    pub fn push(&mut self, stmt: Stmt) -> usize {
        self.stmts.push(stmt);
        self.stmts.len() - 1
    }

    pub fn build(self) -> Ir {
        Ir {
            name: self.name,
            params: self.params,
            vars: self.vars,
            stmts: self.stmts,
            labels: self.labels,
        }
    }
}

#[bon::bon]
impl IrBuilder {
    /// Declare a local variable, or a formal parameter with `param(true)`.
    #[builder(finish_fn = new)]
    pub fn var(
        &mut self,
        #[builder(into)] name: Arc<str>,
        #[builder(into)] ty: Type,
        param: Option<bool>,
    ) -> Var {
        let id = self.vars.next_id();
        let var = Var::new(id, name, ty);
        self.vars.alloc(var.clone());
        if param.unwrap_or(false) {
            self.params.push(var.clone());
        }
        var
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Exp, PrimitiveType};

    #[test]
    fn params_keep_declaration_order() {
        let mut b = IrBuilder::new("f");
        let a = b.var().name("a").ty(PrimitiveType::Int).param(true).new();
        let _t = b.var().name("t").ty(PrimitiveType::Int).new();
        let c = b.var().name("c").ty(Type::class("Foo")).param(true).new();
        let ir = b.build();

        assert_eq!(ir.params(), &[a.clone(), c]);
        assert_eq!(ir.vars().count(), 3);
        assert_eq!(ir.var(a.id()).unwrap().name(), "a");
        assert_eq!(ir.var_by_name("t").map(Var::name), Some("t"));
    }

    #[test]
    fn labels_bind_to_the_next_statement() {
        let mut b = IrBuilder::new("f");
        let x = b.var().name("x").ty(PrimitiveType::Int).new();
        let head = b.label();
        let end = b.label();
        b.bind(head).unwrap();
        b.push(Stmt::assign(&x, Exp::int(1)));
        b.push(Stmt::goto(head));
        b.bind(end).unwrap();
        assert_eq!(b.bind(end), Err(IrError::DuplicateLabel(end)));

        let ir = b.build();
        assert_eq!(ir.label_target(head), Ok(0));
        assert_eq!(ir.label_target(end), Ok(2));
    }

    #[test]
    fn unbound_label_is_reported() {
        let mut b = IrBuilder::new("f");
        let dangling = b.label();
        let ir = b.build();
        assert_eq!(ir.label_target(dangling), Err(IrError::UnboundLabel(dangling)));
    }
}
