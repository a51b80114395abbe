use cprop_dataflow::{AnalysisConfig, DataflowAnalysis, DataflowError, DataflowResult, solve};
use cprop_ir::{Cfg, Lattice, PrimitiveType, Stmt, Var};

use crate::{CpFact, Value, evaluate};

/// Intraprocedural forward constant propagation over `int`-like locals.
#[derive(Clone, Debug)]
pub struct ConstantPropagation {
    config: AnalysisConfig,
}

impl Default for ConstantPropagation {
    fn default() -> Self {
        Self::new(AnalysisConfig::new(Self::ID))
    }
}

impl ConstantPropagation {
    pub const ID: &'static str = "constprop";

    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Whether `var` is tracked: its declared type is `byte`, `short`,
    /// `int`, `char` or `boolean`.
    pub fn can_hold_int(var: &Var) -> bool {
        matches!(
            var.ty().as_primitive(),
            Some(
                PrimitiveType::Byte
                    | PrimitiveType::Short
                    | PrimitiveType::Int
                    | PrimitiveType::Char
                    | PrimitiveType::Boolean
            )
        )
    }

    /// Merge two values reaching the same point.
    pub fn meet_value(a: Value, b: Value) -> Value {
        a.join(&b)
    }

    /// Solve this analysis over `cfg`.
    pub fn analyze(&self, cfg: &Cfg) -> Result<DataflowResult<CpFact>, DataflowError> {
        solve(self, cfg)
    }
}

impl DataflowAnalysis for ConstantPropagation {
    type Fact = CpFact;

    fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn is_forward(&self) -> bool {
        true
    }

    /// Parameters are supplied by callers, so every tracked one is `NAC`.
    fn new_boundary_fact(&self, cfg: &Cfg) -> CpFact {
        cfg.ir()
            .params()
            .iter()
            .filter(|param| Self::can_hold_int(param))
            .map(|param| (param.clone(), Value::Nac))
            .collect()
    }

    fn new_initial_fact(&self) -> CpFact {
        CpFact::new()
    }

    fn meet_into(&self, fact: &CpFact, target: &mut CpFact) {
        for (var, value) in fact.entries() {
            let merged = Self::meet_value(target.get(var), value);
            target.update(var.clone(), merged);
        }
    }

    fn transfer_node(&self, stmt: &Stmt, input: &CpFact, output: &mut CpFact) -> bool {
        let Some(def) = stmt.as_definition() else {
            return output.copy_from(input);
        };
        let mut next = input.clone();
        // stores to fields, array elements and untracked locals are invisible
        if let Some(lhs) = def.lvalue().as_var().filter(|var| Self::can_hold_int(var)) {
            next.update(lhs.clone(), evaluate(def.rvalue(), input));
        }
        output.copy_from(&next)
    }
}
