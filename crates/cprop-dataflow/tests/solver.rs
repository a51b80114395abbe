use std::fmt;

use cprop_dataflow::*;
use cprop_ir::*;

/// f(int p):
///   [0] x = 1
///   [1] if (x < p) goto L0
///   [2] y = x
///   [3] goto L1
///   L0: [4] y = p
///   L1: [5] return y
fn diamond() -> Cfg {
    let mut b = IrBuilder::new("f");
    let p = b.var().name("p").ty(PrimitiveType::Int).param(true).new();
    let x = b.var().name("x").ty(PrimitiveType::Int).new();
    let y = b.var().name("y").ty(PrimitiveType::Int).new();
    let then_label = b.label();
    let join_label = b.label();

    b.push(Stmt::assign(&x, Exp::int(1)));
    b.push(Stmt::if_goto(
        BinaryExp::new(ConditionOp::Lt, x.clone(), p.clone()),
        then_label,
    ));
    b.push(Stmt::assign(&y, &x));
    b.push(Stmt::goto(join_label));
    b.bind(then_label).unwrap();
    b.push(Stmt::assign(&y, &p));
    b.bind(join_label).unwrap();
    b.push(Stmt::ret(Some(&y)));

    Cfg::build(b.build()).unwrap()
}

/// `[0] if (x == x) goto L1; [1] goto L0` with L0 at 0 and L1 at the exit.
fn spin() -> Cfg {
    let mut b = IrBuilder::new("spin");
    let x = b.var().name("x").ty(PrimitiveType::Int).new();
    let head = b.label();
    let end = b.label();
    b.bind(head).unwrap();
    b.push(Stmt::if_goto(
        BinaryExp::new(ConditionOp::Eq, x.clone(), x.clone()),
        end,
    ));
    b.push(Stmt::goto(head));
    b.bind(end).unwrap();
    Cfg::build(b.build()).unwrap()
}

// ---------------------------------------------------------------------------
// Backward: live variables
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
struct LiveVars(SetFact<Var>);

impl fmt::Display for LiveVars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, var) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var}")?;
        }
        f.write_str("}")
    }
}

struct LiveVariables {
    config: AnalysisConfig,
}

impl DataflowAnalysis for LiveVariables {
    type Fact = LiveVars;

    fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn is_forward(&self) -> bool {
        false
    }

    fn new_boundary_fact(&self, _cfg: &Cfg) -> LiveVars {
        LiveVars::default()
    }

    fn new_initial_fact(&self) -> LiveVars {
        LiveVars::default()
    }

    fn meet_into(&self, fact: &LiveVars, target: &mut LiveVars) {
        target.0.union_with(&fact.0);
    }

    fn transfer_node(&self, stmt: &Stmt, out: &LiveVars, in_fact: &mut LiveVars) -> bool {
        let mut live = out.0.clone();
        if let Some(def) = stmt.def() {
            live.remove(def);
        }
        for used in stmt.uses() {
            live.add(used.clone());
        }
        in_fact.0.copy_from(&live)
    }
}

#[test_log::test]
fn test_backward_live_variables() {
    let cfg = diamond();
    let analysis = LiveVariables {
        config: AnalysisConfig::new("livevar"),
    };
    let result = solve(&analysis, &cfg).unwrap();

    insta::assert_snapshot!(result.display(&cfg).to_string(), @r"
    entry: {p} -> {p}
    [0] x = 1: {p} -> {x, p}
    [1] if (x < p) goto L0: {x, p} -> {x, p}
    [2] y = x: {x} -> {y}
    [3] goto L1: {y} -> {y}
    [4] y = p: {p} -> {y}
    [5] return y: {y} -> {}
    exit: {} -> {}
    ");
    assert_eq!(result.iterations(), 7);
}

// ---------------------------------------------------------------------------
// Forward: possibly assigned variables
// ---------------------------------------------------------------------------

struct Assigned {
    config: AnalysisConfig,
}

impl DataflowAnalysis for Assigned {
    type Fact = SetFact<Var>;

    fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn is_forward(&self) -> bool {
        true
    }

    fn new_boundary_fact(&self, cfg: &Cfg) -> SetFact<Var> {
        cfg.ir().params().iter().cloned().collect()
    }

    fn new_initial_fact(&self) -> SetFact<Var> {
        SetFact::new()
    }

    fn meet_into(&self, fact: &SetFact<Var>, target: &mut SetFact<Var>) {
        target.union_with(fact);
    }

    fn transfer_node(&self, stmt: &Stmt, input: &SetFact<Var>, output: &mut SetFact<Var>) -> bool {
        let mut assigned = input.clone();
        if let Some(def) = stmt.def() {
            assigned.add(def.clone());
        }
        output.copy_from(&assigned)
    }
}

#[test_log::test]
fn test_forward_joins_both_branches() {
    let cfg = diamond();
    let analysis = Assigned {
        config: AnalysisConfig::new("assigned"),
    };
    let result = Solver::new().solve(&analysis, &cfg).unwrap();
    let ir = cfg.ir();
    let [p, x, y] = ["p", "x", "y"].map(|name| ir.var_by_name(name).unwrap().clone());

    let branch_in = result.in_fact(cfg.node_of(1).unwrap()).unwrap();
    assert!(branch_in.contains(&p) && branch_in.contains(&x));
    assert!(!branch_in.contains(&y));

    let join_in = result.in_fact(cfg.node_of(5).unwrap()).unwrap();
    assert_eq!(join_in.len(), 3);
    assert_eq!(result.out_fact(cfg.exit()), Some(join_in));
    assert_eq!(result.out_fact(cfg.entry()).unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Non-terminating analyses and lookups
// ---------------------------------------------------------------------------

/// Counts visits; never stabilizes on a cycle.
struct Diverging {
    config: AnalysisConfig,
}

impl DataflowAnalysis for Diverging {
    type Fact = u64;

    fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn is_forward(&self) -> bool {
        true
    }

    fn new_boundary_fact(&self, _cfg: &Cfg) -> u64 {
        0
    }

    fn new_initial_fact(&self) -> u64 {
        0
    }

    fn meet_into(&self, fact: &u64, target: &mut u64) {
        *target = (*target).max(*fact);
    }

    fn transfer_node(&self, _stmt: &Stmt, input: &u64, output: &mut u64) -> bool {
        *output = input + 1;
        true
    }
}

#[test]
fn test_fuel_exhaustion_is_reported() {
    let cfg = spin();
    let analysis = Diverging {
        config: AnalysisConfig::new("diverging").with_max_iterations(50),
    };

    let err = solve(&analysis, &cfg).unwrap_err();
    assert_eq!(err, DataflowError::FuelExhausted { limit: 50 });
    assert_eq!(err.to_string(), "fixpoint not reached within 50 iterations");

    let err = Solver::new()
        .with_max_iterations(3)
        .solve(&analysis, &cfg)
        .unwrap_err();
    assert_eq!(err, DataflowError::FuelExhausted { limit: 3 });
}

#[test]
fn test_missing_fact_for_foreign_node() {
    let cfg = diamond();
    let analysis = Assigned {
        config: AnalysisConfig::new("assigned"),
    };
    let result = solve(&analysis, &cfg).unwrap();

    let foreign = NodeIndex::new(cfg.len() + 3);
    assert_eq!(result.in_fact(foreign), None);
    assert_eq!(
        result.try_out_fact(foreign).unwrap_err(),
        DataflowError::MissingFact(foreign)
    );
    assert!(result.try_in_fact(cfg.entry()).is_ok());
}
