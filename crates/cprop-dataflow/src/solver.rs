use std::collections::VecDeque;

use cprop_ir::{Cfg, NodeIndex};
use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::{AnalysisConfig, DEFAULT_MAX_ITERATIONS, DataflowAnalysis, DataflowError, DataflowResult};

/// Worklist fixpoint solver.
///
/// The solver is stateless between runs; every [`solve`](Self::solve) call
/// allocates and exclusively owns its facts, so independent CFGs may be
/// solved concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    max_iterations: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new().with_max_iterations(config.max_iterations())
    }

    /// Configure the maximum number of worklist pops in one run.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Run `analysis` over `cfg` to a fixpoint.
    pub fn solve<A: DataflowAnalysis>(
        &self,
        analysis: &A,
        cfg: &Cfg,
    ) -> Result<DataflowResult<A::Fact>, DataflowError> {
        debug!(
            "solving `{}` on `{}` ({} nodes, {})",
            analysis.config().id(),
            cfg.ir().name(),
            cfg.len(),
            if analysis.is_forward() { "forward" } else { "backward" },
        );
        let result = if analysis.is_forward() {
            self.solve_forward(analysis, cfg)?
        } else {
            self.solve_backward(analysis, cfg)?
        };
        debug!(
            "`{}` on `{}` converged after {} iterations",
            analysis.config().id(),
            cfg.ir().name(),
            result.iterations(),
        );
        Ok(result)
    }

    fn solve_forward<A: DataflowAnalysis>(
        &self,
        analysis: &A,
        cfg: &Cfg,
    ) -> Result<DataflowResult<A::Fact>, DataflowError> {
        let (mut in_facts, mut out_facts) = initial_facts(analysis, cfg);
        out_facts[cfg.entry().index()] = analysis.new_boundary_fact(cfg);

        let mut worklist = Worklist::new(cfg.nodes().filter(|&node| !cfg.is_entry(node)));
        let mut iterations = 0;
        while let Some(node) = worklist.pop() {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(DataflowError::FuelExhausted {
                    limit: self.max_iterations,
                });
            }

            let in_fact = &mut in_facts[node.index()];
            for pred in cfg.preds(node) {
                analysis.meet_into(&out_facts[pred.index()], in_fact);
            }
            let changed =
                analysis.transfer_node(cfg.stmt(node), in_fact, &mut out_facts[node.index()]);
            trace!(
                "{}: in {:?} out {:?} changed={changed}",
                cfg.label(node),
                in_fact,
                out_facts[node.index()],
            );
            if changed {
                worklist.extend(cfg.succs(node));
            }
        }

        Ok(DataflowResult::new(in_facts, out_facts, iterations))
    }

    fn solve_backward<A: DataflowAnalysis>(
        &self,
        analysis: &A,
        cfg: &Cfg,
    ) -> Result<DataflowResult<A::Fact>, DataflowError> {
        let (mut in_facts, mut out_facts) = initial_facts(analysis, cfg);
        in_facts[cfg.exit().index()] = analysis.new_boundary_fact(cfg);

        let nodes: Vec<NodeIndex> = cfg.nodes().filter(|&node| !cfg.is_exit(node)).collect();
        let mut worklist = Worklist::new(nodes.into_iter().rev());
        let mut iterations = 0;
        while let Some(node) = worklist.pop() {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(DataflowError::FuelExhausted {
                    limit: self.max_iterations,
                });
            }

            let out_fact = &mut out_facts[node.index()];
            for succ in cfg.succs(node) {
                analysis.meet_into(&in_facts[succ.index()], out_fact);
            }
            let changed =
                analysis.transfer_node(cfg.stmt(node), out_fact, &mut in_facts[node.index()]);
            trace!(
                "{}: out {:?} in {:?} changed={changed}",
                cfg.label(node),
                out_fact,
                in_facts[node.index()],
            );
            if changed {
                worklist.extend(cfg.preds(node));
            }
        }

        Ok(DataflowResult::new(in_facts, out_facts, iterations))
    }
}

/// Run `analysis` with a solver configured from the analysis' own config.
pub fn solve<A: DataflowAnalysis>(
    analysis: &A,
    cfg: &Cfg,
) -> Result<DataflowResult<A::Fact>, DataflowError> {
    Solver::from_config(analysis.config()).solve(analysis, cfg)
}

fn initial_facts<A: DataflowAnalysis>(analysis: &A, cfg: &Cfg) -> (Vec<A::Fact>, Vec<A::Fact>) {
    let in_facts = (0..cfg.len()).map(|_| analysis.new_initial_fact()).collect();
    let out_facts = (0..cfg.len()).map(|_| analysis.new_initial_fact()).collect();
    (in_facts, out_facts)
}

/// FIFO worklist that holds each node at most once.
struct Worklist {
    queue: VecDeque<NodeIndex>,
    queued: FxHashSet<NodeIndex>,
}

impl Worklist {
    fn new(nodes: impl IntoIterator<Item = NodeIndex>) -> Self {
        let mut worklist = Self {
            queue: VecDeque::new(),
            queued: FxHashSet::default(),
        };
        worklist.extend(nodes);
        worklist
    }

    fn pop(&mut self) -> Option<NodeIndex> {
        let node = self.queue.pop_front()?;
        self.queued.remove(&node);
        Some(node)
    }

    fn extend(&mut self, nodes: impl IntoIterator<Item = NodeIndex>) {
        for node in nodes {
            if self.queued.insert(node) {
                self.queue.push_back(node);
            }
        }
    }
}
