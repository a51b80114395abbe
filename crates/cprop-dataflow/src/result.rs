use std::fmt;

use cprop_ir::{Cfg, NodeIndex};

use crate::DataflowError;

/// IN and OUT facts of every node of one analysed CFG.
#[derive(Clone, Debug)]
pub struct DataflowResult<F> {
    in_facts: Vec<F>,
    out_facts: Vec<F>,
    iterations: usize,
}

impl<F> DataflowResult<F> {
    pub(crate) fn new(in_facts: Vec<F>, out_facts: Vec<F>, iterations: usize) -> Self {
        debug_assert_eq!(in_facts.len(), out_facts.len());
        Self {
            in_facts,
            out_facts,
            iterations,
        }
    }

    /// Fact holding before `node` executes.
    pub fn in_fact(&self, node: NodeIndex) -> Option<&F> {
        self.in_facts.get(node.index())
    }

    /// Fact holding after `node` executes.
    pub fn out_fact(&self, node: NodeIndex) -> Option<&F> {
        self.out_facts.get(node.index())
    }

    pub fn try_in_fact(&self, node: NodeIndex) -> Result<&F, DataflowError> {
        self.in_fact(node).ok_or(DataflowError::MissingFact(node))
    }

    pub fn try_out_fact(&self, node: NodeIndex) -> Result<&F, DataflowError> {
        self.out_fact(node).ok_or(DataflowError::MissingFact(node))
    }

    /// Number of worklist pops the solver needed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Render one line per node as `label: IN -> OUT`.
    pub fn display<'a>(&'a self, cfg: &'a Cfg) -> impl fmt::Display + 'a
    where
        F: fmt::Display,
    {
        ResultDisplay { result: self, cfg }
    }
}

struct ResultDisplay<'a, F> {
    result: &'a DataflowResult<F>,
    cfg: &'a Cfg,
}

impl<F: fmt::Display> fmt::Display for ResultDisplay<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.cfg.nodes() {
            let (Some(in_fact), Some(out_fact)) =
                (self.result.in_fact(node), self.result.out_fact(node))
            else {
                continue;
            };
            writeln!(f, "{}: {in_fact} -> {out_fact}", self.cfg.label(node))?;
        }
        Ok(())
    }
}
