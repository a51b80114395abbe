use std::fmt;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use smallvec::SmallVec;

use crate::error::IrError;
use crate::ir::Ir;
use crate::stmt::Stmt;

/// Why control may flow along an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// From the synthetic entry to the first statement.
    Entry,
    FallThrough,
    Goto,
    IfTrue,
    IfFalse,
    /// From a `return` to the synthetic exit.
    Return,
}

/// Small neighbour list; most nodes have one or two.
pub type Neighbors = SmallVec<[NodeIndex; 2]>;

/// Statement-level control-flow graph of one [`Ir`].
///
/// Every statement is one node. Two synthetic nodes carrying [`Stmt::Nop`]
/// mark the unique entry and exit.
#[derive(Clone, Debug)]
pub struct Cfg {
    ir: Ir,
    graph: DiGraph<Stmt, EdgeKind>,
    entry: NodeIndex,
    exit: NodeIndex,
    stmt_nodes: Vec<NodeIndex>,
}

impl Cfg {
    /// Build the CFG of `ir`, resolving every jump target.
    pub fn build(ir: Ir) -> Result<Self, IrError> {
        let mut graph = DiGraph::with_capacity(ir.stmts().len() + 2, ir.stmts().len() + 1);
        let entry = graph.add_node(Stmt::Nop);
        let stmt_nodes: Vec<NodeIndex> = ir
            .stmts()
            .iter()
            .map(|stmt| graph.add_node(stmt.clone()))
            .collect();
        let exit = graph.add_node(Stmt::Nop);

        let node_at = |index: usize| stmt_nodes.get(index).copied().unwrap_or(exit);

        graph.add_edge(entry, node_at(0), EdgeKind::Entry);
        for (index, stmt) in ir.stmts().iter().enumerate() {
            let node = stmt_nodes[index];
            let next = node_at(index + 1);
            match stmt {
                Stmt::Goto(label) => {
                    let target = node_at(ir.label_target(*label)?);
                    graph.add_edge(node, target, EdgeKind::Goto);
                }
                Stmt::If(s) => {
                    let target = node_at(ir.label_target(s.target())?);
                    graph.add_edge(node, target, EdgeKind::IfTrue);
                    graph.add_edge(node, next, EdgeKind::IfFalse);
                }
                Stmt::Return(_) => {
                    graph.add_edge(node, exit, EdgeKind::Return);
                }
                Stmt::Definition(_) | Stmt::Invoke(_) | Stmt::Nop => {
                    graph.add_edge(node, next, EdgeKind::FallThrough);
                }
            }
        }

        Ok(Self {
            ir,
            graph,
            entry,
            exit,
            stmt_nodes,
        })
    }

    pub fn ir(&self) -> &Ir {
        &self.ir
    }

    pub fn entry(&self) -> NodeIndex {
        self.entry
    }

    pub fn exit(&self) -> NodeIndex {
        self.exit
    }

    pub fn is_entry(&self, node: NodeIndex) -> bool {
        node == self.entry
    }

    pub fn is_exit(&self, node: NodeIndex) -> bool {
        node == self.exit
    }

    /// All nodes: entry first, then statements in program order, then exit.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// The statement at `node`; the synthetic entry and exit carry `Nop`.
    pub fn stmt(&self, node: NodeIndex) -> &Stmt {
        &self.graph[node]
    }

    /// Node of the statement at position `index` of [`Ir::stmts`].
    pub fn node_of(&self, index: usize) -> Option<NodeIndex> {
        self.stmt_nodes.get(index).copied()
    }

    /// Distinct predecessors of `node`, in ascending node order.
    pub fn preds(&self, node: NodeIndex) -> Neighbors {
        self.neighbors(node, Direction::Incoming)
    }

    /// Distinct successors of `node`, in ascending node order.
    pub fn succs(&self, node: NodeIndex) -> Neighbors {
        self.neighbors(node, Direction::Outgoing)
    }

    /// Kinds of all edges from `from` to `to`.
    pub fn edge_kinds(&self, from: NodeIndex, to: NodeIndex) -> SmallVec<[EdgeKind; 2]> {
        self.graph
            .edges_connecting(from, to)
            .map(|edge| *edge.weight())
            .collect()
    }

    fn neighbors(&self, node: NodeIndex, dir: Direction) -> Neighbors {
        let mut out: Neighbors = self.graph.neighbors_directed(node, dir).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Short human-readable label of a node: `entry`, `exit` or
    /// `[index] stmt`.
    pub fn label(&self, node: NodeIndex) -> String {
        if node == self.entry {
            "entry".to_owned()
        } else if node == self.exit {
            "exit".to_owned()
        } else {
            // statement nodes are allocated right after the entry
            format!("[{}] {}", node.index() - 1, self.graph[node])
        }
    }

    fn short_name(&self, node: NodeIndex) -> String {
        if node == self.entry || node == self.exit {
            self.label(node)
        } else {
            format!("[{}]", node.index() - 1)
        }
    }
}

impl fmt::Display for Cfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "{}", self.label(node))?;
            let succs = self.succs(node);
            if !succs.is_empty() {
                f.write_str(" ->")?;
                for succ in succs {
                    write!(f, " {}", self.short_name(succ))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
