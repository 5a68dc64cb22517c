//! AC-3 arc consistency over the constraint network.
//!
//! ```text
//!   Constraint m0 < m1          ConstraintNetwork
//!                               ┌──────────────────────────┐
//!                    build()    │  m0 ──(m0 < m1)──▶ m1    │
//!                   ───────▶    │  m1 ──(m1 > m0)──▶ m0    │
//!                               └──────────────────────────┘
//! ```
//!
//! Every binary constraint between two meetings contributes its forward arc
//! and the arc of its inverse. After revising `tail`, the arcs to recheck are
//! the incoming edges of `tail`: the neighbours whose support may have
//! depended on a value that was just removed.

use super::arc::Arc;
use super::Pruning;
use crate::constraints::{Constraint, ConstraintError};
use crate::domain::Domains;
use crate::Variable;
use chrono::NaiveDateTime;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashSet, VecDeque};

/// Directed graph with one node per variable and one edge per distinct arc.
///
/// Node `i` is variable `i`.
#[derive(Debug, Clone)]
pub struct ConstraintNetwork {
    graph: DiGraph<Variable, Arc>,
}

impl ConstraintNetwork {
    /// Builds the network for `n` variables.
    ///
    /// Unary constraints and binary constraints against a fixed time have no
    /// head variable and are not part of the network.
    ///
    /// # Errors
    ///
    /// Propagates arc construction errors.
    ///
    /// # Panics
    ///
    /// Panics if a constraint names a variable outside `0..n`.
    pub fn new(n: usize, constraints: &[Constraint]) -> Result<Self, ConstraintError> {
        let mut graph = DiGraph::with_capacity(n, constraints.len() * 2);
        for variable in 0..n {
            graph.add_node(variable);
        }

        let mut seen = HashSet::new();
        for constraint in constraints.iter().filter(|c| c.right_variable().is_some()) {
            let (forward, reverse) = Arc::pair(constraint)?;
            for arc in [forward, reverse] {
                if seen.insert(arc) {
                    graph.add_edge(NodeIndex::new(arc.tail()), NodeIndex::new(arc.head()), arc);
                }
            }
        }

        Ok(Self { graph })
    }

    pub fn variable_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All arcs in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.graph.edge_weights()
    }

    /// Arcs `(neighbour → variable)`.
    pub fn arcs_into(&self, variable: Variable) -> impl Iterator<Item = &Arc> {
        self.graph
            .edges_directed(NodeIndex::new(variable), Direction::Incoming)
            .map(|edge| edge.weight())
    }

    /// Arcs `(variable → neighbour)`.
    pub fn arcs_from(&self, variable: Variable) -> impl Iterator<Item = &Arc> {
        self.graph
            .edges_directed(NodeIndex::new(variable), Direction::Outgoing)
            .map(|edge| edge.weight())
    }

    /// Runs AC-3 to its fixpoint, pruning `domains` in place.
    ///
    /// # Panics
    ///
    /// Panics if `domains` holds fewer domains than the network has variables.
    pub fn propagate(&self, domains: &mut Domains) -> Pruning {
        let mut worklist = Worklist::new(self.graph.edge_count());
        for edge in self.graph.edge_indices() {
            worklist.push(edge);
        }

        let mut pruning = Pruning::default();
        while let Some(edge) = worklist.pop() {
            let arc = &self.graph[edge];
            pruning.revisions += 1;

            let removed = revise(domains, arc);
            if removed == 0 {
                continue;
            }
            pruning.removed += removed;
            log::trace!("{arc}: removed {removed} values from m{}", arc.tail());

            let tail = NodeIndex::new(arc.tail());
            for incoming in self.graph.edges_directed(tail, Direction::Incoming) {
                worklist.push(incoming.id());
            }
        }

        log::debug!(
            "arc consistency removed {} values in {} revisions over {} arcs",
            pruning.removed,
            pruning.revisions,
            self.graph.edge_count()
        );
        pruning
    }
}

/// Removes the values of `arc.tail()` that no value of `arc.head()` supports.
///
/// Returns the number of values removed.
pub fn revise(domains: &mut Domains, arc: &Arc) -> usize {
    let head = &domains[arc.head()];
    let unsupported: Vec<NaiveDateTime> = domains[arc.tail()]
        .iter()
        .filter(|&v| !head.iter().any(|w| arc.is_supported(v, w)))
        .collect();

    let tail = &mut domains[arc.tail()];
    for value in &unsupported {
        tail.remove(value);
    }
    unsupported.len()
}

/// Enforces arc consistency on `domains` under `constraints`.
///
/// # Errors
///
/// Propagates arc construction errors from [`ConstraintNetwork::new`].
pub fn arc_consistency(
    domains: &mut Domains,
    constraints: &[Constraint],
) -> Result<Pruning, ConstraintError> {
    let network = ConstraintNetwork::new(domains.len(), constraints)?;
    Ok(network.propagate(domains))
}

/// FIFO queue of edges that holds each edge at most once.
#[derive(Debug)]
struct Worklist {
    queue: VecDeque<EdgeIndex>,
    queued: Vec<bool>,
}

impl Worklist {
    fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            queued: vec![false; capacity],
        }
    }

    fn push(&mut self, edge: EdgeIndex) {
        let slot = &mut self.queued[edge.index()];
        if !*slot {
            *slot = true;
            self.queue.push_back(edge);
        }
    }

    fn pop(&mut self) -> Option<EdgeIndex> {
        let edge = self.queue.pop_front()?;
        self.queued[edge.index()] = false;
        Some(edge)
    }
}
