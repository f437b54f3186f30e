// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the two valuation algorithms of the and/or graph.
//!
//! - `most_conservative_valuation` computes the least fixpoint of the boolean
//!   semantics of the graph (which nodes are forced to hold).
//! - `weighted_most_conservative_valuation` computes the least fixpoint of the
//!   additive cost semantics of the graph (sum over the requirements of AND
//!   nodes, min over the producers of OR nodes).
//!
//! Both passes recompute everything from scratch and make no assumption about
//! the acyclicity of the graph: they are driven by counters of unmet
//! requirements, so that a node is only ever settled once all of its
//! requirements (or one of its producers) have been settled.

use std::cmp::Ordering;
use std::collections::VecDeque;

use binary_heap_plus::BinaryHeap;
use bitset_fixed::BitSet;
use compare::Compare;
use tracing::trace;

use crate::{AndOrGraph, Connective, Cost, Node, NodeId, NodeType, INFINITE_COST};

/// The reverse adjacency of a graph in a compressed (CSR) form: for each node
/// `n`, the nodes which declare an edge towards `n`. These are the nodes whose
/// valuation may change when the valuation of `n` is settled.
struct Dependents {
    offsets: Vec<usize>,
    targets: Vec<NodeId>
}
impl Dependents {
    fn of(graph: &AndOrGraph) -> Self {
        let nb_nodes = graph.nodes.len();
        let mut offsets = vec![0; nb_nodes + 1];
        for node in graph.nodes.iter() {
            for succ in node.successors() {
                offsets[succ.id() + 1] += 1;
            }
        }
        for i in 0..nb_nodes {
            offsets[i + 1] += offsets[i];
        }

        let mut fill    = offsets.clone();
        let mut targets = vec![NodeId(0); offsets[nb_nodes]];
        for (id, node) in graph.nodes.iter().enumerate() {
            for succ in node.successors() {
                targets[fill[succ.id()]] = NodeId(id);
                fill[succ.id()] += 1;
            }
        }
        Dependents { offsets, targets }
    }
    fn of_node(&self, id: NodeId) -> &[NodeId] {
        &self.targets[self.offsets[id.id()]..self.offsets[id.id() + 1]]
    }
}

/// A node whose additive cost is known to be at most `cost`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Candidate {
    cost: Cost,
    node: NodeId
}

/// The ordering of the weighted valuation queue: the cheapest candidate pops
/// first, equal costs pop in increasing node id.
#[derive(Debug, Default, Copy, Clone)]
struct CheapestFirst;
impl Compare<Candidate> for CheapestFirst {
    fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        b.cost.cmp(&a.cost).then_with(|| b.node.cmp(&a.node))
    }
}

impl AndOrGraph {
    /// Computes the most conservative (least) valuation of the graph: after
    /// this method returns, `forced_true` holds for exactly those nodes that
    /// are forced to hold. An AND node holds iff all of its requirements hold
    /// (vacuously so when it has none). An OR node holds iff any one of its
    /// producers holds.
    ///
    /// This runs in time linear in the size of the graph.
    pub fn most_conservative_valuation(&mut self) {
        let dependents = Dependents::of(self);
        let mut unmet  = self.nodes.iter().map(|n| n.requirements().len()).collect::<Vec<_>>();
        let mut queue  = VecDeque::new();

        for (id, node) in self.nodes.iter_mut().enumerate() {
            node.forced_true = node.node_type() == NodeType::And && unmet[id] == 0;
            if node.forced_true {
                queue.push_back(NodeId(id));
            }
        }

        let mut nb_true = queue.len();
        while let Some(current) = queue.pop_front() {
            for dep in dependents.of_node(current).iter().copied() {
                let node = &mut self.nodes[dep.id()];
                if node.forced_true {
                    continue;
                }
                let fires = match node.node_type() {
                    NodeType::Or  => true,
                    NodeType::And => {
                        unmet[dep.id()] -= 1;
                        unmet[dep.id()] == 0
                    }
                };
                if fires {
                    node.forced_true = true;
                    nb_true += 1;
                    queue.push_back(dep);
                }
            }
        }
        trace!(nb_nodes = self.nodes.len(), nb_true, "boolean valuation");
    }

    /// Computes the weighted most conservative valuation of the graph: after
    /// this method returns, the `additive_cost` of each node is
    ///
    /// - the `direct_cost` of the node plus the sum of the costs of its
    ///   requirements for an AND node,
    /// - the minimum cost over its producers for an OR node,
    ///
    /// and `INFINITE_COST` for any node that cannot be established. The
    /// `best_producer` of each reachable OR node is the producer that realized
    /// its cost.
    ///
    /// # Note:
    /// Nodes are settled in non decreasing order of cost (it is basically a
    /// Dijkstra over the bipartite graph). An OR node is settled by the first
    /// of its producers to be settled; hence, when several producers have the
    /// same minimal cost, the one which was settled first wins. Nodes having
    /// the same cost are settled in increasing id order.
    pub fn weighted_most_conservative_valuation(&mut self) {
        let dependents    = Dependents::of(self);
        let mut remaining = self.nodes.iter().map(|n| n.requirements().len()).collect::<Vec<_>>();
        let mut summed    = self.nodes.iter().map(|n| n.direct_cost).collect::<Vec<_>>();
        let mut settled   = BitSet::new(self.nodes.len());
        let mut heap      = BinaryHeap::from_vec_cmp(vec![], CheapestFirst);

        for (id, node) in self.nodes.iter_mut().enumerate() {
            node.additive_cost = INFINITE_COST;
            match &mut node.connective {
                Connective::Or { best_producer, .. } => *best_producer = None,
                Connective::And { requirements } if requirements.is_empty() => {
                    node.additive_cost = node.direct_cost;
                    heap.push(Candidate { cost: node.direct_cost, node: NodeId(id) });
                },
                Connective::And { .. } => {}
            }
        }

        let mut nb_settled = 0;
        while let Some(Candidate { cost, node: current }) = heap.pop() {
            if settled[current.id()] {
                continue;
            }
            settled.set(current.id(), true);
            nb_settled += 1;

            for dep in dependents.of_node(current).iter().copied() {
                if settled[dep.id()] {
                    continue;
                }
                let Node { connective, additive_cost, .. } = &mut self.nodes[dep.id()];
                match connective {
                    Connective::Or { best_producer, .. } => {
                        if cost < *additive_cost {
                            *additive_cost = cost;
                            *best_producer = Some(current);
                            heap.push(Candidate { cost, node: dep });
                        }
                    },
                    Connective::And { .. } => {
                        remaining[dep.id()] -= 1;
                        summed[dep.id()] = summed[dep.id()].saturating_add(cost);
                        if remaining[dep.id()] == 0 {
                            *additive_cost = summed[dep.id()];
                            heap.push(Candidate { cost: *additive_cost, node: dep });
                        }
                    }
                }
            }
        }
        trace!(nb_nodes = self.nodes.len(), nb_settled, "weighted valuation");
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
