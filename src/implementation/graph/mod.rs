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

//! This module implements the and/or dependency graph on which all the
//! relaxation heuristics are computed. The graph itself knows nothing about
//! planning: it is a plain bipartite structure of AND nodes (which hold iff
//! all their requirements hold) and OR nodes (which hold iff any one of their
//! producers holds), each of which carries a non negative direct cost.
//!
//! The structure uses indices as pseudo pointers (`NodeId`) in the spirit of
//! this [blog post](http://smallcultfollowing.com/babysteps/blog/2015/04/06/modeling-graphs-in-rust-using-vector-indices/).
//! The edges are stored on the node that declares them: the requirements of
//! an AND node and the producers of an OR node. The valuation algorithms
//! (see the `valuation` submodule) derive the reverse adjacency on the fly.
//!
//! # Example
//! ```
//! # use relaxed_task_graph::*;
//! let mut graph = AndOrGraph::new();
//! let start = graph.add_node(NodeType::And, 0);
//! let fact  = graph.add_node(NodeType::Or,  0);
//! let fire  = graph.add_node(NodeType::And, 3);
//! graph.add_edge(fact, start).unwrap();
//! graph.add_edge(fire, fact).unwrap();
//!
//! graph.weighted_most_conservative_valuation();
//! assert_eq!(3, graph[fire].additive_cost);
//! assert_eq!(Some(start), graph[fact].best_producer());
//! ```

use std::ops::{Index, IndexMut};

use crate::{Cost, Error, NodeId, NodeType, Result, INFINITE_COST};

mod valuation;
mod viz;

pub use viz::*;

/// The kind specific payload of a node. An AND node lists the nodes it
/// requires, an OR node lists the nodes that suffice to produce it (along
/// with the cheapest of them, once a weighted valuation has been computed).
///
/// In both cases, the edges are kept in insertion order and no edge is ever
/// present twice.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Connective {
    And { requirements: Vec<NodeId> },
    Or  { producers: Vec<NodeId>, best_producer: Option<NodeId> }
}

/// This structure stores all the information associated with a node of the
/// graph: its (immutable) kind and edges, its direct cost and the fields which
/// are computed by the valuation algorithms.
#[derive(Debug, Clone)]
pub struct Node {
    /// The kind of node along with the edges it declares
    connective: Connective,
    /// The weight intrinsically attached to this node (0 for pure logical
    /// connectors).
    pub direct_cost: Cost,
    /// Set by the boolean valuation: true iff the node is forced to hold.
    pub forced_true: bool,
    /// Set by the weighted valuation: the additive cost of this node, or
    /// `INFINITE_COST` when it cannot be established.
    pub additive_cost: Cost
}
impl Node {
    fn new(node_type: NodeType, direct_cost: Cost) -> Self {
        let connective = match node_type {
            NodeType::And => Connective::And { requirements: vec![] },
            NodeType::Or  => Connective::Or  { producers: vec![], best_producer: None },
        };
        Node { connective, direct_cost, forced_true: false, additive_cost: INFINITE_COST }
    }
    /// Returns the kind of this node.
    pub fn node_type(&self) -> NodeType {
        match self.connective {
            Connective::And { .. } => NodeType::And,
            Connective::Or  { .. } => NodeType::Or,
        }
    }
    /// Returns the kind specific payload of this node.
    pub fn connective(&self) -> &Connective {
        &self.connective
    }
    /// The nodes that must all hold for this node to hold (empty for an OR node)
    pub fn requirements(&self) -> &[NodeId] {
        match &self.connective {
            Connective::And { requirements } => requirements,
            Connective::Or  { .. }           => &[],
        }
    }
    /// The nodes any one of which suffices for this node to hold (empty for
    /// an AND node)
    pub fn producers(&self) -> &[NodeId] {
        match &self.connective {
            Connective::And { .. }            => &[],
            Connective::Or  { producers, .. } => producers,
        }
    }
    /// The producer realizing the minimal additive cost of this OR node. This
    /// is `None` for AND nodes, for unreachable OR nodes and as long as no
    /// weighted valuation has been computed.
    pub fn best_producer(&self) -> Option<NodeId> {
        match self.connective {
            Connective::And { .. }               => None,
            Connective::Or  { best_producer, .. } => best_producer,
        }
    }
    /// The edges declared by this node, regardless of its kind.
    pub fn successors(&self) -> &[NodeId] {
        match &self.connective {
            Connective::And { requirements }  => requirements,
            Connective::Or  { producers, .. } => producers,
        }
    }
    /// Returns true iff the last weighted valuation established a finite cost
    /// for this node.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.additive_cost != INFINITE_COST
    }
    fn successors_mut(&mut self) -> &mut Vec<NodeId> {
        match &mut self.connective {
            Connective::And { requirements }  => requirements,
            Connective::Or  { producers, .. } => producers,
        }
    }
}

/// A bipartite graph of AND and OR nodes along with the valuation algorithms
/// that operate on it.
#[derive(Debug, Clone, Default)]
pub struct AndOrGraph {
    nodes: Vec<Node>,
    nb_edges: usize
}
impl AndOrGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }
    /// Appends a fresh node to the graph and returns its identifier.
    pub fn add_node(&mut self, node_type: NodeType, direct_cost: Cost) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(node_type, direct_cost));
        id
    }
    /// Adds an edge from the declaring node `from` to `to`. If `from` is an
    /// AND node, `to` becomes one of its requirements. Otherwise, `to` becomes
    /// one of its producers. Adding an edge which already exists has no effect.
    ///
    /// # Note:
    /// The graph does not reject self loops. It is up to the caller not to
    /// create cycles that make no sense for its application.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check(from)?;
        self.check(to)?;

        let edges = self.nodes[from.id()].successors_mut();
        if !edges.contains(&to) {
            edges.push(to);
            self.nb_edges += 1;
        }
        Ok(())
    }
    /// Removes the edge from `from` to `to`. Removing an edge which does not
    /// exist has no effect.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check(from)?;
        self.check(to)?;

        let edges = self.nodes[from.id()].successors_mut();
        if let Some(pos) = edges.iter().position(|x| *x == to) {
            edges.remove(pos);
            self.nb_edges -= 1;
        }
        Ok(())
    }
    /// Returns the node identified by `id` (if it exists)
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.id())
    }
    /// Returns a mutable access to the node identified by `id` (if it exists)
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.id())
    }
    /// The number of nodes in the graph
    pub fn nb_nodes(&self) -> usize {
        self.nodes.len()
    }
    /// The number of edges in the graph
    pub fn nb_edges(&self) -> usize {
        self.nb_edges
    }
    /// Returns true iff the graph has no node at all
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Iterates over all the nodes of the graph along with their ids
    pub fn nodes(&self) -> impl Iterator<Item=(NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.id() < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::NoSuchNode(id))
        }
    }
}
impl Index<NodeId> for AndOrGraph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.id()]
    }
}
impl IndexMut<NodeId> for AndOrGraph {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.id()]
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_graph {
    use crate::{AndOrGraph, Connective, Error, NodeId, NodeType, INFINITE_COST};

    #[test]
    fn by_default_the_graph_is_empty() {
        let graph = AndOrGraph::new();
        assert!(graph.is_empty());
        assert_eq!(0, graph.nb_nodes());
        assert_eq!(0, graph.nb_edges());
    }
    #[test]
    fn add_node_yields_dense_ids() {
        let mut graph = AndOrGraph::new();
        assert_eq!(NodeId(0), graph.add_node(NodeType::And, 0));
        assert_eq!(NodeId(1), graph.add_node(NodeType::Or,  0));
        assert_eq!(NodeId(2), graph.add_node(NodeType::And, 4));
        assert_eq!(3, graph.nb_nodes());
    }
    #[test]
    fn a_fresh_node_is_neither_true_nor_reachable() {
        let mut graph = AndOrGraph::new();
        let id = graph.add_node(NodeType::And, 4);
        let node = &graph[id];
        assert_eq!(NodeType::And, node.node_type());
        assert_eq!(4, node.direct_cost);
        assert!(!node.forced_true);
        assert_eq!(INFINITE_COST, node.additive_cost);
        assert!(!node.is_reachable());
    }
    #[test]
    fn add_edge_on_an_and_node_adds_a_requirement() {
        let mut graph = AndOrGraph::new();
        let and = graph.add_node(NodeType::And, 0);
        let or  = graph.add_node(NodeType::Or,  0);
        graph.add_edge(and, or).unwrap();

        assert_eq!(&[or], graph[and].requirements());
        assert!(graph[and].producers().is_empty());
        assert!(graph[or].successors().is_empty());
        assert_eq!(1, graph.nb_edges());
    }
    #[test]
    fn add_edge_on_an_or_node_adds_a_producer() {
        let mut graph = AndOrGraph::new();
        let and = graph.add_node(NodeType::And, 0);
        let or  = graph.add_node(NodeType::Or,  0);
        graph.add_edge(or, and).unwrap();

        assert_eq!(&[and], graph[or].producers());
        assert!(graph[or].requirements().is_empty());
        assert_eq!(&Connective::Or { producers: vec![and], best_producer: None }, graph[or].connective());
    }
    #[test]
    fn adding_an_edge_twice_has_no_effect() {
        let mut graph = AndOrGraph::new();
        let and = graph.add_node(NodeType::And, 0);
        let or  = graph.add_node(NodeType::Or,  0);
        graph.add_edge(and, or).unwrap();
        graph.add_edge(and, or).unwrap();

        assert_eq!(&[or], graph[and].requirements());
        assert_eq!(1, graph.nb_edges());
    }
    #[test]
    fn edges_are_kept_in_insertion_order() {
        let mut graph = AndOrGraph::new();
        let or = graph.add_node(NodeType::Or,  0);
        let a  = graph.add_node(NodeType::And, 0);
        let b  = graph.add_node(NodeType::And, 0);
        let c  = graph.add_node(NodeType::And, 0);
        graph.add_edge(or, c).unwrap();
        graph.add_edge(or, a).unwrap();
        graph.add_edge(or, b).unwrap();

        assert_eq!(&[c, a, b], graph[or].producers());
    }
    #[test]
    fn remove_edge_is_the_inverse_of_add_edge() {
        let mut graph = AndOrGraph::new();
        let and = graph.add_node(NodeType::And, 0);
        let x   = graph.add_node(NodeType::Or,  0);
        let y   = graph.add_node(NodeType::Or,  0);
        graph.add_edge(and, x).unwrap();
        graph.add_edge(and, y).unwrap();
        graph.remove_edge(and, x).unwrap();

        assert_eq!(&[y], graph[and].requirements());
        assert_eq!(1, graph.nb_edges());
    }
    #[test]
    fn removing_a_missing_edge_has_no_effect() {
        let mut graph = AndOrGraph::new();
        let and = graph.add_node(NodeType::And, 0);
        let or  = graph.add_node(NodeType::Or,  0);
        graph.remove_edge(and, or).unwrap();
        assert_eq!(0, graph.nb_edges());
    }
    #[test]
    fn edges_with_unknown_nodes_are_rejected() {
        let mut graph = AndOrGraph::new();
        let and = graph.add_node(NodeType::And, 0);
        assert_eq!(Err(Error::NoSuchNode(NodeId(7))), graph.add_edge(and, NodeId(7)));
        assert_eq!(Err(Error::NoSuchNode(NodeId(9))), graph.add_edge(NodeId(9), and));
        assert_eq!(Err(Error::NoSuchNode(NodeId(7))), graph.remove_edge(and, NodeId(7)));
        assert!(graph[and].requirements().is_empty());
    }
    #[test]
    fn get_node_yields_none_for_unknown_nodes() {
        let mut graph = AndOrGraph::new();
        graph.add_node(NodeType::And, 0);
        assert!(graph.get_node(NodeId(0)).is_some());
        assert!(graph.get_node(NodeId(1)).is_none());
        assert!(graph.get_node_mut(NodeId(1)).is_none());
    }
    #[test]
    fn fields_can_be_written_through_get_node_mut() {
        let mut graph = AndOrGraph::new();
        let id = graph.add_node(NodeType::And, 0);
        if let Some(node) = graph.get_node_mut(id) {
            node.direct_cost = 12;
        }
        assert_eq!(12, graph[id].direct_cost);
    }
}
