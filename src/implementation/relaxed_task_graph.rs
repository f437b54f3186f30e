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

//! This module provides the `RelaxedTaskGraph`: the and/or graph encoding of
//! a delete-relaxed planning task along with the three queries that are built
//! on top of its valuations (relaxed reachability of the goal, additive cost
//! of the goal and cost of a relaxed plan).
//!
//! The graph comprises:
//! - one OR node per proposition,
//! - one AND node standing for the initial state (it has no requirement and
//!   is a producer of every proposition that currently holds initially),
//! - one AND node standing for the goal (it requires all goal propositions),
//! - for each operator, one AND node requiring its preconditions and one AND
//!   node (carrying the operator cost) which requires the former and produces
//!   all the operator effects.
//!
//! The graph is built once. Afterwards, the only edges that ever change are
//! those connecting the initial state node to the propositions; which makes
//! it cheap to evaluate the same relaxed task from many different states.

use std::collections::VecDeque;

use bitset_fixed::BitSet;
use tracing::{debug, trace};

use crate::{AndOrGraph, Cost, Error, NodeId, NodeType, OperatorId, PropositionId, RelaxedTask, Result, StateTranslator};

/// The and/or graph of a relaxed task. It exclusively owns the graph it
/// evaluates, and every query recomputes the valuation it relies on: no
/// value is ever served from a stale valuation.
///
/// # Example
/// ```
/// # use relaxed_task_graph::*;
/// let mut builder = RelaxedTaskBuilder::default();
/// builder.initial("a").goal("c");
/// builder.operator("a-to-b", 2, &["a"], &["b"]);
/// builder.operator("b-to-c", 3, &["b"], &["c"]);
///
/// let mut graph = RelaxedTaskGraph::new(&builder.build()).unwrap();
/// assert!(graph.is_goal_reachable());
/// assert_eq!(Some(5), graph.additive_cost_of_goal());
/// assert_eq!(Some(5), graph.relaxed_plan_cost_of_goal());
///
/// // evaluate the same task from the state where only `b` holds
/// let b = PropositionId(2);
/// graph.update_initial_state(&[b]).unwrap();
/// assert_eq!(Some(3), graph.additive_cost_of_goal());
/// ```
#[derive(Debug, Clone)]
pub struct RelaxedTaskGraph {
    /// The underlying and/or graph
    graph: AndOrGraph,
    /// The OR node of each proposition
    proposition_nodes: Vec<NodeId>,
    /// The node standing for the current initial state
    initial_node: NodeId,
    /// The node standing for the goal
    goal_node: NodeId,
    /// The node of each operator that carries its cost
    fired_nodes: Vec<NodeId>,
    /// The propositions which currently hold in the initial state
    initial_state: Vec<PropositionId>
}
impl RelaxedTaskGraph {
    /// Builds the graph of the given task.
    ///
    /// # Errors
    /// The construction fails with `Error::NoSuchProposition` if the initial
    /// state, the goal or any operator references a proposition which is not
    /// part of the task.
    pub fn new(task: &RelaxedTask) -> Result<Self> {
        let nb_props = task.nb_propositions();
        check_propositions(nb_props, &task.initial_state, || "the initial state".to_string())?;
        check_propositions(nb_props, &task.goal, || "the goal".to_string())?;
        for op in task.operators.iter() {
            check_propositions(nb_props, &op.preconditions, || format!("the preconditions of operator '{}'", op.name))?;
            check_propositions(nb_props, &op.effects, || format!("the effects of operator '{}'", op.name))?;
        }

        let mut graph         = AndOrGraph::new();
        let proposition_nodes = (0..nb_props).map(|_| graph.add_node(NodeType::Or, 0)).collect::<Vec<_>>();

        let initial_node = graph.add_node(NodeType::And, 0);
        for p in task.initial_state.iter() {
            graph.add_edge(proposition_nodes[p.id()], initial_node)?;
        }

        let goal_node = graph.add_node(NodeType::And, 0);
        for p in task.goal.iter() {
            graph.add_edge(goal_node, proposition_nodes[p.id()])?;
        }

        let mut fired_nodes = Vec::with_capacity(task.nb_operators());
        for op in task.operators.iter() {
            let precondition = graph.add_node(NodeType::And, 0);
            for p in op.preconditions.iter() {
                graph.add_edge(precondition, proposition_nodes[p.id()])?;
            }
            let fired = graph.add_node(NodeType::And, op.cost);
            graph.add_edge(fired, precondition)?;
            for p in op.effects.iter() {
                graph.add_edge(proposition_nodes[p.id()], fired)?;
            }
            fired_nodes.push(fired);
        }

        debug!(
            nb_propositions = nb_props,
            nb_operators    = task.nb_operators(),
            nb_nodes        = graph.nb_nodes(),
            nb_edges        = graph.nb_edges(),
            "relaxed task graph built");

        Ok(RelaxedTaskGraph {
            graph,
            proposition_nodes,
            initial_node,
            goal_node,
            fired_nodes,
            initial_state: task.initial_state.clone()
        })
    }

    /// Replaces the current initial state with the exact set of propositions
    /// given in `state`: the initial state node stops producing the
    /// propositions of the former initial state and starts producing those of
    /// the new one. The previously computed valuations are meaningless until
    /// the next query.
    ///
    /// # Errors
    /// Fails with `Error::NoSuchProposition` (leaving the graph untouched) if
    /// `state` references an unknown proposition.
    pub fn update_initial_state(&mut self, state: &[PropositionId]) -> Result<()> {
        check_propositions(self.proposition_nodes.len(), state, || "the initial state".to_string())?;

        for p in self.initial_state.iter() {
            self.graph.remove_edge(self.proposition_nodes[p.id()], self.initial_node)?;
        }
        for p in state.iter() {
            self.graph.add_edge(self.proposition_nodes[p.id()], self.initial_node)?;
        }
        self.initial_state = state.to_vec();

        trace!(nb_true = self.initial_state.len(), "initial state updated");
        Ok(())
    }
    /// Uses the `translator` to derive the set of propositions which hold in
    /// `state` and makes it the new initial state.
    pub fn change_initial_state<T: StateTranslator>(&mut self, translator: &T, state: &T::State) -> Result<()> {
        let propositions = translator.translate(state);
        self.update_initial_state(&propositions)
    }

    /// Returns true iff the goal is reachable from the current initial state
    /// when the delete effects are ignored.
    pub fn is_goal_reachable(&mut self) -> bool {
        self.graph.most_conservative_valuation();
        self.graph[self.goal_node].forced_true
    }
    /// Returns the additive cost (h^add) of the goal from the current initial
    /// state or None when the goal is unreachable.
    ///
    /// # Note:
    /// This value overestimates the cost of the cheapest relaxed plan because
    /// the cost of a shared precondition is paid once per requirement.
    pub fn additive_cost_of_goal(&mut self) -> Option<Cost> {
        self.graph.weighted_most_conservative_valuation();
        let goal = &self.graph[self.goal_node];
        if goal.is_reachable() {
            Some(goal.additive_cost)
        } else {
            None
        }
    }
    /// Returns the cost (h^FF) of the relaxed plan extracted from the best
    /// producers of the additive valuation, or None when the goal is
    /// unreachable. It never exceeds the additive cost of the goal since each
    /// operator of the relaxed plan is paid for only once.
    pub fn relaxed_plan_cost_of_goal(&mut self) -> Option<Cost> {
        self.graph.weighted_most_conservative_valuation();
        self.relaxed_plan_nodes().map(|visited| {
            self.graph.nodes()
                .filter(|(id, _)| visited[id.id()])
                .fold(0, |total: Cost, (_, node)| total.saturating_add(node.direct_cost))
        })
    }
    /// Returns the operators of the relaxed plan extracted from the best
    /// producers of the additive valuation (ordered by id) or None when the
    /// goal is unreachable. The sum of their costs is the value returned by
    /// `relaxed_plan_cost_of_goal`.
    pub fn relaxed_plan(&mut self) -> Option<Vec<OperatorId>> {
        self.graph.weighted_most_conservative_valuation();
        self.relaxed_plan_nodes().map(|visited| {
            self.fired_nodes.iter().enumerate()
                .filter(|(_, fired)| visited[fired.id()])
                .map(|(op, _)| OperatorId(op))
                .collect()
        })
    }

    /// The underlying and/or graph (along with its last valuation)
    pub fn graph(&self) -> &AndOrGraph {
        &self.graph
    }
    /// The propositions that currently hold in the initial state
    pub fn initial_state(&self) -> &[PropositionId] {
        &self.initial_state
    }
    /// The node standing for the initial state
    pub fn initial_node(&self) -> NodeId {
        self.initial_node
    }
    /// The node standing for the goal
    pub fn goal_node(&self) -> NodeId {
        self.goal_node
    }
    /// The OR node of the given proposition (if it exists)
    pub fn proposition_node(&self, p: PropositionId) -> Option<NodeId> {
        self.proposition_nodes.get(p.id()).copied()
    }
    /// The node carrying the cost of the given operator (if it exists)
    pub fn fired_node(&self, op: OperatorId) -> Option<NodeId> {
        self.fired_nodes.get(op.id()).copied()
    }

    /// Walks backwards from the goal: all requirements of the AND nodes are
    /// visited, but only the best producer of each OR node. Returns the set
    /// of visited nodes, or None if the goal is unreachable.
    ///
    /// This assumes a fresh weighted valuation.
    fn relaxed_plan_nodes(&self) -> Option<BitSet> {
        if !self.graph[self.goal_node].is_reachable() {
            return None;
        }

        let mut visited = BitSet::new(self.graph.nb_nodes());
        let mut queue   = VecDeque::new();
        visited.set(self.goal_node.id(), true);
        queue.push_back(self.goal_node);

        while let Some(current) = queue.pop_front() {
            let node = &self.graph[current];
            let best = node.best_producer();
            let next: &[NodeId] = match (node.node_type(), &best) {
                (NodeType::And, _)       => node.requirements(),
                (NodeType::Or, Some(id)) => std::slice::from_ref(id),
                (NodeType::Or, None)     => &[],
            };
            for n in next.iter().copied() {
                if !visited[n.id()] {
                    visited.set(n.id(), true);
                    queue.push_back(n);
                }
            }
        }
        Some(visited)
    }
}

/// Makes sure all the given propositions belong to a task having `nb_props`
/// propositions.
fn check_propositions<F>(nb_props: usize, props: &[PropositionId], context: F) -> Result<()>
    where F: Fn() -> String
{
    match props.iter().find(|p| p.id() >= nb_props) {
        None    => Ok(()),
        Some(p) => Err(Error::NoSuchProposition { proposition: *p, context: context() })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
