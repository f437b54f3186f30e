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

//! This module provides the delete relaxation heuristics built on top of a
//! `RelaxedTaskGraph`.

use crate::{Cost, Heuristic, RelaxedTask, RelaxedTaskGraph, Result, StateTranslator};

/// The query of the relaxed task graph which is used to evaluate states
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum HeuristicKind {
    /// Only detects dead ends: the estimate is 0 for any state from which the
    /// goal is relaxed-reachable
    GoalReachability,
    /// The additive heuristic (h^add)
    #[default]
    Additive,
    /// The cost of a relaxed plan (h^FF)
    FastForward
}

/// A heuristic which evaluates each state by making it the initial state of
/// the relaxed task graph before running the configured query.
///
/// # Example
/// ```
/// # use relaxed_task_graph::*;
/// struct Facts;
/// impl StateTranslator for Facts {
///     type State = Vec<usize>;
///     fn translate(&self, state: &Vec<usize>) -> Vec<PropositionId> {
///         state.iter().copied().map(PropositionId).collect()
///     }
/// }
///
/// let mut builder = RelaxedTaskBuilder::default();
/// builder.operator("a-to-b", 5, &["a"], &["b"]);
/// builder.goal("b");
/// let task = builder.build();
///
/// let mut h = DeleteRelaxation::new(&task, Facts, HeuristicKind::Additive).unwrap();
/// assert_eq!(Ok(Some(5)), h.estimate(&vec![0]));
/// assert_eq!(Ok(Some(0)), h.estimate(&vec![0, 1]));
/// assert_eq!(Ok(None),    h.estimate(&vec![]));
/// ```
#[derive(Debug, Clone)]
pub struct DeleteRelaxation<T> {
    graph     : RelaxedTaskGraph,
    translator: T,
    kind      : HeuristicKind
}
impl <T: StateTranslator> DeleteRelaxation<T> {
    /// Builds the relaxed task graph of the given task.
    pub fn new(task: &RelaxedTask, translator: T, kind: HeuristicKind) -> Result<Self> {
        let graph = RelaxedTaskGraph::new(task)?;
        Ok(Self::from_graph(graph, translator, kind))
    }
    /// Uses an existing relaxed task graph.
    pub fn from_graph(graph: RelaxedTaskGraph, translator: T, kind: HeuristicKind) -> Self {
        DeleteRelaxation { graph, translator, kind }
    }
    /// The query used to evaluate the states
    pub fn kind(&self) -> HeuristicKind {
        self.kind
    }
    /// The underlying relaxed task graph
    pub fn graph(&self) -> &RelaxedTaskGraph {
        &self.graph
    }
}
impl <T: StateTranslator> Heuristic for DeleteRelaxation<T> {
    type State = T::State;

    fn estimate(&mut self, state: &T::State) -> Result<Option<Cost>> {
        self.graph.change_initial_state(&self.translator, state)?;
        let estimate = match self.kind {
            HeuristicKind::GoalReachability => self.graph.is_goal_reachable().then_some(0),
            HeuristicKind::Additive         => self.graph.additive_cost_of_goal(),
            HeuristicKind::FastForward      => self.graph.relaxed_plan_cost_of_goal(),
        };
        Ok(estimate)
    }
}
