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

//! # Relaxed Task Graph
//! This crate computes the classical delete relaxation heuristics of
//! automated planning on an and/or dependency graph. Given a STRIPS-like
//! relaxed task (propositions, initially true propositions, a conjunctive
//! goal and operators with preconditions, effects and cost), it answers three
//! questions:
//!
//! - is the goal reachable when delete effects are ignored ?
//! - what is the additive cost (h^add) of the goal ?
//! - what is the cost of a relaxed plan (h^FF) for the goal ?
//!
//! The graph is built once per task; evaluating the task from another state
//! only swaps the edges of the node standing for the initial state. This is
//! what makes it suitable to evaluate each and every state expanded by a
//! search algorithm.
//!
//! ## Quick Example
//! ```
//! # use relaxed_task_graph::*;
//! // 1. Describe the relaxed task
//! let mut builder = RelaxedTaskBuilder::default();
//! builder.initial("i");
//! builder.operator("x-cheap",  3, &["i"], &["x"]);
//! builder.operator("x-costly", 4, &["i"], &["x"]);
//! builder.operator("x-to-y",   1, &["x"], &["y"]);
//! builder.operator("x-to-z",   1, &["x"], &["z"]);
//! builder.goal("y").goal("z");
//! let task = builder.build();
//!
//! // 2. Build its and/or graph
//! let mut graph = RelaxedTaskGraph::new(&task).unwrap();
//!
//! // 3. Query it
//! assert!(graph.is_goal_reachable());
//! // x is paid for twice (once for y, once for z)
//! assert_eq!(Some(8), graph.additive_cost_of_goal());
//! // whereas it is paid for only once in the relaxed plan
//! assert_eq!(Some(5), graph.relaxed_plan_cost_of_goal());
//! assert_eq!(Some(vec![OperatorId(0), OperatorId(2), OperatorId(3)]), graph.relaxed_plan());
//!
//! // 4. Evaluate the task from an other state
//! let x = task.proposition_named("x").unwrap();
//! graph.update_initial_state(&[x]).unwrap();
//! assert_eq!(Some(2), graph.additive_cost_of_goal());
//! ```
//!
//! ## Going further
//! The `AndOrGraph` is a standalone engine: it knows nothing about planning
//! and can be used to compute the valuations of any and/or graph. The
//! `Heuristic` and `StateTranslator` traits are the seams through which a
//! search algorithm plugs in the heuristics (see `DeleteRelaxation`) and the
//! `ParallelEvaluator` evaluates batches of states on all available cores.

mod common;
mod error;
mod abstraction;
mod implementation;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;

#[cfg(test)]
mod test_utils;
