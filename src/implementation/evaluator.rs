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

//! This module provides the implementation of a parallel evaluator. That is,
//! a structure which evaluates a batch of states with as many threads as
//! requested. Each thread works on its own copy of the relaxed task graph, so
//! that the outcome is exactly the same as that of a sequential evaluation.
//! By default, it uses as many threads as the number of hardware threads
//! available on the machine.

use derive_builder::Builder;
use parking_lot::Mutex;
use tracing::debug;

use crate::{Cost, DeleteRelaxation, Error, Heuristic, HeuristicKind, RelaxedTask, RelaxedTaskGraph, Result, StateTranslator};

/// The configuration of a `ParallelEvaluator`
#[derive(Debug, Clone, Builder)]
pub struct EvaluatorConfig {
    /// The query used to evaluate each state (defaults to `Additive`)
    #[builder(default)]
    kind: HeuristicKind,
    /// The number of threads spawned to evaluate a batch (defaults to the
    /// number of hardware threads)
    #[builder(default="num_cpus::get()")]
    nb_threads: usize
}
impl EvaluatorConfig {
    /// The query used to evaluate each state
    pub fn kind(&self) -> HeuristicKind {
        self.kind
    }
    /// The number of threads spawned to evaluate a batch
    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }
}

/// The shared data that may only be manipulated within critical sections
struct Critical {
    /// The position of the next state to evaluate
    next: usize,
    /// The estimate of each state, in the order of the batch
    estimates: Vec<Option<Cost>>,
    /// The first error that occurred (it stops the whole batch)
    error: Option<Error>
}
/// The workload a thread can get from the shared state
enum WorkLoad {
    /// There is no work left to be done: you can safely terminate
    Complete,
    /// The position of the state to evaluate
    WorkItem(usize)
}

/// Evaluates batches of states against one relaxed task.
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
///
/// let config    = EvaluatorConfigBuilder::default().nb_threads(2).build().unwrap();
/// let evaluator = ParallelEvaluator::new(&builder.build(), Facts, config).unwrap();
/// let estimates = evaluator.evaluate_all(&[vec![0], vec![], vec![1]]).unwrap();
/// assert_eq!(vec![Some(5), None, Some(0)], estimates);
/// ```
pub struct ParallelEvaluator<T> {
    graph     : RelaxedTaskGraph,
    translator: T,
    config    : EvaluatorConfig
}
impl <T> ParallelEvaluator<T>
    where T: StateTranslator + Sync,
          T::State: Sync
{
    /// Builds the relaxed task graph of the given task once and for all.
    pub fn new(task: &RelaxedTask, translator: T, config: EvaluatorConfig) -> Result<Self> {
        Ok(ParallelEvaluator { graph: RelaxedTaskGraph::new(task)?, translator, config })
    }
    /// The configuration of this evaluator
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }
    /// Evaluates all the given states and returns their estimates in the same
    /// order. The evaluation stops at the first state which cannot be mapped
    /// onto the task, and that error is returned.
    pub fn evaluate_all(&self, states: &[T::State]) -> Result<Vec<Option<Cost>>> {
        let nb_threads = self.config.nb_threads.clamp(1, states.len().max(1));
        debug!(nb_states = states.len(), nb_threads, kind = ?self.config.kind, "batch evaluation started");

        let critical = Mutex::new(Critical { next: 0, estimates: vec![None; states.len()], error: None });
        std::thread::scope(|s| {
            for _ in 0..nb_threads {
                let critical = &critical;
                s.spawn(move || {
                    let mut heuristic = DeleteRelaxation::from_graph(self.graph.clone(), &self.translator, self.config.kind);
                    while let WorkLoad::WorkItem(i) = Self::get_workload(critical, states.len()) {
                        let outcome = heuristic.estimate(&states[i]);
                        let mut critical = critical.lock();
                        match outcome {
                            Ok(estimate) => critical.estimates[i] = estimate,
                            Err(error)   => { critical.error.get_or_insert(error); }
                        }
                    }
                });
            }
        });

        let critical = critical.into_inner();
        debug!(nb_states = states.len(), failed = critical.error.is_some(), "batch evaluation done");
        match critical.error {
            Some(error) => Err(error),
            None        => Ok(critical.estimates)
        }
    }

    fn get_workload(critical: &Mutex<Critical>, nb_states: usize) -> WorkLoad {
        let mut critical = critical.lock();
        if critical.error.is_some() || critical.next >= nb_states {
            return WorkLoad::Complete;
        }
        let i = critical.next;
        critical.next += 1;
        WorkLoad::WorkItem(i)
    }
}
