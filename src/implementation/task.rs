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

//! This module defines the description of a delete-relaxed planning task as
//! it is consumed by the `RelaxedTaskGraph`: a set of propositions, the set of
//! propositions that are initially true, a conjunctive goal and a set of
//! operators (with preconditions, effects and cost). Delete effects are not
//! part of the description since the relaxation ignores them.
//!
//! The translation of a full planning task into this encoding is not the
//! concern of this crate. However, the `RelaxedTaskBuilder` makes it easy to
//! write such tasks by hand (or from a parser).

use metrohash::MetroHashMap;

use crate::{Cost, OperatorId, PropositionId};

/// An atomic fact of the relaxed task. Its identity is its position in
/// `RelaxedTask::propositions`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Proposition {
    pub name: String
}

/// An operator of the relaxed task: it establishes all of its `effects` as
/// soon as all its `preconditions` hold, and costs `cost`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RelaxedOperator {
    pub name         : String,
    pub cost         : Cost,
    pub preconditions: Vec<PropositionId>,
    pub effects      : Vec<PropositionId>
}

/// The complete description of a relaxed planning task
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RelaxedTask {
    pub propositions : Vec<Proposition>,
    pub initial_state: Vec<PropositionId>,
    pub goal         : Vec<PropositionId>,
    pub operators    : Vec<RelaxedOperator>
}
impl RelaxedTask {
    /// The number of propositions of the task
    pub fn nb_propositions(&self) -> usize {
        self.propositions.len()
    }
    /// The number of operators of the task
    pub fn nb_operators(&self) -> usize {
        self.operators.len()
    }
    /// Returns the operator identified by `id` (if it exists)
    pub fn operator(&self, id: OperatorId) -> Option<&RelaxedOperator> {
        self.operators.get(id.id())
    }
    /// Looks up a proposition by name
    pub fn proposition_named(&self, name: &str) -> Option<PropositionId> {
        self.propositions.iter()
            .position(|p| p.name == name)
            .map(PropositionId)
    }
}

/// A builder that assigns dense identifiers to the propositions of a task as
/// they are mentioned (by name).
///
/// # Example
/// ```
/// # use relaxed_task_graph::*;
/// let mut builder = RelaxedTaskBuilder::default();
/// builder.initial("at-a");
/// builder.goal("at-b");
/// builder.operator("move-a-b", 5, &["at-a"], &["at-b"]);
/// let task = builder.build();
///
/// assert_eq!(2, task.nb_propositions());
/// assert_eq!(vec![PropositionId(0)], task.initial_state);
/// assert_eq!(vec![PropositionId(1)], task.goal);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelaxedTaskBuilder {
    ids : MetroHashMap<String, PropositionId>,
    task: RelaxedTask
}
impl RelaxedTaskBuilder {
    /// Returns the id of the proposition having the given name. The
    /// proposition is created if it did not exist yet.
    pub fn proposition(&mut self, name: &str) -> PropositionId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = PropositionId(self.task.propositions.len());
        self.task.propositions.push(Proposition { name: name.to_string() });
        self.ids.insert(name.to_string(), id);
        id
    }
    /// Marks the named proposition as initially true
    pub fn initial(&mut self, name: &str) -> &mut Self {
        let id = self.proposition(name);
        if !self.task.initial_state.contains(&id) {
            self.task.initial_state.push(id);
        }
        self
    }
    /// Adds the named proposition to the goal
    pub fn goal(&mut self, name: &str) -> &mut Self {
        let id = self.proposition(name);
        if !self.task.goal.contains(&id) {
            self.task.goal.push(id);
        }
        self
    }
    /// Adds an operator to the task and returns its id
    pub fn operator(&mut self, name: &str, cost: Cost, preconditions: &[&str], effects: &[&str]) -> OperatorId {
        let preconditions = preconditions.iter().map(|p| self.proposition(p)).collect();
        let effects       = effects.iter().map(|p| self.proposition(p)).collect();

        let id = OperatorId(self.task.operators.len());
        self.task.operators.push(RelaxedOperator { name: name.to_string(), cost, preconditions, effects });
        id
    }
    /// Returns the task that has been described so far
    pub fn build(&self) -> RelaxedTask {
        self.task.clone()
    }
}
