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

//! This module provides some utilities to write unit tests, the most notable
//! of which are the small relaxed tasks which are used throughout the tests
//! of this library.
#![cfg(test)]

use crate::{RelaxedTask, RelaxedTaskBuilder, StateTranslator, PropositionId};

/// `p` is both initially true and the goal. There is no operator.
pub fn single_fact_task() -> RelaxedTask {
    let mut builder = RelaxedTaskBuilder::default();
    builder.initial("p").goal("p");
    builder.build()
}

/// `a` is initially true, `b` is the goal and one operator of cost 5 derives
/// `b` from `a`.
pub fn one_step_task() -> RelaxedTask {
    let mut builder = RelaxedTaskBuilder::default();
    builder.initial("a").goal("b");
    builder.operator("a-to-b", 5, &["a"], &["b"]);
    builder.build()
}

/// The goal `c` is produced by no operator at all.
pub fn unreachable_goal_task() -> RelaxedTask {
    let mut builder = RelaxedTaskBuilder::default();
    builder.initial("a").goal("c");
    builder.operator("a-to-b", 1, &["a"], &["b"]);
    builder.build()
}

/// Two operators (costing 3 and 4) produce `x` from the initial fact `i`.
/// The goal requires `y` and `z` which are produced by two different
/// operators (costing 1 each) that both require `x`.
///
/// Propositions: i=0, x=1, y=2, z=3
/// Operators   : x-cheap=0, x-costly=1, x-to-y=2, x-to-z=3
pub fn shared_subgoal_task() -> RelaxedTask {
    let mut builder = RelaxedTaskBuilder::default();
    builder.initial("i");
    builder.operator("x-cheap",  3, &["i"], &["x"]);
    builder.operator("x-costly", 4, &["i"], &["x"]);
    builder.operator("x-to-y",   1, &["x"], &["y"]);
    builder.operator("x-to-z",   1, &["x"], &["z"]);
    builder.goal("y").goal("z");
    builder.build()
}

/// A translator for tests where the states already are sets of propositions
#[derive(Debug, Default, Copy, Clone)]
pub struct Identity;
impl StateTranslator for Identity {
    type State = Vec<PropositionId>;

    fn translate(&self, state: &Vec<PropositionId>) -> Vec<PropositionId> {
        state.clone()
    }
}
