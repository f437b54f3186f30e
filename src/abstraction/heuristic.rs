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

//! This module defines the `Heuristic` trait, that is the interface through
//! which a search algorithm evaluates the states it expands.

use crate::{Cost, Result};

/// A heuristic estimates the cost of reaching the goal from a given state.
///
/// # Note:
/// The estimate is `Ok(None)` when the heuristic proves that the goal cannot
/// be reached from the given state: the search should prune that state. This
/// is not an error. An error denotes a malformed input (i.e. a state that
/// cannot be mapped onto the task).
///
/// The evaluation takes `&mut self` because delete relaxation heuristics
/// update an internal graph in place to avoid rebuilding it at each state.
pub trait Heuristic {
    /// The type of the states which are evaluated
    type State;

    /// Returns an estimate of the cost to reach the goal from `state` or
    /// `None` if the goal is unreachable from there.
    fn estimate(&mut self, state: &Self::State) -> Result<Option<Cost>>;
}
