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

//! This module defines the `StateTranslator` trait.

use crate::PropositionId;

/// A state translator maps the concrete states of a planning task onto the
/// set of propositions that hold in the relaxed encoding of these states.
/// It is the collaborator that turns the states visited by a search into
/// initial states of the relaxed task.
///
/// # Example
/// ```
/// # use relaxed_task_graph::*;
/// /// A state where each variable is assigned a value, encoded with one
/// /// proposition per (variable, value) pair.
/// struct FactPairs { domain_size: usize }
/// impl StateTranslator for FactPairs {
///     type State = Vec<usize>;
///
///     fn translate(&self, state: &Vec<usize>) -> Vec<PropositionId> {
///         state.iter().enumerate()
///             .map(|(var, val)| PropositionId(var * self.domain_size + val))
///             .collect()
///     }
/// }
///
/// let translator = FactPairs { domain_size: 3 };
/// assert_eq!(vec![PropositionId(2), PropositionId(3)], translator.translate(&vec![2, 0]));
/// ```
pub trait StateTranslator {
    /// The type of the concrete states
    type State;

    /// Returns the exact set of relaxed propositions that hold in `state`.
    fn translate(&self, state: &Self::State) -> Vec<PropositionId>;
}

/// A reference to a translator is a translator too. This lets several
/// heuristics share one single translator.
impl <T: StateTranslator + ?Sized> StateTranslator for &T {
    type State = T::State;

    fn translate(&self, state: &Self::State) -> Vec<PropositionId> {
        (**self).translate(state)
    }
}
