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

//! This module defines the most basic data types that are used throughout all
//! the code of this library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.
//!
//! In particular, this module comprises the definition of the following types:
//! - `NodeId`
//! - `NodeType`
//! - `PropositionId`
//! - `OperatorId`
//! - `Cost` (+ the associated `INFINITE_COST` marker)

// ----------------------------------------------------------------------------
// --- COST -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The cost of an operator, and by extension, the cost estimate associated
/// with any node of an and/or graph. Costs are never negative.
pub type Cost = usize;

/// This value stands for an infinite cost. It is the value of the additive
/// cost of any node that cannot be reached from the current initial state.
/// All sums of costs saturate at this value.
pub const INFINITE_COST: Cost = Cost::MAX;

// ----------------------------------------------------------------------------
// --- NODE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This is a type safe abstraction of a node index. It serves as a
/// pseudo-pointer to fetch the information (`Node`) associated with some
/// node in an `AndOrGraph`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub usize);
impl NodeId {
    /// This function returns the id (numeric value) of the node.
    ///
    /// # Examples:
    /// ```
    /// # use relaxed_task_graph::NodeId;
    /// assert_eq!(0, NodeId(0).id());
    /// assert_eq!(7, NodeId(7).id());
    /// ```
    #[inline]
    pub fn id(self) -> usize {
        self.0
    }
}

/// The kind of a node. An AND node holds iff all of its requirements hold
/// whereas an OR node holds as soon as any one of its producers holds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeType {
    And,
    Or
}

// ----------------------------------------------------------------------------
// --- PROPOSITION ------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a proposition (an atomic fact) of the relaxed planning
/// task. Each proposition is identified with an integer ranging from 0 until
/// `task.propositions.len()`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PropositionId(pub usize);
impl PropositionId {
    /// This function returns the id (numeric value) of the proposition.
    ///
    /// # Examples:
    /// ```
    /// # use relaxed_task_graph::PropositionId;
    /// assert_eq!(0, PropositionId(0).id());
    /// assert_eq!(3, PropositionId(3).id());
    /// ```
    #[inline]
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- OPERATOR ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes an operator of the relaxed planning task, identified by
/// its position in `task.operators`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct OperatorId(pub usize);
impl OperatorId {
    /// This function returns the id (numeric value) of the operator.
    #[inline]
    pub fn id(self) -> usize {
        self.0
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
