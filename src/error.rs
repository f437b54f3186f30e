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

//! This module defines the errors that may be raised while building or
//! updating an and/or graph. Note that an unreachable goal is *not* an error:
//! it is reported through the valuations as an infinite cost.

use thiserror::Error;

use crate::{NodeId, PropositionId};

/// The errors related to the graph management
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Error {
    /// Occurs when one tries to add or remove an edge that involves a node
    /// which does not exist in the graph.
    #[error("no such node: {0:?}")]
    NoSuchNode(NodeId),
    /// Occurs when a relaxed task references a proposition that lies outside
    /// of the range of known propositions.
    #[error("no such proposition: {proposition:?} (referenced by {context})")]
    NoSuchProposition {
        proposition: PropositionId,
        context: String
    }
}

/// The result type used throughout this crate
pub type Result<T> = std::result::Result<T, Error>;
