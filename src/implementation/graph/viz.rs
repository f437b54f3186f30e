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

//! This module lets you render an and/or graph (along with the outcome of the
//! last valuation) as a graphviz 'dot' string. This is mostly useful when
//! debugging a task encoding.

use derive_builder::Builder;

use crate::{AndOrGraph, Node, NodeId, NodeType, INFINITE_COST};

/// This is how you configure the output visualisation e.g.
/// if you want to see the costs and the nodes that are unreachable
#[derive(Debug, Clone, Builder)]
pub struct VizConfig {
    /// This flag must be true (default) if you want to see the additive cost
    /// of each node
    #[builder(default="true")]
    show_costs: bool,
    /// This flag must be true (default) if you want to see the nodes that
    /// were not reached by the last weighted valuation
    #[builder(default="true")]
    show_unreachable: bool,
    /// This flag must be true (default) if you want the edge from each OR
    /// node to its best producer to be drawn in bold
    #[builder(default="true")]
    highlight_best_producers: bool,
}

impl AndOrGraph {
    /// This is the method you will want to use in order to create the output
    /// image you would like. The output is a string of (not compiled) 'dot'.
    pub fn as_graphviz(&self, config: &VizConfig) -> String {
        let mut out = String::new();
        out.push_str("digraph {\n\trankdir = BT;\n\n");

        for (id, node) in self.nodes() {
            if Self::is_shown(node, config) {
                out.push_str(&Self::node_line(id, node, config));
            }
        }
        out.push('\n');
        for (id, node) in self.nodes() {
            if !Self::is_shown(node, config) {
                continue;
            }
            for succ in node.successors().iter().copied() {
                if Self::is_shown(&self[succ], config) {
                    out.push_str(&Self::edge_line(id, succ, node, config));
                }
            }
        }
        out.push_str("}\n");
        out
    }

    fn is_shown(node: &Node, config: &VizConfig) -> bool {
        config.show_unreachable || node.is_reachable()
    }
    fn node_line(id: NodeId, node: &Node, config: &VizConfig) -> String {
        let (shape, kind) = match node.node_type() {
            NodeType::And => ("box",     "and"),
            NodeType::Or  => ("ellipse", "or"),
        };
        let mut label = format!("{} #{}", kind, id.id());
        if node.direct_cost > 0 {
            label.push_str(&format!("\\ndirect: {}", node.direct_cost));
        }
        if config.show_costs {
            if node.additive_cost == INFINITE_COST {
                label.push_str("\\ncost: inf");
            } else {
                label.push_str(&format!("\\ncost: {}", node.additive_cost));
            }
        }
        format!("\t{} [shape = {}, label = \"{}\"];\n", id.id(), shape, label)
    }
    fn edge_line(from: NodeId, to: NodeId, node: &Node, config: &VizConfig) -> String {
        if config.highlight_best_producers && node.best_producer() == Some(to) {
            format!("\t{} -> {} [style = bold];\n", from.id(), to.id())
        } else {
            format!("\t{} -> {};\n", from.id(), to.id())
        }
    }
}
