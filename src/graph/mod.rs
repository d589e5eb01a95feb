//! Adjacency-set node graph.
//!
//! This module provides [`Graph`], a directed-or-undirected node graph over
//! per-node adjacency sets, addressed by [`GraphNodeId`] handles. It is a
//! sibling of the [`chain`](crate::chain) module with no coupling to it:
//! plain membership CRUD plus connectivity queries, with none of the
//! aliasing subtleties of the chain algorithms.
//!
//! # Examples
//!
//! ```rust
//! use relink::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//!
//! graph.connect(a, b, true);
//! assert!(graph.are_connected(a, b, true));
//!
//! graph.remove(a);
//! assert!(!graph.are_connected(a, b, false));
//! ```

mod node_graph;

pub use node_graph::Graph;
pub use node_graph::GraphNodeId;
