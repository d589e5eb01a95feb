//! Graph storage: node slots, registration, and adjacency sets.

use std::collections::HashSet;
use std::fmt;

use static_assertions::assert_impl_all;

/// A stable handle identifying one node inside a [`Graph`].
///
/// Handles are only meaningful for the graph that issued them; equality is
/// node identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphNodeId(usize);

assert_impl_all!(GraphNodeId: Copy, Send, Sync);

impl fmt::Debug for GraphNodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "GraphNodeId({})", self.0)
    }
}

/// Internal slot storing one node's payload, registration flag, and
/// successor set.
#[derive(Debug, Clone)]
struct GraphSlot<T> {
    value: T,
    /// Whether the node currently belongs to the graph. Removal clears the
    /// flag but keeps the slot, so stale handles stay resolvable.
    registered: bool,
    neighbors: HashSet<GraphNodeId>,
}

/// A node graph over adjacency sets.
///
/// Edges are directed at the storage level (each node keeps a set of
/// successor handles); the `both_ways` flag on [`connect`],
/// [`disconnect`], and [`are_connected`] provides the undirected view.
///
/// [`connect`]: Graph::connect
/// [`disconnect`]: Graph::disconnect
/// [`are_connected`]: Graph::are_connected
///
/// # Examples
///
/// ```rust
/// use relink::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node(1);
/// let b = graph.add_node(2);
/// let c = graph.add_node(3);
///
/// graph.connect(a, b, false);
/// graph.connect(b, c, true);
///
/// assert!(graph.are_connected(a, b, false));
/// assert!(!graph.are_connected(a, b, true));
/// assert!(graph.are_connected(b, c, true));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T> {
    slots: Vec<GraphSlot<T>>,
}

impl<T> Graph<T> {
    /// Creates a new empty graph.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Allocates a node holding `value`, registers it, and returns its
    /// handle.
    pub fn add_node(&mut self, value: T) -> GraphNodeId {
        let id = GraphNodeId(self.slots.len());
        self.slots.push(GraphSlot {
            value,
            registered: true,
            neighbors: HashSet::new(),
        });
        id
    }

    /// Returns `true` if the node is currently registered in the graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: GraphNodeId) -> bool {
        self.slots[id.0].registered
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.registered).count()
    }

    /// Returns an iterator over the handles of every registered node.
    pub fn node_ids(&self) -> impl Iterator<Item = GraphNodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.registered)
            .map(|(index, _)| GraphNodeId(index))
    }

    /// Returns a reference to the node's payload.
    ///
    /// The payload survives removal from the graph; a stale handle still
    /// resolves to the value it held.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    #[inline]
    #[must_use]
    pub fn value(&self, id: GraphNodeId) -> &T {
        &self.slots[id.0].value
    }

    /// Returns a mutable reference to the node's payload.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    #[inline]
    pub fn value_mut(&mut self, id: GraphNodeId) -> &mut T {
        &mut self.slots[id.0].value
    }

    /// Returns an iterator over the node's successor handles.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn neighbors(&self, id: GraphNodeId) -> impl Iterator<Item = GraphNodeId> + '_ {
        self.slots[id.0].neighbors.iter().copied()
    }

    /// Unregisters the node and severs every edge touching it, in both
    /// directions.
    ///
    /// The slot itself is retained so stale handles remain resolvable
    /// through [`value`]; re-registration happens implicitly if a later
    /// [`connect`] targets the node.
    ///
    /// [`value`]: Graph::value
    /// [`connect`]: Graph::connect
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn remove(&mut self, id: GraphNodeId) {
        self.slots[id.0].registered = false;
        self.slots[id.0].neighbors.clear();
        for slot in &mut self.slots {
            slot.neighbors.remove(&id);
        }
    }

    /// Adds the edge a→b, and b→a as well when `both_ways` is set.
    ///
    /// An unregistered target is re-registered by connecting to it, so an
    /// edge never dangles at an absent node.
    ///
    /// # Panics
    ///
    /// Panics if either handle was not issued by this graph.
    pub fn connect(&mut self, a: GraphNodeId, b: GraphNodeId, both_ways: bool) {
        self.slots[a.0].neighbors.insert(b);
        self.slots[b.0].registered = true;
        if both_ways {
            self.connect(b, a, false);
        }
    }

    /// Removes the edge a→b, and b→a as well when `both_ways` is set.
    ///
    /// Removing an absent edge is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if either handle was not issued by this graph.
    pub fn disconnect(&mut self, a: GraphNodeId, b: GraphNodeId, both_ways: bool) {
        self.slots[a.0].neighbors.remove(&b);
        if both_ways {
            self.disconnect(b, a, false);
        }
    }

    /// Reports whether `a` and `b` are connected.
    ///
    /// With `both_ways` set, both directed edges must exist. Without it,
    /// **either** direction satisfies the query — a one-way check answers
    /// "is there any edge between these two nodes", not "does a→b exist";
    /// check [`neighbors`] for strict direction.
    ///
    /// [`neighbors`]: Graph::neighbors
    ///
    /// # Panics
    ///
    /// Panics if either handle was not issued by this graph.
    #[must_use]
    pub fn are_connected(&self, a: GraphNodeId, b: GraphNodeId, both_ways: bool) -> bool {
        let forward = self.slots[a.0].neighbors.contains(&b);
        let backward = self.slots[b.0].neighbors.contains(&a);
        if both_ways {
            forward && backward
        } else {
            forward || backward
        }
    }
}

impl<T> Default for Graph<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
