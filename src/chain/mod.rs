//! Singly-linked chains over an arena of nodes.
//!
//! This module provides the node primitive and the algorithm suite:
//!
//! - [`ChainArena`]: arena owning the nodes; chains are sequences of
//!   [`NodeId`] handles connected through `next` links
//! - [`remove_duplicates`]: in-place deduplication preserving first
//!   occurrences
//! - [`kth_to_last`]: order-statistic selection from the end
//! - [`delete_middle`]: node removal given only the node's own handle
//! - [`partition`] / [`partition_in_place`]: stable pivot partitioning
//! - [`sum_little_endian`] / [`sum_big_endian`]: digit-chain arithmetic
//! - [`is_palindrome`]: destructive palindrome check
//! - [`intersects`] / [`intersects_lockstep`]: identity-based intersection
//! - [`detect_cycle`] / [`detect_cycle_floyd`]: cycle-entry detection
//!
//! # Identity and Value
//!
//! Two distinct nodes may hold equal values. Operations that compare
//! *values* (deduplication, palindrome, partition) take `T: PartialEq` or
//! `T: PartialOrd`; operations that compare *identity* (intersection, cycle
//! detection) compare [`NodeId`] handles and place no bound on the payload.
//! The distinction is part of each operation's contract.
//!
//! # Destructive and Pure Operations
//!
//! Operations that splice or rewrite links take `&mut ChainArena<T>` and
//! consume the caller's view of the input chain; purely inspecting
//! operations take `&ChainArena<T>`. The receiver mode is the contract:
//! after calling a `&mut` operation the input chain must be considered
//! replaced by whatever the operation returns.
//!
//! # Cyclic Input
//!
//! A chain is well-formed when it is finite and acyclic. Feeding a cyclic
//! chain to any operation other than the intersection and cycle-detection
//! family does not terminate; this is a documented precondition, not a
//! guarded error. [`ChainArena::try_chain_len`] is the bounded-step screen
//! for callers that cannot trust their input.
//!
//! # Examples
//!
//! ```rust
//! use relink::chain::{ChainArena, kth_to_last};
//!
//! let mut arena = ChainArena::new();
//! let head = arena.chain_from_iter([1, 2, 3, 4, 5]).unwrap();
//! let node = kth_to_last(&arena, head, 2).unwrap();
//! assert_eq!(arena.value(node), &4);
//! ```

mod algo;
mod arena;
mod error;

pub use algo::delete_middle;
pub use algo::detect_cycle;
pub use algo::detect_cycle_floyd;
pub use algo::intersects;
pub use algo::intersects_lockstep;
pub use algo::is_palindrome;
pub use algo::kth_to_last;
pub use algo::partition;
pub use algo::partition_in_place;
pub use algo::remove_duplicates;
pub use algo::sum_big_endian;
pub use algo::sum_little_endian;
pub use arena::ChainArena;
pub use arena::NodeId;
pub use arena::NodeIter;
pub use arena::ValueIter;
pub use error::ChainError;
pub use error::IndexNotFound;
pub use error::StepLimitExceeded;
