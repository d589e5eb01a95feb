//! The singly-linked-list algorithm suite.
//!
//! Nine independent operations over chains of arena nodes. There is no
//! shared state between them; each takes one or two chain heads and returns
//! a transformed head, a located node, or a boolean.
//!
//! # Contract Summary
//!
//! | Operation | Mutates chain | Compares | Cyclic input |
//! |-----------|---------------|----------|--------------|
//! | [`remove_duplicates`] | yes (splices) | value | not supported |
//! | [`kth_to_last`] | no | — | not supported |
//! | [`delete_middle`] | yes (shifts values) | — | not supported |
//! | [`partition`] / [`partition_in_place`] | yes (relinks) | value | not supported |
//! | [`sum_little_endian`] / [`sum_big_endian`] | no (allocates) | — | not supported |
//! | [`is_palindrome`] | yes (reverses prefix) | value | not supported |
//! | [`intersects`] / [`intersects_lockstep`] | no | identity | shared suffixes only |
//! | [`detect_cycle`] / [`detect_cycle_floyd`] | no | identity | supported |
//!
//! "Not supported" means the operation does not terminate on a cyclic
//! chain; screen untrusted input with
//! [`ChainArena::try_chain_len`](crate::chain::ChainArena::try_chain_len)
//! first.

use smallvec::SmallVec;

use crate::chain::arena::{ChainArena, NodeId};
use crate::chain::error::IndexNotFound;

/// Removes every node whose value equals an earlier node's value,
/// preserving first occurrences and the relative order of survivors.
///
/// For each anchor node the remainder of the chain is scanned, and any
/// successor holding the anchor's value is spliced out. The head never
/// moves; the (unchanged) head is returned for call-chaining symmetry with
/// the other destructive operations.
///
/// # Known Limitation
///
/// The anchor scan breaks upon reaching the penultimate node, so neither
/// the last node nor the one before it ever acts as an anchor. A duplicate
/// of the final element therefore survives when no earlier anchor catches
/// it: `[2, 1, 1, 3, 1]` fully collapses to `[2, 1, 3]`, but `[1, 1]` is
/// left untouched. Callers needing exhaustive deduplication must not rely
/// on the final element being unique.
///
/// # Preconditions
///
/// The chain must be acyclic; on a cyclic chain this operation does not
/// terminate.
///
/// # Complexity
///
/// O(n²) time, O(1) extra space.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, remove_duplicates};
///
/// let mut arena = ChainArena::new();
/// let head = arena.chain_from_iter([2, 1, 1, 3, 1]).unwrap();
/// let head = remove_duplicates(&mut arena, head);
/// assert_eq!(arena.collect_values(head), vec![2, 1, 3]);
///
/// // The documented limitation: a trailing duplicate with no anchor
/// // before the penultimate node survives.
/// let pair = arena.chain_from_iter([1, 1]).unwrap();
/// let pair = remove_duplicates(&mut arena, pair);
/// assert_eq!(arena.collect_values(pair), vec![1, 1]);
/// ```
pub fn remove_duplicates<T: PartialEq>(arena: &mut ChainArena<T>, head: NodeId) -> NodeId {
    let mut anchor = Some(head);
    while let Some(node) = anchor {
        // The scan ends one node before the true end: anchoring stops as
        // soon as fewer than two nodes follow.
        let Some(first_following) = arena.next(node) else {
            break;
        };
        if arena.next(first_following).is_none() {
            break;
        }

        let mut following = node;
        loop {
            let Some(candidate) = arena.next(following) else {
                break;
            };
            if arena.value(candidate) == arena.value(node) {
                let after = arena.next(candidate);
                arena.set_next(following, after);
            } else {
                following = candidate;
            }
        }

        anchor = arena.next(node);
    }
    head
}

/// Returns the node `k` positions from the end of the chain; `k = 1` is
/// the last node.
///
/// Two passes: the first measures the chain's length, the second walks to
/// the node at offset `length - k` from the head.
///
/// # Preconditions
///
/// The chain must be acyclic.
///
/// # Errors
///
/// Returns [`IndexNotFound`] when `k` is zero or exceeds the chain's
/// length, so the offset walk completes without a match.
///
/// # Complexity
///
/// O(n) time, O(1) space.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, kth_to_last};
///
/// let mut arena = ChainArena::new();
/// let head = arena.chain_from_iter([1, 2, 3, 4, 5]).unwrap();
///
/// let node = kth_to_last(&arena, head, 2).unwrap();
/// assert_eq!(arena.value(node), &4);
///
/// assert!(kth_to_last(&arena, head, 6).is_err());
/// ```
pub fn kth_to_last<T>(
    arena: &ChainArena<T>,
    head: NodeId,
    k: usize,
) -> Result<NodeId, IndexNotFound> {
    let length = arena.chain_len(head);
    for (offset, node) in arena.iter(head).enumerate() {
        if length - offset == k {
            return Ok(node);
        }
    }
    Err(IndexNotFound {
        requested: k,
        length,
    })
}

/// Removes a non-tail node from its chain using only the node's own
/// handle, without access to the head.
///
/// The successor's value is copied into the given node, and the copy step
/// repeats down the chain until the final link is truncated. The chain
/// observed from the head loses one element at the given position.
///
/// # Identity Caveat
///
/// The node object that actually leaves the chain is the old *tail*; every
/// node from `node` onward is repurposed to hold its successor's former
/// value. An external `NodeId` held into this region of the chain no
/// longer denotes the same value afterward — track positions by value or
/// offset across this call, never by handle.
///
/// # Tail Nodes
///
/// Calling this on the tail node is outside the contract: it is a no-op
/// that leaves the chain unchanged, not a removal.
///
/// # Preconditions
///
/// The chain must be acyclic.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, delete_middle};
///
/// let mut arena = ChainArena::new();
/// let head = arena.chain_from_iter([1, 2, 3, 4]).unwrap();
/// let second = arena.next(head).unwrap();
///
/// delete_middle(&mut arena, second);
/// assert_eq!(arena.collect_values(head), vec![1, 3, 4]);
/// ```
pub fn delete_middle<T: Clone>(arena: &mut ChainArena<T>, node: NodeId) {
    let mut current = node;
    while let Some(successor) = arena.next(current) {
        let value = arena.value(successor).clone();
        arena.set_value(current, value);
        if arena.next(successor).is_some() {
            current = successor;
        } else {
            arena.set_next(current, None);
            return;
        }
    }
    // Tail node: outside the contract, deliberately left unchanged.
}

/// Reorders the chain in place so that every node with a value less than
/// `pivot` precedes every node with a value not less than `pivot`,
/// preserving the original relative order inside each group.
///
/// Existing nodes are spliced, never copied: each node is classified by
/// handle into a "less" and a "not-less" staging sequence, the two are
/// concatenated, and the `next` links are rewritten across the result.
///
/// The staging sequences make this O(n) in auxiliary space. That is a
/// known suboptimality — [`partition_in_place`] performs the same stable
/// partition in O(1) extra space and is the stronger variant.
///
/// # Preconditions
///
/// The chain must be acyclic, and the caller's view of the input chain is
/// consumed: only the returned head is meaningful afterward.
///
/// # Complexity
///
/// O(n) time, O(n) auxiliary space.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, partition};
///
/// let mut arena = ChainArena::new();
/// let head = arena.chain_from_iter([3, 5, 8, 5, 10, 2, 1]).unwrap();
/// let head = partition(&mut arena, head, &5);
/// assert_eq!(arena.collect_values(head), vec![3, 2, 1, 5, 8, 5, 10]);
/// ```
#[must_use = "the returned head is the only entry point into the partitioned chain"]
pub fn partition<T: PartialOrd>(arena: &mut ChainArena<T>, head: NodeId, pivot: &T) -> NodeId {
    let mut less: SmallVec<[NodeId; 8]> = SmallVec::new();
    let mut not_less: SmallVec<[NodeId; 8]> = SmallVec::new();
    for node in arena.iter(head) {
        if arena.value(node) < pivot {
            less.push(node);
        } else {
            not_less.push(node);
        }
    }

    let ordered: SmallVec<[NodeId; 16]> = less.into_iter().chain(not_less).collect();
    for pair in ordered.windows(2) {
        arena.set_next(pair[0], Some(pair[1]));
    }
    if let Some(&tail) = ordered.last() {
        arena.set_next(tail, None);
    }
    ordered[0]
}

/// Stable two-group partition around `pivot` in O(1) auxiliary space.
///
/// The stronger alternative to [`partition`]: one walk threads each node
/// onto the tail of a "less" or "not-less" sub-chain as it is encountered,
/// then the two sub-chains are joined. Same contract, no staging
/// collections.
///
/// # Preconditions
///
/// The chain must be acyclic, and the caller's view of the input chain is
/// consumed: only the returned head is meaningful afterward.
///
/// # Complexity
///
/// O(n) time, O(1) auxiliary space.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, partition_in_place};
///
/// let mut arena = ChainArena::new();
/// let head = arena.chain_from_iter([3, 5, 8, 5, 10, 2, 1]).unwrap();
/// let head = partition_in_place(&mut arena, head, &5);
/// assert_eq!(arena.collect_values(head), vec![3, 2, 1, 5, 8, 5, 10]);
/// ```
#[must_use = "the returned head is the only entry point into the partitioned chain"]
pub fn partition_in_place<T: PartialOrd>(
    arena: &mut ChainArena<T>,
    head: NodeId,
    pivot: &T,
) -> NodeId {
    let mut less_head: Option<NodeId> = None;
    let mut less_tail: Option<NodeId> = None;
    let mut rest_head: Option<NodeId> = None;
    let mut rest_tail: Option<NodeId> = None;

    let mut cursor = Some(head);
    while let Some(node) = cursor {
        cursor = arena.next(node);
        arena.set_next(node, None);
        if arena.value(node) < pivot {
            if let Some(tail) = less_tail {
                arena.set_next(tail, Some(node));
            } else {
                less_head = Some(node);
            }
            less_tail = Some(node);
        } else {
            if let Some(tail) = rest_tail {
                arena.set_next(tail, Some(node));
            } else {
                rest_head = Some(node);
            }
            rest_tail = Some(node);
        }
    }

    match (less_head, rest_head) {
        (Some(first), rest) => {
            if let Some(tail) = less_tail {
                arena.set_next(tail, rest);
            }
            first
        }
        (None, Some(first)) => first,
        // A chain has at least one node, so one of the groups is occupied.
        (None, None) => head,
    }
}

/// Extracts a digit past the radix point without widening ceremony.
#[allow(clippy::cast_possible_truncation)]
const fn low_digit(value: u128) -> u8 {
    (value % 10) as u8
}

/// Interprets a digit chain with the *least* significant digit at the
/// head.
fn little_endian_value(arena: &ChainArena<u8>, head: NodeId) -> u128 {
    let mut total = 0u128;
    let mut weight = 1u128;
    for digit in arena.values(head) {
        total += u128::from(*digit) * weight;
        weight *= 10;
    }
    total
}

/// Interprets a digit chain with the *most* significant digit at the head.
///
/// The chain's length is measured first so each digit can be weighted by
/// its distance from the end.
fn big_endian_value(arena: &ChainArena<u8>, head: NodeId) -> u128 {
    let length = arena.chain_len(head);
    let mut weight = (1..length).fold(1u128, |accumulator, _| accumulator * 10);
    let mut total = 0u128;
    for digit in arena.values(head) {
        total += u128::from(*digit) * weight;
        weight /= 10;
    }
    total
}

/// Sums two digit chains whose heads hold the *least* significant digit,
/// returning a freshly allocated chain in the same digit order.
///
/// The input chains are left unmodified; the result never shares nodes
/// with them. The result has exactly as many nodes as the sum has digits,
/// with a minimum of one node for a sum of zero.
///
/// # Preconditions
///
/// Both chains must be acyclic, every payload must be a single decimal
/// digit (`0..=9`), and each represented number must fit in a `u128`
/// (at most 39 digits). Violations produce undefined arithmetic, not a
/// reported error.
///
/// # Complexity
///
/// O(n + m + d) time and O(d) space, where d is the digit count of the
/// sum.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, sum_little_endian};
///
/// let mut arena = ChainArena::new();
/// // 617 and 295, least significant digit first.
/// let first = arena.chain_from_iter([7, 1, 6]).unwrap();
/// let second = arena.chain_from_iter([5, 9, 2]).unwrap();
///
/// let sum = sum_little_endian(&mut arena, first, second);
/// assert_eq!(arena.collect_values(sum), vec![2, 1, 9]); // 912
/// ```
#[must_use = "the sum is a freshly allocated chain, reachable only through the returned head"]
pub fn sum_little_endian(arena: &mut ChainArena<u8>, first: NodeId, second: NodeId) -> NodeId {
    let mut total = little_endian_value(arena, first) + little_endian_value(arena, second);

    let head = arena.push(low_digit(total));
    let mut tail = head;
    while total / 10 > 0 {
        total /= 10;
        let node = arena.push(low_digit(total));
        arena.set_next(tail, Some(node));
        tail = node;
    }
    head
}

/// Sums two digit chains whose heads hold the *most* significant digit,
/// returning a freshly allocated chain in the same digit order.
///
/// Input lengths are measured first to weight each digit by its position
/// from the end; the result chain is emitted most significant digit first
/// by prepending digits as the sum is decomposed.
///
/// # Preconditions
///
/// As for [`sum_little_endian`]: acyclic chains, single-decimal-digit
/// payloads, magnitudes within `u128`.
///
/// # Complexity
///
/// O(n + m + d) time and O(d) space, where d is the digit count of the
/// sum.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, sum_big_endian};
///
/// let mut arena = ChainArena::new();
/// // 617 and 295, most significant digit first.
/// let first = arena.chain_from_iter([6, 1, 7]).unwrap();
/// let second = arena.chain_from_iter([2, 9, 5]).unwrap();
///
/// let sum = sum_big_endian(&mut arena, first, second);
/// assert_eq!(arena.collect_values(sum), vec![9, 1, 2]); // 912
/// ```
#[must_use = "the sum is a freshly allocated chain, reachable only through the returned head"]
pub fn sum_big_endian(arena: &mut ChainArena<u8>, first: NodeId, second: NodeId) -> NodeId {
    let total = big_endian_value(arena, first) + big_endian_value(arena, second);

    let mut head = arena.push(low_digit(total));
    let mut remaining = total / 10;
    while remaining > 0 {
        head = arena.push_linked(low_digit(remaining), Some(head));
        remaining /= 10;
    }
    head
}

/// Decides whether the chain's values read the same forward and backward.
///
/// The chain's length is measured, the first ⌊L/2⌋ nodes are reversed in
/// place (the original head becomes the innermost node of the reversed
/// prefix), and the reversed prefix is walked in lockstep with the suffix
/// — offset by one for odd lengths, skipping the middle node — comparing
/// values until a mismatch or exhaustion.
///
/// # Destructive
///
/// This operation **reverses the first half of the chain and truncates the
/// head's link**; the input chain does not survive in its original order.
/// It is not safe to call on a chain the caller still needs — copy the
/// values out first if the chain must be preserved.
///
/// # Preconditions
///
/// The chain must be acyclic.
///
/// # Complexity
///
/// O(n) time, O(1) space beyond the reversal bookkeeping.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, is_palindrome};
///
/// let mut arena = ChainArena::new();
/// let odd = arena.chain_from_iter([0, 1, 2, 1, 0]).unwrap();
/// assert!(is_palindrome(&mut arena, odd));
///
/// let not = arena.chain_from_iter([0, 1, 2]).unwrap();
/// assert!(!is_palindrome(&mut arena, not));
/// ```
pub fn is_palindrome<T: PartialEq>(arena: &mut ChainArena<T>, head: NodeId) -> bool {
    let length = arena.chain_len(head);

    let mut prefix = head;
    let mut suffix = arena.next(head);
    arena.set_next(head, None);
    let mut reversed = 1;
    while reversed < length / 2 {
        let Some(node) = suffix else { break };
        reversed += 1;
        suffix = arena.next(node);
        arena.set_next(node, Some(prefix));
        prefix = node;
    }

    let mut left = Some(prefix);
    let mut right = if length % 2 == 0 {
        suffix
    } else {
        // Odd length: the cursor sits on the middle node, which has no
        // mirror and is skipped.
        suffix.and_then(|node| arena.next(node))
    };
    while let (Some(a), Some(b)) = (left, right) {
        if arena.value(a) != arena.value(b) {
            return false;
        }
        left = arena.next(a);
        right = arena.next(b);
    }
    true
}

/// Positional lockstep intersection test: walks both chains together and
/// reports whether the same node identity appears at the same position.
///
/// # Known Limitation
///
/// This is **only a correct intersection test when both chains have the
/// same length**. Two chains merging into a shared tail at different
/// depths are never aligned by a positional walk, and the shared nodes are
/// missed. [`intersects`] is the corrected general test; this limited form
/// is kept as the named positional variant.
///
/// Comparison is by identity ([`NodeId`]), never by value: equal values in
/// unrelated nodes do not intersect.
///
/// # Complexity
///
/// O(min(n, m)) time, O(1) space.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, intersects_lockstep};
///
/// let mut arena = ChainArena::new();
/// let shared = arena.chain_from_iter([7, 8]).unwrap();
/// let first = arena.push_linked(1, Some(shared));
/// let second = arena.push_linked(2, Some(shared));
///
/// // Same length, shared suffix: found.
/// assert!(intersects_lockstep(&arena, first, second));
/// ```
#[must_use]
pub fn intersects_lockstep<T>(arena: &ChainArena<T>, first: NodeId, second: NodeId) -> bool {
    arena
        .iter(first)
        .zip(arena.iter(second))
        .any(|(a, b)| a == b)
}

/// Determines whether two chains share any node by identity, regardless of
/// the chains' lengths.
///
/// Both lengths are measured, the longer chain's cursor is advanced by the
/// difference, and the two cursors then walk in lockstep comparing node
/// identity. Chains that intersect share their entire suffix from the
/// first common node, so the aligned walk cannot miss it.
///
/// # Preconditions
///
/// Both chains must be acyclic (a shared suffix is fine; a cycle is not).
///
/// # Complexity
///
/// O(n + m) time, O(1) space.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, intersects};
///
/// let mut arena = ChainArena::new();
/// let shared = arena.chain_from_iter([7, 8]).unwrap();
/// let long = arena.chain_from_iter([1, 2, 3]).unwrap();
/// let long_tail = arena.iter(long).last().unwrap();
/// arena.set_next(long_tail, Some(shared));
/// let short = arena.push_linked(9, Some(shared));
///
/// assert!(intersects(&arena, long, short));
///
/// // Equal values, disjoint nodes: no intersection.
/// let other = arena.chain_from_iter([7, 8]).unwrap();
/// assert!(!intersects(&arena, short, other));
/// ```
#[must_use]
pub fn intersects<T>(arena: &ChainArena<T>, first: NodeId, second: NodeId) -> bool {
    let first_length = arena.chain_len(first);
    let second_length = arena.chain_len(second);

    let (mut longer, shorter) = if first_length >= second_length {
        (first, second)
    } else {
        (second, first)
    };
    for _ in 0..first_length.abs_diff(second_length) {
        match arena.next(longer) {
            Some(node) => longer = node,
            None => return false,
        }
    }

    arena
        .iter(longer)
        .zip(arena.iter(shorter))
        .any(|(a, b)| a == b)
}

/// Detects a cycle and returns the node at which it begins, or `None` for
/// an acyclic chain.
///
/// For each node the scan walks again from the head, asking whether any
/// already-visited node is that node's successor; the first such match is
/// the cycle-entry node — the first node reachable along two distinct
/// paths.
///
/// This doubly-nested scan is O(n²) by design (it keeps O(1) space without
/// mutating anything); [`detect_cycle_floyd`] is the preferred production
/// detector at O(n).
///
/// # Complexity
///
/// O(n²) time, O(1) space.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, detect_cycle};
///
/// let mut arena = ChainArena::new();
/// let head = arena.chain_from_iter([1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(detect_cycle(&arena, head), None);
///
/// // Tie the tail back to the third node.
/// let entry = arena.iter(head).nth(2).unwrap();
/// let tail = arena.iter(head).nth(4).unwrap();
/// arena.set_next(tail, Some(entry));
/// assert_eq!(detect_cycle(&arena, head), Some(entry));
/// ```
#[must_use]
pub fn detect_cycle<T>(arena: &ChainArena<T>, head: NodeId) -> Option<NodeId> {
    let mut outer = Some(head);
    while let Some(node) = outer {
        let successor = arena.next(node);
        let mut checking = Some(head);
        while let Some(candidate) = checking {
            if successor == Some(candidate) {
                return Some(candidate);
            }
            if candidate == node {
                break;
            }
            checking = arena.next(candidate);
        }
        outer = successor;
    }
    None
}

/// Tortoise-and-hare cycle detection with entry recovery.
///
/// The preferred production alternative to [`detect_cycle`]: a slow and a
/// fast cursor meet inside the cycle if one exists, after which restarting
/// one cursor from the head and advancing both one step at a time meets
/// exactly at the cycle-entry node.
///
/// # Complexity
///
/// O(n) time, O(1) space.
///
/// # Examples
///
/// ```rust
/// use relink::chain::{ChainArena, detect_cycle, detect_cycle_floyd};
///
/// let mut arena = ChainArena::new();
/// let head = arena.chain_from_iter([1, 2, 3, 4, 5]).unwrap();
/// let entry = arena.iter(head).nth(2).unwrap();
/// let tail = arena.iter(head).nth(4).unwrap();
/// arena.set_next(tail, Some(entry));
///
/// assert_eq!(detect_cycle_floyd(&arena, head), Some(entry));
/// assert_eq!(detect_cycle_floyd(&arena, head), detect_cycle(&arena, head));
/// ```
#[must_use]
pub fn detect_cycle_floyd<T>(arena: &ChainArena<T>, head: NodeId) -> Option<NodeId> {
    let mut slow = head;
    let mut fast = head;
    loop {
        slow = arena.next(slow)?;
        fast = arena.next(arena.next(fast)?)?;
        if slow == fast {
            break;
        }
    }

    let mut entry = head;
    while entry != slow {
        entry = arena.next(entry)?;
        slow = arena.next(slow)?;
    }
    Some(entry)
}

// =============================================================================
// Tests
// =============================================================================
