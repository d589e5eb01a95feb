#![cfg(feature = "chain")]
//! Unit tests for the chain algorithm suite.
//!
//! These tests exercise each operation's contract end to end over the
//! public API, including the documented limitations (dedup's end behavior,
//! the lockstep intersection test) and the destructive side effects.

use relink::chain::{
    ChainArena, IndexNotFound, NodeId, delete_middle, detect_cycle, detect_cycle_floyd,
    intersects, intersects_lockstep, is_palindrome, kth_to_last, partition, partition_in_place,
    remove_duplicates, sum_big_endian, sum_little_endian,
};
use rstest::rstest;

fn chain<T>(arena: &mut ChainArena<T>, values: impl IntoIterator<Item = T>) -> NodeId {
    arena.chain_from_iter(values).expect("non-empty chain")
}

// =============================================================================
// Round-trip: construction and traversal
// =============================================================================

#[rstest]
fn test_chain_round_trip_preserves_order() {
    let mut arena = ChainArena::new();
    let values = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let head = chain(&mut arena, values.clone());
    assert_eq!(arena.collect_values(head), values);
    assert_eq!(arena.chain_len(head), values.len());
}

#[rstest]
fn test_multiple_chains_share_one_arena() {
    let mut arena = ChainArena::new();
    let first = chain(&mut arena, [1, 2]);
    let second = chain(&mut arena, [3, 4, 5]);
    assert_eq!(arena.collect_values(first), vec![1, 2]);
    assert_eq!(arena.collect_values(second), vec![3, 4, 5]);
}

// =============================================================================
// Deduplication
// =============================================================================

#[rstest]
fn test_remove_duplicates_collapses_anchored_values() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [2, 1, 1, 3, 1]);
    let head = remove_duplicates(&mut arena, head);
    assert_eq!(arena.collect_values(head), vec![2, 1, 3]);
}

#[rstest]
fn test_remove_duplicates_documented_end_limitation() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [1, 1]);
    let head = remove_duplicates(&mut arena, head);
    assert_eq!(arena.collect_values(head), vec![1, 1]);
}

#[rstest]
fn test_remove_duplicates_preserves_survivor_order() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [4, 2, 4, 3, 2, 4, 9]);
    let head = remove_duplicates(&mut arena, head);
    assert_eq!(arena.collect_values(head), vec![4, 2, 3, 9]);
}

// =============================================================================
// Kth-to-last
// =============================================================================

#[rstest]
fn test_kth_to_last_second_from_end() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [1, 2, 3, 4, 5]);
    let node = kth_to_last(&arena, head, 2).expect("k within range");
    assert_eq!(arena.value(node), &4);
}

#[rstest]
fn test_kth_to_last_beyond_length_is_not_found() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [1, 2, 3, 4, 5]);
    assert_eq!(
        kth_to_last(&arena, head, 6),
        Err(IndexNotFound {
            requested: 6,
            length: 5
        })
    );
}

#[rstest]
fn test_kth_to_last_returns_node_identity_not_a_copy() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [1, 2, 3]);
    let last = kth_to_last(&arena, head, 1).expect("k within range");
    assert_eq!(arena.iter(head).last(), Some(last));
}

// =============================================================================
// Delete-middle
// =============================================================================

#[rstest]
fn test_delete_middle_removes_interior_node() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [1, 2, 3, 4]);
    let second = arena.next(head).expect("second node");
    delete_middle(&mut arena, second);
    assert_eq!(arena.collect_values(head), vec![1, 3, 4]);
}

#[rstest]
fn test_delete_middle_drops_old_tail_identity() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [1, 2, 3, 4]);
    let second = arena.next(head).expect("second node");
    let old_tail = arena.iter(head).last().expect("tail");
    delete_middle(&mut arena, second);
    assert!(arena.iter(head).all(|node| node != old_tail));
}

// =============================================================================
// Partition
// =============================================================================

#[rstest]
fn test_partition_around_middle_pivot() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [3, 5, 8, 5, 10, 2, 1]);
    let head = partition(&mut arena, head, &5);
    assert_eq!(arena.collect_values(head), vec![3, 2, 1, 5, 8, 5, 10]);
}

#[rstest]
fn test_partition_in_place_agrees_with_staged_variant() {
    let values = [3, 5, 8, 5, 10, 2, 1];

    let mut staged_arena = ChainArena::new();
    let staged = chain(&mut staged_arena, values);
    let staged = partition(&mut staged_arena, staged, &5);

    let mut in_place_arena = ChainArena::new();
    let in_place = chain(&mut in_place_arena, values);
    let in_place = partition_in_place(&mut in_place_arena, in_place, &5);

    assert_eq!(
        staged_arena.collect_values(staged),
        in_place_arena.collect_values(in_place)
    );
}

#[rstest]
fn test_partition_all_on_one_side() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [9, 8, 7]);
    let head = partition(&mut arena, head, &1);
    assert_eq!(arena.collect_values(head), vec![9, 8, 7]);

    let head = chain(&mut arena, [1, 2, 3]);
    let head = partition_in_place(&mut arena, head, &10);
    assert_eq!(arena.collect_values(head), vec![1, 2, 3]);
}

// =============================================================================
// Digit sums
// =============================================================================

#[rstest]
fn test_sum_little_endian_617_plus_295() {
    let mut arena = ChainArena::new();
    let first = chain(&mut arena, [7u8, 1, 6]); // 617
    let second = chain(&mut arena, [5u8, 9, 2]); // 295
    let sum = sum_little_endian(&mut arena, first, second);
    assert_eq!(arena.collect_values(sum), vec![2, 1, 9]); // 912
}

#[rstest]
fn test_sum_big_endian_617_plus_295() {
    let mut arena = ChainArena::new();
    let first = chain(&mut arena, [6u8, 1, 7]); // 617
    let second = chain(&mut arena, [2u8, 9, 5]); // 295
    let sum = sum_big_endian(&mut arena, first, second);
    assert_eq!(arena.collect_values(sum), vec![9, 1, 2]); // 912
}

#[rstest]
fn test_sum_allocates_fresh_nodes() {
    let mut arena = ChainArena::new();
    let first = chain(&mut arena, [1u8]);
    let second = chain(&mut arena, [2u8]);
    let sum = sum_little_endian(&mut arena, first, second);
    assert!(!intersects(&arena, sum, first));
    assert!(!intersects(&arena, sum, second));
}

// =============================================================================
// Palindrome
// =============================================================================

#[rstest]
#[case(vec![0, 1, 2, 1, 0], true)]
#[case(vec![0, 1, 2, 2, 1, 0], true)]
#[case(vec![0, 1, 2], false)]
fn test_is_palindrome_cases(#[case] values: Vec<i32>, #[case] expected: bool) {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, values);
    assert_eq!(is_palindrome(&mut arena, head), expected);
}

// =============================================================================
// Intersection
// =============================================================================

#[rstest]
fn test_intersection_of_merged_chains() {
    let mut arena = ChainArena::new();
    let shared = chain(&mut arena, [7, 8, 9]);
    let first = chain(&mut arena, [1, 2]);
    let first_tail = arena.iter(first).last().expect("tail");
    arena.set_next(first_tail, Some(shared));
    let second = chain(&mut arena, [3, 4]);
    let second_tail = arena.iter(second).last().expect("tail");
    arena.set_next(second_tail, Some(shared));

    // Equal lengths: both the limited and general tests find the merge.
    assert!(intersects_lockstep(&arena, first, second));
    assert!(intersects(&arena, first, second));
}

#[rstest]
fn test_lockstep_limitation_on_unequal_lengths() {
    let mut arena = ChainArena::new();
    let shared = chain(&mut arena, [7]);
    let long = chain(&mut arena, [1, 2, 3]);
    let long_tail = arena.iter(long).last().expect("tail");
    arena.set_next(long_tail, Some(shared));
    let short = arena.push_linked(4, Some(shared));

    assert!(!intersects_lockstep(&arena, long, short));
    assert!(intersects(&arena, long, short));
}

#[rstest]
fn test_intersection_is_by_identity_not_value() {
    let mut arena = ChainArena::new();
    let first = chain(&mut arena, [1, 2, 3]);
    let second = chain(&mut arena, [1, 2, 3]);
    assert!(!intersects(&arena, first, second));
}

// =============================================================================
// Cycle detection
// =============================================================================

#[rstest]
fn test_cycle_into_third_node() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [1, 2, 3, 4, 5]);
    let third = arena.iter(head).nth(2).expect("third node");
    let tail = arena.iter(head).last().expect("tail");
    arena.set_next(tail, Some(third));

    assert_eq!(detect_cycle(&arena, head), Some(third));
    assert_eq!(detect_cycle_floyd(&arena, head), Some(third));
}

#[rstest]
fn test_acyclic_chain_has_no_cycle() {
    let mut arena = ChainArena::new();
    let head = chain(&mut arena, [1, 2, 3, 4, 5]);
    assert_eq!(detect_cycle(&arena, head), None);
    assert_eq!(detect_cycle_floyd(&arena, head), None);
}

#[rstest]
fn test_both_detectors_agree_on_every_entry_position() {
    for entry_index in 0..5 {
        let mut arena = ChainArena::new();
        let head = chain(&mut arena, [0, 1, 2, 3, 4]);
        let entry = arena.iter(head).nth(entry_index).expect("entry");
        let tail = arena.iter(head).last().expect("tail");
        arena.set_next(tail, Some(entry));

        assert_eq!(
            detect_cycle(&arena, head),
            Some(entry),
            "quadratic scan, entry at {entry_index}"
        );
        assert_eq!(
            detect_cycle_floyd(&arena, head),
            Some(entry),
            "floyd, entry at {entry_index}"
        );
    }
}
