use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::contract::Ignore;
use crate::Deque;

const CAP: usize = 7;
type Ring = Deque<u32, CAP, Ignore>;

/// A deque whose live range starts at raw slot `base` and holds `0..len`.
fn ring(base: usize, len: usize) -> Ring {
    let mut dq = Ring::new();
    dq.rebase_empty(base);
    dq.extend(0..len as u32);
    dq
}

fn contents<S: SlotBuffer<u32>, P: ViolationPolicy>(dq: &DequeCore<u32, S, P>) -> Vec<u32> {
    dq.iter().copied().collect()
}

/// Claims `reported` items but only yields `next..end`.
struct ShortIter {
    reported: usize,
    next: u32,
    end: u32,
}

impl Iterator for ShortIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next == self.end {
            return None;
        }
        self.next += 1;
        Some(self.next - 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.reported, Some(self.reported))
    }
}

impl ExactSizeIterator for ShortIter {}

#[test]
fn test_capacity_five_scenario() {
    let mut dq: Deque<i32, 5> = Deque::new();
    dq.push_back(1);
    dq.push_back(2);
    dq.push_back(3);
    dq.push_front(0);
    assert_eq!(dq, [0, 1, 2, 3]);

    let at = dq.insert(dq.cursor_at(2), 99);
    assert_eq!(dq.cursor_get(at), Some(&99));
    assert_eq!(dq, [0, 1, 99, 2, 3]);
    assert!(dq.is_full());

    let result = panic::catch_unwind(AssertUnwindSafe(|| dq.push_back(7)));
    assert!(result.is_err());
    assert_eq!(dq, [0, 1, 99, 2, 3]);

    let next = dq.erase(dq.cursor_at(1));
    assert_eq!(dq, [0, 99, 2, 3]);
    assert_eq!(dq.cursor_get(next), Some(&99));
    assert!(dq.validate_invariants());
}

#[test]
#[should_panic(expected = "deque contract violated: capacity exceeded: 3 elements requested, capacity is 2")]
fn test_push_to_full_panics_by_default() {
    let mut dq: Deque<u8, 2> = Deque::new();
    dq.push_back(1);
    dq.push_front(2);
    dq.push_back(3);
}

#[test]
#[should_panic(expected = "pop_front on an empty deque")]
fn test_pop_front_on_empty_reports() {
    let mut dq: Deque<u8, 2> = Deque::new();
    dq.pop_front();
}

#[test]
#[should_panic(expected = "pop_back on an empty deque")]
fn test_pop_back_on_empty_reports() {
    let mut dq: Deque<u8, 2> = Deque::new();
    dq.pop_back();
}

#[test]
fn test_quiet_policy_leaves_state_untouched() {
    let mut dq: Deque<u8, 2, Ignore> = Deque::from([1, 2]);
    dq.push_back(3);
    dq.push_front(0);
    assert_eq!(dq, [1, 2]);
    assert_eq!(dq.at(2), None);
    assert!(dq.emplace_back(|| unreachable!()).is_none());

    dq.clear();
    assert_eq!(dq.pop_back(), None);
    assert_eq!(dq.pop_front(), None);
    assert!(dq.validate_invariants());
}

#[test]
fn test_try_variants_are_silent() {
    let mut dq: Deque<String, 1> = Deque::new();
    assert!(dq.try_push_back("a".to_string()).is_ok());
    let err = dq.try_push_front("b".to_string()).unwrap_err();
    assert_eq!(err.into_inner(), "b");
    assert_eq!(dq.try_pop_front().as_deref(), Some("a"));
    assert_eq!(dq.try_pop_back(), None);
    assert_eq!(dq.try_pop_front(), None);
}

#[test]
fn test_zero_capacity() {
    let mut dq: Deque<u32, 0, Ignore> = Deque::new();
    assert!(dq.is_empty());
    assert!(dq.is_full());
    dq.push_back(1);
    dq.push_front(1);
    assert_eq!(dq.len(), 0);
    assert_eq!(dq.insert(dq.begin(), 5), dq.begin());
    assert!(dq.validate_invariants());
}

#[test]
fn test_wraparound_over_many_cycles() {
    let mut dq: Deque<u32, 4> = Deque::new();
    let mut model = std::collections::VecDeque::new();
    for round in 0..50u32 {
        for k in 0..3 {
            let v = round * 10 + k;
            if round % 2 == 0 {
                dq.push_back(v);
                model.push_back(v);
            } else {
                dq.push_front(v);
                model.push_front(v);
            }
        }
        assert!(dq.iter().eq(model.iter()));
        for _ in 0..3 {
            if round % 3 == 0 {
                assert_eq!(dq.pop_front(), model.pop_front());
            } else {
                assert_eq!(dq.pop_back(), model.pop_back());
            }
        }
        assert!(dq.validate_invariants());
    }
}

#[test]
fn test_indexing_and_access() {
    let mut dq = ring(5, 5);
    assert_eq!(dq[0], 0);
    assert_eq!(dq[4], 4);
    dq[2] = 20;
    assert_eq!(dq.get(2), Some(&20));
    assert_eq!(dq.get(5), None);
    *dq.front_mut().unwrap() = 100;
    *dq.back_mut().unwrap() = 400;
    assert_eq!(dq.front(), Some(&100));
    assert_eq!(dq.back(), Some(&400));
    if let Some(v) = dq.at_mut(1) {
        *v = 10;
    }
    assert_eq!(contents(&dq), [100, 10, 20, 3, 400]);
}

#[test]
#[should_panic(expected = "index 3 out of range for deque of length 3")]
fn test_index_out_of_range_panics() {
    let dq = ring(0, 3);
    let _value = dq[3];
}

#[test]
fn test_emplace_and_default_push() {
    let mut dq: Deque<Vec<u8>, 4> = Deque::new();
    dq.emplace_back(|| vec![1]).unwrap().push(2);
    dq.push_front_default().unwrap().push(0);
    dq.emplace_front(|| vec![9]);
    dq.push_back_default();
    assert!(dq.is_full());
    assert_eq!(dq[0], [9]);
    assert_eq!(dq[1], [0]);
    assert_eq!(dq[2], [1, 2]);
    assert!(dq[3].is_empty());
}

#[test]
fn test_insert_every_position_and_wrap() {
    for base in 0..=CAP {
        for len in 0..=CAP {
            for pos in 0..=len {
                for n in 0..=CAP - len {
                    let mut dq = ring(base, len);
                    let values: Vec<u32> = (100..100 + n as u32).collect();

                    let at = dq.insert_iter(dq.cursor_at(pos), values.iter().copied());

                    let mut model: Vec<u32> = (0..len as u32).collect();
                    for (i, v) in values.iter().enumerate() {
                        model.insert(pos + i, *v);
                    }
                    assert_eq!(contents(&dq), model, "base {base} len {len} pos {pos} n {n}");
                    assert_eq!(dq.position_of(at), pos);
                    assert!(dq.validate_invariants());
                }
            }
        }
    }
}

#[test]
fn test_insert_shift_longer_than_gap_across_wrap() {
    let strings = |range: core::ops::Range<u32>| range.map(|v| v.to_string()).collect::<Vec<_>>();

    // Front shift: three elements move past a gap of two, wrapping at slot 0.
    let mut front: Deque<String, 10> = Deque::new();
    front.rebase_empty(1);
    front.extend(strings(0..8));
    front.insert_iter(front.cursor_at(3), strings(50..52));
    let model: Vec<String> = [0, 1, 2, 50, 51, 3, 4, 5, 6, 7].map(|v| v.to_string()).into();
    assert_eq!(front, model[..]);
    assert!(front.validate_invariants());

    // Back shift: three elements move past a gap of two, wrapping at the top.
    let mut back: Deque<String, 10> = Deque::new();
    back.rebase_empty(6);
    back.extend(strings(0..8));
    back.insert_iter(back.cursor_at(5), strings(60..62));
    let model: Vec<String> = [0, 1, 2, 3, 4, 60, 61, 5, 6, 7].map(|v| v.to_string()).into();
    assert_eq!(back, model[..]);
    assert!(back.validate_invariants());
}

#[test]
fn test_insert_single_returns_inserted() {
    for base in 0..=CAP {
        for pos in 0..=4 {
            let mut dq = ring(base, 4);
            let at = dq.insert(dq.cursor_at(pos), 42);
            assert_eq!(dq.cursor_get(at), Some(&42));
            assert_eq!(dq.len(), 5);
        }
    }
}

#[test]
fn test_insert_n_and_slice() {
    let mut dq: Deque<String, 8> = Deque::from(["a".to_string(), "d".to_string()]);
    let at = dq.insert_n(dq.cursor_at(1), 2, "x".to_string());
    assert_eq!(dq.position_of(at), 1);
    assert_eq!(dq, ["a", "x", "x", "d"]);

    dq.insert_slice(dq.end(), &["e".to_string(), "f".to_string()]);
    dq.insert_slice(dq.begin(), &["_".to_string()]);
    assert_eq!(dq, ["_", "a", "x", "x", "d", "e", "f"]);
}

#[test]
fn test_insert_over_capacity_is_rejected() {
    let mut dq = ring(3, 5);
    let position = dq.cursor_at(2);
    let at = dq.insert_n(position, 3, 9);
    assert_eq!(at, position);
    assert_eq!(contents(&dq), [0, 1, 2, 3, 4]);

    let foreign = Cursor::new(0, CAP + 5);
    assert_eq!(dq.insert(foreign, 9), foreign);
    assert_eq!(dq.len(), 5);
}

#[test]
fn test_insert_short_iterator_closes_gap() {
    for base in 0..=CAP {
        for pos in 0..=4 {
            let mut dq = ring(base, 4);
            let short = ShortIter {
                reported: 3,
                next: 50,
                end: 51,
            };
            dq.insert_iter(dq.cursor_at(pos), short);

            let mut model: Vec<u32> = (0..4).collect();
            model.insert(pos, 50);
            assert_eq!(contents(&dq), model, "base {base} pos {pos}");
            assert!(dq.validate_invariants());
        }
    }
}

#[test]
fn test_insert_panicking_clone_keeps_deque_consistent() {
    struct Fragile(u32);

    impl Clone for Fragile {
        fn clone(&self) -> Self {
            if self.0 == 13 {
                panic!("unlucky clone");
            }
            Fragile(self.0)
        }
    }

    for pos in [1, 3] {
        let mut dq: Deque<Fragile, 8> = (0..4).map(Fragile).collect();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            dq.insert_n(dq.cursor_at(pos), 2, Fragile(13));
        }));
        assert!(result.is_err());
        assert!(dq.validate_invariants());
        let values: Vec<u32> = dq.iter().map(|f| f.0).collect();
        assert_eq!(values, [0, 1, 2, 3]);
    }
}

#[test]
fn test_insert_panicking_iterator_keeps_prefix() {
    let mut dq = ring(6, 4);
    let values = (0..3u32).map(|i| {
        if i == 2 {
            panic!("source failed");
        }
        70 + i
    });
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        dq.insert_iter(dq.cursor_at(3), values);
    }));
    assert!(result.is_err());
    assert_eq!(contents(&dq), [0, 1, 2, 70, 71, 3]);
    assert!(dq.validate_invariants());
}

#[test]
fn test_erase_every_range_and_wrap() {
    for base in 0..=CAP {
        for len in 0..=CAP {
            for first in 0..=len {
                for last in first..=len {
                    let mut dq = ring(base, len);
                    let at = dq.erase_range(dq.cursor_at(first), dq.cursor_at(last));

                    let mut model: Vec<u32> = (0..len as u32).collect();
                    model.drain(first..last);
                    assert_eq!(contents(&dq), model, "base {base} len {len} [{first}, {last})");
                    assert_eq!(dq.position_of(at), first);
                    assert!(dq.validate_invariants());
                }
            }
        }
    }
}

#[test]
fn test_erase_single_returns_follower() {
    let mut dq = ring(4, 6);
    let next = dq.erase(dq.cursor_at(4));
    assert_eq!(dq.cursor_get(next), Some(&5));
    let next = dq.erase(dq.cursor_at(4));
    assert_eq!(next, dq.end());
    let next = dq.erase(dq.begin());
    assert_eq!(next, dq.begin());
    assert_eq!(contents(&dq), [1, 2, 3]);
}

#[test]
fn test_erase_invalid_positions_are_rejected() {
    let mut dq = ring(2, 3);
    assert_eq!(dq.erase(dq.end()), dq.end());
    let (a, b) = (dq.cursor_at(2), dq.cursor_at(1));
    assert_eq!(dq.erase_range(a, b), dq.end());
    assert_eq!(dq.erase(Cursor::new(1, 3)), dq.end());
    assert_eq!(contents(&dq), [0, 1, 2]);

    let mut empty = ring(0, 0);
    assert_eq!(empty.erase(empty.begin()), empty.end());
}

#[test]
#[should_panic(expected = "erase on an empty deque")]
fn test_erase_on_empty_reports() {
    let mut dq: Deque<u8, 3> = Deque::new();
    dq.erase(dq.begin());
}

#[test]
fn test_clear_resets_cursors() {
    let mut dq = ring(5, 4);
    dq.clear();
    assert!(dq.is_empty());
    assert_eq!(dq.begin().index(), 0);
    assert_eq!(dq.end().index(), 0);
    dq.push_front(9);
    assert_eq!(contents(&dq), [9]);
}

#[test]
fn test_oversized_assign_keeps_contents() {
    let mut dq: Deque<i32, 3, Ignore> = Deque::from([7, 8, 9]);
    dq.assign_iter((0..10).collect::<Vec<_>>());
    assert_eq!(dq, [7, 8, 9]);

    let mut strict: Deque<i32, 3> = Deque::from([7, 8, 9]);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        strict.assign_iter((0..10).collect::<Vec<_>>());
    }));
    assert!(result.is_err());
    assert_eq!(strict, [7, 8, 9]);
}

#[test]
fn test_assign_stops_at_reported_length() {
    let mut dq = ring(5, 2);
    dq.assign_iter(ShortIter {
        reported: 3,
        next: 20,
        end: 30,
    });
    assert_eq!(contents(&dq), [20, 21, 22]);
    assert!(dq.validate_invariants());

    dq.assign_iter(ShortIter {
        reported: 4,
        next: 40,
        end: 42,
    });
    assert_eq!(contents(&dq), [40, 41]);
    assert!(dq.validate_invariants());
}

#[test]
fn test_assign_and_resize() {
    let mut dq = ring(3, 2);
    dq.assign_n(4, 8);
    assert_eq!(contents(&dq), [8, 8, 8, 8]);

    dq.assign_n(CAP + 1, 1);
    assert_eq!(contents(&dq), [8, 8, 8, 8]);

    dq.assign_iter(10..13);
    assert_eq!(contents(&dq), [10, 11, 12]);

    dq.assign_iter(0..100);
    assert_eq!(contents(&dq), [10, 11, 12]);

    dq.assign_iter([0, 2, 4, 6, 8, 10, 12]);
    assert_eq!(contents(&dq), [0, 2, 4, 6, 8, 10, 12]);

    dq.resize(2, 0);
    assert_eq!(contents(&dq), [0, 2]);
    dq.resize(4, 5);
    assert_eq!(contents(&dq), [0, 2, 5, 5]);
    dq.resize(CAP + 1, 5);
    assert_eq!(dq.len(), 4);

    let mut next = 20;
    dq.resize_with(6, || {
        next += 1;
        next
    });
    assert_eq!(contents(&dq), [0, 2, 5, 5, 21, 22]);
    dq.truncate(1);
    assert_eq!(contents(&dq), [0]);
}

#[test]
fn test_assign_round_trip() {
    let source = ring(6, 5);
    let mut copy: Deque<u32, 9> = Deque::new();
    copy.assign_iter(source.iter().cloned());
    assert_eq!(copy, source);
}

#[test]
fn test_constructors() {
    let dq: Deque<String, 4> = Deque::from_elem("z".to_string(), 3);
    assert_eq!(dq, ["z", "z", "z"]);

    let dq: Deque<u64, 4> = Deque::with_len(2);
    assert_eq!(dq, [0, 0]);

    let dq: Deque<u64, 4> = Deque::default();
    assert!(dq.is_empty());
    assert_eq!(dq.capacity(), 4);
    assert_eq!(dq.max_size(), 4);
    assert_eq!(dq.available(), 4);
}

#[test]
fn test_clone_and_clone_from() {
    let original = ring(5, 4);
    let copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.begin().index(), 0);

    let mut target = ring(1, 7);
    target.clone_from(&original);
    assert_eq!(target, original);
}

#[test]
fn test_slice_backed_deque() {
    let mut raw: [MaybeUninit<String>; 3] = [(); 3].map(|()| MaybeUninit::uninit());
    let mut dq: crate::SliceDeque<'_, String, Ignore> = crate::SliceDeque::from_buffer(&mut raw);
    assert_eq!(dq.capacity(), 2);
    dq.push_back("b".to_string());
    dq.push_front("a".to_string());
    dq.push_back("c".to_string());
    assert_eq!(dq, ["a", "b"]);
    dq.insert(dq.cursor_at(1), "mid".to_string());
    assert_eq!(dq.len(), 2);
    assert_eq!(dq.pop_front().as_deref(), Some("a"));
}

#[test]
fn test_empty_slice_buffer() {
    let mut raw: [MaybeUninit<u8>; 0] = [];
    let mut dq: crate::SliceDeque<'_, u8, Ignore> = crate::SliceDeque::from_buffer(&mut raw);
    assert_eq!(dq.capacity(), 0);
    dq.push_back(1);
    assert!(dq.is_empty());
    assert!(dq.validate_invariants());
}
