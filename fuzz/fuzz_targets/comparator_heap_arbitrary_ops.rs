#![no_main]

use containerkit::ds::{ComparatorHeap, MinFirst};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on ComparatorHeap
//
// Interleaves push, pop and clear; every pop must be the minimum of the
// tracked multiset and the heap property must hold after each step.
fuzz_target!(|data: &[u8]| {
    let mut heap = ComparatorHeap::new(MinFirst);
    let mut model: Vec<u8> = Vec::new();

    for chunk in data.chunks_exact(2) {
        let op = chunk[0] % 4;
        let value = chunk[1];

        match op {
            0 | 1 => {
                heap.push(value);
                model.push(value);
            }
            2 => {
                let expected = model.iter().copied().min();
                if let Some(min) = expected
                    && let Some(pos) = model.iter().position(|&v| v == min)
                {
                    model.swap_remove(pos);
                }
                assert_eq!(heap.pop(), expected);
            }
            3 => {
                heap.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek().copied(), model.iter().copied().min());
        assert!(heap.check_invariants().is_ok());
    }

    let drained = heap.into_sorted_vec();
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
});
