#![no_main]

use std::collections::VecDeque;

use containerkit::ds::RingBuffer;
use containerkit::policy::ShrinkPolicy;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on RingBuffer
//
// The first two bytes pick the shrink threshold and ratio; the rest drive
// push/pop at both ends, reset and manual shrink against a VecDeque model.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let threshold = (data[0] as usize % 64).max(1);
    let ratio = (data[1] % 5) as f64 / 4.0;
    let policy = ShrinkPolicy::new(threshold, ratio, data[1] & 0x80 == 0);
    let mut ring = RingBuffer::with_policy(4, policy);
    let mut model = VecDeque::new();

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let value = data[idx + 1];

        match op {
            0 => {
                ring.push_back(value);
                model.push_back(value);
            }
            1 => {
                ring.push_front(value);
                model.push_front(value);
            }
            2 => assert_eq!(ring.pop_front(), model.pop_front()),
            3 => assert_eq!(ring.pop_back(), model.pop_back()),
            4 => {
                assert_eq!(ring.front(), model.front());
                assert_eq!(ring.back(), model.back());
            }
            5 => {
                ring.reset();
                model.clear();
            }
            6 => ring.shrink_to_fit(),
            _ => unreachable!(),
        }

        assert_eq!(ring.len(), model.len());
        assert!(ring.len() <= ring.capacity());
        assert!(ring.check_invariants().is_ok());

        idx += 2;
    }

    assert!(ring.iter().eq(model.iter()));
});
