#![no_main]

use containerkit::ds::LinearBuffer;
use containerkit::policy::ShrinkPolicy;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on LinearBuffer
//
// Tests random push, pop, peek, shrink_now and reset against a Vec model.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let threshold = (data[0] as usize % 64).max(1);
    let mut buf = LinearBuffer::with_policy(ShrinkPolicy::new(threshold, 0.25, true));
    let mut model = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let value = data[idx + 1];

        match op {
            0 | 1 => {
                buf.push(value);
                model.push(value);
            }
            2 => assert_eq!(buf.pop(), model.pop()),
            3 => {
                assert_eq!(buf.peek(), model.last());
                buf.shrink_now();
                assert_eq!(buf.capacity(), buf.len());
            }
            4 => {
                buf.reset();
                model.clear();
            }
            _ => unreachable!(),
        }

        assert_eq!(buf.len(), model.len());
        assert!(buf.len() <= buf.capacity());
        assert!(buf.check_invariants().is_ok());

        idx += 2;
    }
});
