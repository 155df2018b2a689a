#![no_main]

use libfuzzer_sys::fuzz_target;
use arraypool::ArrayPool;

// Interprets the input as a sequence of pool operations and checks the
// pool's counters against a simple model after each step.
fuzz_target!(|data: &[u8]| {
    let Some((&head, ops)) = data.split_first() else {
        return;
    };

    let pool_size = (head & 0x0f) as usize;
    let initial_capacity = (head >> 4) as usize;
    let mut pool: ArrayPool<u8> = ArrayPool::new(pool_size, initial_capacity);

    let mut held: Vec<Vec<u8>> = Vec::new();
    let mut created = pool_size;
    let mut hint = initial_capacity;

    assert_eq!(pool.size(), created);

    for &op in ops {
        match op % 3 {
            // get
            0 => {
                let was_free = pool.available();
                let buf = pool.get();
                assert!(buf.is_empty());
                if was_free == 0 {
                    created += 1;
                    assert!(buf.capacity() >= hint);
                }
                held.push(buf);
            }
            // fill the most recent buffer
            1 => {
                if let Some(buf) = held.last_mut() {
                    buf.extend(std::iter::repeat_n(op, (op >> 2) as usize));
                }
            }
            // release the most recent buffer
            _ => {
                if let Some(buf) = held.pop() {
                    hint = hint.max(buf.len());
                    pool.release(buf);
                }
            }
        }

        assert_eq!(pool.size(), created);
        assert_eq!(pool.capacity_hint(), hint);
        assert_eq!(pool.available() + held.len(), created);
    }
});
