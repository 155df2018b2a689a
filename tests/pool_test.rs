// Integration tests for the ArrayPool API
// Tests cover: allocation counting, reuse, release semantics, capacity hint,
// scoped guards, fallible allocation

use arraypool::{ArrayPool, PoolConfig, PoolError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Basic Scenarios
// ============================================================================

#[test]
fn test_reset_arrays_upon_release() {
    init_logging();
    let mut pool: ArrayPool<i32> = ArrayPool::new(0, 0);
    assert_eq!(pool.size(), 0, "Fresh pool should have created nothing");

    let mut array = pool.get();
    assert_eq!(pool.size(), 1, "get() on an empty pool should allocate");

    array.push(123);
    assert_eq!(array.len(), 1);
    let ptr = array.as_ptr();

    pool.release(array);

    let array = pool.get();
    assert_eq!(array.as_ptr(), ptr, "Released buffer should be handed out again");
    assert_eq!(array.len(), 0, "Released buffer should have been cleared");
    assert_eq!(pool.size(), 1);
}

#[test]
fn test_initial_allocation_of_pool_size_arrays() {
    init_logging();
    let mut pool: ArrayPool<i32> = ArrayPool::new(5, 6);
    assert_eq!(pool.size(), 5);

    let array = pool.get();
    assert_eq!(pool.size(), 5, "get() should draw from pre-allocated buffers");
    assert!(array.capacity() >= 6);

    pool.release(array);
    assert_eq!(pool.available(), 5);
}

// ============================================================================
// Allocation Counting
// ============================================================================

#[test]
fn test_size_counts_creations_not_free_buffers() {
    let mut pool: ArrayPool<u8> = ArrayPool::new(2, 0);
    let held: Vec<_> = (0..4).map(|_| pool.get()).collect();

    assert_eq!(pool.size(), 4);
    assert_eq!(pool.available(), 0);

    for buf in held {
        pool.release(buf);
    }
    assert_eq!(pool.size(), 4, "Releasing must not change the creation count");
    assert_eq!(pool.available(), 4);
}

#[test]
fn test_reuse_does_not_allocate() {
    let mut pool: ArrayPool<String> = ArrayPool::default();
    for i in 0..1000 {
        let mut buf = pool.get();
        buf.push(i.to_string());
        pool.release(buf);
    }
    assert_eq!(pool.size(), 1);
}

#[test]
fn test_foreign_buffer_is_accepted() {
    let mut pool: ArrayPool<u8> = ArrayPool::default();
    pool.release(vec![1, 2, 3, 4]);

    assert_eq!(pool.size(), 0, "Foreign buffers are not counted as created");
    assert_eq!(pool.available(), 1);
    assert_eq!(pool.capacity_hint(), 4);

    let buf = pool.get();
    assert!(buf.is_empty());
    assert!(buf.capacity() >= 4);
    assert_eq!(pool.size(), 0);
}

// ============================================================================
// Capacity Hint
// ============================================================================

#[test]
fn test_capacity_hint_never_decreases() {
    let mut pool: ArrayPool<u32> = ArrayPool::new(0, 2);
    let lengths = [1, 5, 3, 12, 0, 7, 12, 4];
    let mut high = 2;

    for len in lengths {
        let mut buf = pool.get();
        buf.extend(0..len);
        pool.release(buf);

        high = high.max(len as usize);
        assert_eq!(pool.capacity_hint(), high);
    }
}

#[test]
fn test_fresh_buffers_sized_to_hint() {
    let mut pool: ArrayPool<u32> = ArrayPool::new(0, 0);
    let mut buf = pool.get();
    buf.extend(0..500);
    pool.release(buf);

    let first = pool.get();
    let second = pool.get();
    assert_eq!(pool.size(), 2);
    assert!(first.capacity() >= 500);
    assert!(second.capacity() >= 500);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_with_config_matches_new() {
    let a: ArrayPool<u8> = ArrayPool::with_config(PoolConfig::new(3, 9));
    let b: ArrayPool<u8> = ArrayPool::new(3, 9);
    assert_eq!(a.size(), b.size());
    assert_eq!(a.available(), b.available());
    assert_eq!(a.capacity_hint(), b.capacity_hint());
}

#[test]
fn test_default_pool() {
    let pool: ArrayPool<u8> = ArrayPool::default();
    assert_eq!(pool.size(), 0);
    assert_eq!(pool.capacity_hint(), 0);
}

// ============================================================================
// Scoped Guards
// ============================================================================

#[test]
fn test_scoped_round_trip() {
    init_logging();
    let mut pool: ArrayPool<u64> = ArrayPool::new(1, 0);
    for n in 1..=10u64 {
        let mut buf = pool.scoped();
        buf.extend(0..n);
        assert_eq!(buf.iter().sum::<u64>(), n * (n - 1) / 2);
    }
    assert_eq!(pool.size(), 1);
    assert_eq!(pool.available(), 1);
    assert_eq!(pool.capacity_hint(), 10);
}

#[test]
fn test_detached_buffer_not_returned() {
    let mut pool: ArrayPool<u64> = ArrayPool::default();
    let kept = {
        let mut buf = pool.scoped();
        buf.push(42);
        buf.detach()
    };
    assert_eq!(kept, vec![42]);
    assert_eq!(pool.available(), 0);
    assert_eq!(pool.capacity_hint(), 0);
}

// ============================================================================
// Fallible Allocation
// ============================================================================

#[test]
fn test_try_with_config() {
    let mut pool: ArrayPool<u16> =
        ArrayPool::try_with_config(PoolConfig::default().with_pool_size(4)).unwrap();
    assert_eq!(pool.size(), 4);
    let buf = pool.try_get().unwrap();
    assert!(buf.is_empty());
    assert_eq!(pool.size(), 4);
}

#[test]
fn test_try_get_reports_overflow() {
    let mut pool: ArrayPool<u64> = ArrayPool::new(0, usize::MAX);
    match pool.try_get() {
        Err(PoolError::Alloc(_)) => {}
        other => panic!("expected allocation error, got {:?}", other),
    }
    assert_eq!(pool.size(), 0, "Failed allocation must not be counted");
}

#[test]
fn test_try_get_served_from_free_list_without_allocation() {
    let mut pool: ArrayPool<u64> = ArrayPool::new(0, usize::MAX);
    pool.release(Vec::new());
    assert!(pool.try_get().is_ok(), "Free buffers need no reservation");
}
