//! Reusing scratch buffers across a hot loop.
//!
//! Run with:
//!     RUST_LOG=debug cargo run --example hot_loop

use arraypool::{ArrayPool, PoolConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Two buffers up front, sized for a typical line.
    let config = PoolConfig::default()
        .with_pool_size(2)
        .with_initial_capacity(16);
    let mut pool: ArrayPool<&str> = ArrayPool::try_with_config(config)?;

    let text = "the quick brown fox jumps over the lazy dog\n\
                pack my box with five dozen liquor jugs\n\
                how vexingly quick daft zebras jump\n\
                sphinx of black quartz judge my vow";

    let mut longest = 0;
    for (i, line) in text.lines().enumerate() {
        let mut words = pool.get();
        words.extend(line.split_whitespace());
        words.sort_unstable();
        words.dedup();

        longest = longest.max(words.len());
        println!("line {}: {} distinct words, first {:?}", i, words.len(), words.first());

        pool.release(words);
    }

    println!("\nlongest line: {} words", longest);
    println!("buffers created: {}", pool.size());
    println!("buffers free:    {}", pool.available());
    println!("capacity hint:   {}", pool.capacity_hint());

    Ok(())
}
