//! Heap demo
//!
//! Seeds a heap with random keys, printing its layout after every insert,
//! then removes the ten smallest keys one at a time.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example heap_demo            # seeded from OS entropy
//! cargo run --example heap_demo -- 1234    # reproducible run
//! ```

use std::error::Error;
use std::ops::Range;

use fixed_binary_heap::{FixedBinaryHeap, Heap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 200;
const INSERTS: usize = 20;
const REMOVALS: usize = 10;
const KEY_RANGE: Range<u64> = 0..1000;

/// Draws a key in `[range.start, range.end)` from the supplied source
fn rand_between<R: Rng>(rng: &mut R, range: Range<u64>) -> u64 {
    rng.gen_range(range)
}

fn print_heap(heap: &FixedBinaryHeap<u64, u64>) {
    for slot in heap.describe() {
        println!("{:3} - {:3} : {}", slot.level, slot.index, slot.key);
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = match std::env::args().nth(1) {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };

    let mut heap = FixedBinaryHeap::with_capacity(CAPACITY)?;
    for _ in 0..INSERTS {
        let key = rand_between(&mut rng, KEY_RANGE);
        heap.push(key, key)?;
        print_heap(&heap);
    }

    for _ in 0..REMOVALS {
        let (_, removed) = heap.pop()?;
        println!("Removed {removed}");
        print_heap(&heap);
    }

    Ok(())
}
