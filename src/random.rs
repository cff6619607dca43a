use rand::Rng;

const MULTIPLIER_A: u64 = 1103515245;
const INCREMENT_C: u64 = 12345;
const MODULUS: u64 = i32::MAX as u64;
const DEFAULT_SEED: u64 = 3819201;

/// Source of randomness for the opening move, injected so games can be replayed.
pub trait RandomSource {
    fn next(&mut self) -> u32;

    /// Returns an index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        self.next() as usize % len
    }

    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

/// Draws from the thread-local generator of the `rand` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next(&mut self) -> u32 {
        rand::random()
    }

    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A seedable linear congruential generator. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
}

impl Default for SeededRandom {
    fn default() -> Self {
        SeededRandom::new(DEFAULT_SEED)
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> u32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % MODULUS;
        self.seed as u32
    }
}

impl SeededRandom {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed: seed % MODULUS,
        }
    }
}

/// Either source behind one concrete type, for callers that pick at runtime.
#[derive(Debug, Clone)]
pub enum AnyRandom {
    Thread(ThreadRandom),
    Seeded(SeededRandom),
}

impl AnyRandom {
    /// Seeded when `seed` is given, thread-local otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => AnyRandom::Seeded(SeededRandom::new(seed)),
            None => AnyRandom::Thread(ThreadRandom),
        }
    }
}

impl RandomSource for AnyRandom {
    fn next(&mut self) -> u32 {
        match self {
            AnyRandom::Thread(r) => r.next(),
            AnyRandom::Seeded(r) => r.next(),
        }
    }

    fn next_index(&mut self, len: usize) -> usize {
        match self {
            AnyRandom::Thread(r) => r.next_index(len),
            AnyRandom::Seeded(r) => r.next_index(len),
        }
    }
}
