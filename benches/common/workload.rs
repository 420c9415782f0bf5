//! Operation streams for container benchmarks.
//!
//! Sequences are generated up front from a seeded `SmallRng` so every
//! benchmark iteration replays the same mix.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    PushFront(u64),
    PushBack(u64),
    PopFront,
    PopBack,
}

#[derive(Debug, Clone, Copy)]
pub struct OpMix {
    /// Probability that an operation is a push.
    pub push_prob: f64,
    /// Probability that an operation targets the front end.
    pub front_prob: f64,
    pub seed: u64,
}

impl OpMix {
    /// Balanced push/pop at both ends.
    pub fn churn(seed: u64) -> Self {
        Self {
            push_prob: 0.5,
            front_prob: 0.5,
            seed,
        }
    }

    /// Push-heavy back-end load that keeps growing the buffer.
    pub fn growth(seed: u64) -> Self {
        Self {
            push_prob: 0.8,
            front_prob: 0.0,
            seed,
        }
    }

    pub fn ops(self, count: usize) -> Vec<Op> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..count)
            .map(|_| {
                let front = rng.random_bool(self.front_prob);
                if rng.random_bool(self.push_prob) {
                    let value = rng.random::<u64>();
                    if front { Op::PushFront(value) } else { Op::PushBack(value) }
                } else if front {
                    Op::PopFront
                } else {
                    Op::PopBack
                }
            })
            .collect()
    }
}

/// Random `u64` priorities for heap benchmarks.
pub fn priorities(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random()).collect()
}
