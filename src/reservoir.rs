use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::Error;

/// What happened to a value handed to [Reservoir::add].
///
/// Values that did not make it into the buffer are handed back to the
/// caller instead of being dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome<T> {
    /// Appended during the fill phase.
    Stored { index: usize },
    /// Won the admission draw and overwrote the slot at `index`.
    Replaced { index: usize, evicted: T },
    /// Lost the admission draw.
    Discarded(T),
}

impl<T> AddOutcome<T> {
    /// The buffer slot written by this step, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            AddOutcome::Stored { index } | AddOutcome::Replaced { index, .. } => Some(*index),
            AddOutcome::Discarded(_) => None,
        }
    }

    /// Returns true if the value was rejected by the admission draw.
    pub fn is_discarded(&self) -> bool {
        matches!(self, AddOutcome::Discarded(_))
    }
}

/// # Reservoir
///
/// A bounded buffer holding a uniform random sample of a stream of unknown,
/// possibly unbounded length (Vitter's Algorithm R).
///
/// The first `capacity` values fill the buffer. From then on, the `n`-th
/// value of the stream is admitted with probability `capacity/n` and, when
/// admitted, overwrites a uniformly chosen slot. After any number of steps,
/// every value seen so far has the same probability `capacity/seen` of being
/// in the buffer.
///
/// Feed values with [add](Self::add), read the result with
/// [sample](Self::sample).
///
/// ```
/// use rsampling::Reservoir;
///
/// let mut reservoir = Reservoir::with_seed(16, 1).unwrap();
/// for value in 0..10_000u64 {
///     reservoir.add(value);
/// }
/// assert_eq!(reservoir.sample().len(), 16);
/// assert_eq!(reservoir.seen(), 10_000);
/// ```
#[derive(Debug, Clone)]
pub struct Reservoir<T, R = Xoshiro256PlusPlus> {
    buffer: Vec<T>,
    capacity: usize,
    seen: u64,
    rng: R,
}

impl<T> Reservoir<T> {
    /// Creates a reservoir with an entropy-seeded default generator.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Self::with_rng(capacity, Xoshiro256PlusPlus::from_entropy())
    }

    /// Creates a fully deterministic reservoir: same seed and same stream
    /// produce the same sample.
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Self, Error> {
        Self::with_rng(capacity, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<T, R: Rng> Reservoir<T, R> {
    /// Creates a reservoir drawing from a caller-supplied random source.
    ///
    /// Fails with [Error::ZeroCapacity] before any allocation if `capacity`
    /// is zero.
    pub fn with_rng(capacity: usize, rng: R) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            seen: 0,
            rng,
        })
    }

    /// Observe one value - *O(1)*.
    ///
    /// The value under consideration is the `seen`-th of the stream, counted
    /// after the increment; the admission probability `capacity/seen` uses
    /// that same count. During the fill phase admission degenerates to
    /// probability 1, so the explicit branch is an optimization, not a
    /// different rule.
    pub fn add(&mut self, value: T) -> AddOutcome<T> {
        self.seen += 1;
        if self.buffer.len() < self.capacity {
            self.buffer.push(value);
            return AddOutcome::Stored {
                index: self.buffer.len() - 1,
            };
        }
        let p = self.capacity as f64 / self.seen as f64;
        if self.rng.gen::<f64>() < p {
            let index = self.rng.gen_range(0..self.capacity);
            let evicted = std::mem::replace(&mut self.buffer[index], value);
            AddOutcome::Replaced { index, evicted }
        } else {
            AddOutcome::Discarded(value)
        }
    }

    /// The current sample: `min(seen, capacity)` values.
    ///
    /// The order is storage order and carries no sampling significance;
    /// rely on it only for stable iteration.
    pub fn sample(&self) -> &[T] {
        &self.buffer
    }

    /// Consumes the reservoir and returns the sample buffer.
    pub fn into_sample(self) -> Vec<T> {
        self.buffer
    }

    /// Probability with which the most recent value was admitted: `0.0`
    /// throughout the fill phase, `capacity/seen` afterwards, the same
    /// expression [add](Self::add) evaluates. Exposed for observability;
    /// not required for correctness.
    pub fn admission_probability(&self) -> f64 {
        if self.seen < self.capacity as u64 {
            0.0
        } else {
            self.capacity as f64 / self.seen as f64
        }
    }

    /// Target sample size, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values currently buffered. Equals `min(seen, capacity)`
    /// and never decreases.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true before the first value is observed.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns true once the fill phase is over.
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Number of values observed so far, one per [add](Self::add) call.
    pub fn seen(&self) -> u64 {
        self.seen
    }
}
