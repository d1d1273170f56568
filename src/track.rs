use delegate::delegate;
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::Error;
use crate::reservoir::{AddOutcome, Reservoir};

/// A [Reservoir] that remembers which buffer slot it last wrote.
///
/// This struct wraps a [Reservoir], adding the one piece of state the
/// annotated listing needs; sampling behavior is exactly the inner
/// reservoir's.
pub struct TrackedReservoir<T, R = Xoshiro256PlusPlus> {
    inner: Reservoir<T, R>,
    last_written: Option<usize>,
}

impl<T> TrackedReservoir<T> {
    /// Creates a tracked reservoir with an entropy-seeded default generator.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Ok(Reservoir::new(capacity)?.into())
    }

    /// Creates a fully deterministic tracked reservoir.
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Self, Error> {
        Ok(Reservoir::with_seed(capacity, seed)?.into())
    }
}

impl<T, R: Rng> TrackedReservoir<T, R> {
    delegate! {
        to self.inner {
            /// Target sample size, fixed at construction.
            pub fn capacity(&self) -> usize;

            /// Number of values currently buffered.
            pub fn len(&self) -> usize;

            /// Returns true before the first value is observed.
            pub fn is_empty(&self) -> bool;

            /// Returns true once the fill phase is over.
            pub fn is_full(&self) -> bool;

            /// Number of values observed so far.
            pub fn seen(&self) -> u64;

            /// See [Reservoir::admission_probability].
            pub fn admission_probability(&self) -> f64;

            /// The current sample, in storage order.
            pub fn sample(&self) -> &[T];
        }
    }

    /// Observe one value, recording the written slot when the value is kept.
    pub fn add(&mut self, value: T) -> AddOutcome<T> {
        let outcome = self.inner.add(value);
        if let Some(index) = outcome.index() {
            self.last_written = Some(index);
        }
        outcome
    }

    /// Slot most recently written: `None` before the first value, unchanged
    /// by discarded values.
    pub fn last_written(&self) -> Option<usize> {
        self.last_written
    }

    /// Drops the tracking state and returns the plain reservoir.
    pub fn into_inner(self) -> Reservoir<T, R> {
        self.inner
    }
}

impl<T, R: Rng> From<Reservoir<T, R>> for TrackedReservoir<T, R> {
    fn from(inner: Reservoir<T, R>) -> Self {
        Self {
            inner,
            last_written: None,
        }
    }
}
