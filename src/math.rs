//! # Algorithm explainer
//!
//! The reservoir holds _k_ slots and observes a stream of values
//! _V<sub>1</sub>, V<sub>2</sub>, ..._ of unknown length:
//!
//! * The first _k_ values are stored unconditionally.
//! * The _n_-th value (_n > k_) is admitted with probability _k/n_; when
//!   admitted, it overwrites a slot chosen uniformly at random.
//!
//! After _n_ values, every value seen so far is present with probability
//! _k/n_:
//!
//! * For _n ≤ k_ this holds trivially, every value is present.
//! * Assume each of the first _n-1_ values is present with probability
//!   _k/(n-1)_. Value _V<sub>n</sub>_ enters with probability _k/n_. A value
//!   already in the buffer survives the step unless _V<sub>n</sub>_ is
//!   admitted **and** lands on its slot, i.e. with probability
//!   _1 - (k/n)(1/k) = (n-1)/n_. Its inclusion probability becomes
//!   _k/(n-1) · (n-1)/n = k/n_.
//!
//! The fill phase is the degenerate case of the same rule: for _n ≤ k_ the
//! admission probability _min(1, k/n)_ is 1, so the explicit branch in
//! [add](crate::Reservoir::add) is an optimization, not a different rule.
//!
//! Each replacement step makes two draws, an admission draw (uniform real
//! in [0, 1)) and a slot draw (uniform integer in [0, k)), and the two must
//! be independent. Both come from the reservoir's own generator, so a fixed
//! seed makes the entire run reproducible.
