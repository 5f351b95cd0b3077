//! The state of a coupon collector.
//!
//! A [`Coupons`] remembers which of the `n` coupons have been drawn at least
//! once. Coupons are only ever added, never forgotten, so the number of
//! distinct coupons seen is kept alongside the membership bits and completion
//! is answered without scanning them.
use bitvec::prelude::*;
use tracing::debug;

use crate::random::IndexSource;

/// The largest universe a [`Coupons`] can hold.
pub const MAX_UNIVERSE_SIZE: usize = BitSlice::<usize, Lsb0>::MAX_BITS;

#[derive(Debug, Clone, PartialEq)]
pub struct Coupons {
    seen: BitVec,
    nb_seen: usize,
}

impl Coupons {
    /// Creates a collector over `0..n` where no coupon has been drawn yet.
    ///
    /// `n = 0` is accepted and gives a collector that is done from the start.
    ///
    /// Panics if `n` is larger than [`MAX_UNIVERSE_SIZE`].
    pub fn new(n: usize) -> Self {
        Self {
            seen: bitvec![0; n],
            nb_seen: 0,
        }
    }

    /// The size of the universe.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// The number of distinct coupons drawn so far.
    pub fn nb_seen(&self) -> usize {
        self.nb_seen
    }

    /// Whether coupon `i` has been drawn at least once.
    ///
    /// Panics if `i` is not in `0..n`.
    pub fn is_seen(&self, i: usize) -> bool {
        self.seen[i]
    }

    /// `true` iff every coupon has been drawn at least once.
    pub fn is_done(&self) -> bool {
        self.nb_seen == self.seen.len()
    }

    /// Marks coupon `i` as drawn and returns whether it is new.
    ///
    /// Panics if `i` is not in `0..n`.
    pub fn mark(&mut self, i: usize) -> bool {
        if self.seen.replace(i, true) {
            return false;
        }
        self.nb_seen += 1;
        true
    }

    /// Draws `k` coupons uniformly at random, with replacement, and tells
    /// whether the collection is now complete.
    ///
    /// An empty universe has nothing to draw from: `source` is left untouched.
    pub fn batch_coupons(&mut self, k: usize, source: &mut impl IndexSource) -> bool {
        if self.is_empty() {
            return true;
        }

        let n = self.len();
        for _ in 0..k {
            let i = source.draw_index(n);
            if self.mark(i) {
                debug!("new coupon {} ({}/{})", i, self.nb_seen, n);
            }
        }
        self.is_done()
    }

    /// The coupons that have never been drawn, in increasing order.
    pub fn missing(&self) -> impl Iterator<Item = usize> + '_ {
        self.seen.iter_zeros()
    }
}
