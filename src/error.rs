//! Coupon-specific errors
//!
//! There are two configuration errors and one related to the safety cap of
//! [`crate::simulation`].
use thiserror::Error;

/// An error that a coupon collector run could end up producing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CouponError {
    #[error("universe size should be a strictly positive integer, found 0")]
    EmptyUniverse,
    #[error("universe size should be at most {max}, found {n}")]
    UniverseTooLarge { n: usize, max: usize },
    #[error("batch size should be a strictly positive integer, found 0")]
    EmptyBatch,
    /// `nb_seen` is the number of distinct coupons drawn out of `n` when the cap was hit.
    #[error("no completion after {max_iters} incomplete batches ({nb_seen} of {n} coupons seen)")]
    Exhausted {
        max_iters: usize,
        nb_seen: usize,
        n: usize,
    },
}
