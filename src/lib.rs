//! Coupon: simulation of the coupon collector problem
//!
//! Coupons are drawn uniformly at random, with replacement, out of a universe
//! of size $n$ until every one of them has been drawn at least once.
//!
//! - [`collector::Coupons`] records which coupons have been drawn
//! - [`simulation::run`] drives one experiment to completion
//! - [`random::IndexSource`] is where the randomness comes from, any
//!   [`rand::RngCore`] will do
pub mod collector;
pub mod error;
pub mod random;
pub mod simulation;

pub use collector::Coupons;
pub use error::CouponError;
pub use simulation::{run, Config, Outcome};
