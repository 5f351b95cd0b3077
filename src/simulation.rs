//! Run a coupon collector experiment to completion.
//!
//! The driver keeps drawing batches of coupons until the collection is
//! complete and counts the batches that did not complete it.
//!
//! # Example
//! ```
//! use coupon::{random::seeded_rng, simulation::{run, Config}};
//!
//! let mut rng = seeded_rng(Some([0; 32]));
//! let outcome = run(&Config::with_universe_size(16), &mut rng).unwrap();
//! assert!(outcome.nb_draws >= 16);
//! ```
use tracing::{debug, info};

use crate::{
    collector::{Coupons, MAX_UNIVERSE_SIZE},
    error::CouponError,
    random::IndexSource,
};

/// The size of the universe when none is given, i.e. $2^{11}$.
pub const DEFAULT_UNIVERSE_SIZE: usize = 1 << 11;

/// The parameters of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// the number of distinct coupons
    pub n: usize,
    /// the number of draws between two completion checks
    pub batch_size: usize,
    /// the maximum number of incomplete batches before giving up, if any
    pub max_iters: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: DEFAULT_UNIVERSE_SIZE,
            batch_size: 1,
            max_iters: None,
        }
    }
}

impl Config {
    pub fn with_universe_size(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CouponError> {
        if self.n == 0 {
            return Err(CouponError::EmptyUniverse);
        }
        if self.n > MAX_UNIVERSE_SIZE {
            return Err(CouponError::UniverseTooLarge {
                n: self.n,
                max: MAX_UNIVERSE_SIZE,
            });
        }
        if self.batch_size == 0 {
            return Err(CouponError::EmptyBatch);
        }
        Ok(())
    }
}

/// What a complete run has observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub n: usize,
    /// the number of batches that did not complete the collection
    pub num_iters: usize,
    /// the total number of coupons drawn, the completing batch included
    pub nb_draws: usize,
}

impl Outcome {
    /// The expected number of draws to complete a collection of size $n$,
    /// i.e. $n H_n$ where $H_n$ is the $n$-th harmonic number.
    pub fn expected_draws(&self) -> f64 {
        let n = self.n as f64;
        n * (1..=self.n).map(|i| 1.0 / i as f64).sum::<f64>()
    }

    /// $n \ln n$, the leading term of [`Outcome::expected_draws`].
    pub fn nlogn(&self) -> f64 {
        let n = self.n as f64;
        n * n.ln()
    }
}

/// Runs one experiment until every coupon has been drawn.
///
/// `num_iters` in the [`Outcome`] counts the batches that returned an
/// incomplete collection before the one that completed it, e.g. it is always
/// $0$ when $n = 1$.
pub fn run(config: &Config, source: &mut impl IndexSource) -> Result<Outcome, CouponError> {
    run_with_progress(config, source, |_| {})
}

/// Same as [`run`] but calls `on_batch` with the state of the collection after
/// every batch.
pub fn run_with_progress<F>(
    config: &Config,
    source: &mut impl IndexSource,
    mut on_batch: F,
) -> Result<Outcome, CouponError>
where
    F: FnMut(&Coupons),
{
    config.validate()?;

    info!(
        "collecting {} coupons in batches of {}",
        config.n, config.batch_size
    );
    let mut coupons = Coupons::new(config.n);
    let mut num_iters = 0;
    loop {
        let done = coupons.batch_coupons(config.batch_size, source);
        on_batch(&coupons);
        if done {
            break;
        }

        num_iters += 1;
        if let Some(max_iters) = config.max_iters {
            if num_iters > max_iters {
                return Err(CouponError::Exhausted {
                    max_iters,
                    nb_seen: coupons.nb_seen(),
                    n: config.n,
                });
            }
        }
    }

    let outcome = Outcome {
        n: config.n,
        num_iters,
        nb_draws: (num_iters + 1) * config.batch_size,
    };
    debug!("collection complete: {:?}", outcome);

    Ok(outcome)
}
