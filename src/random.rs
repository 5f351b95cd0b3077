//! Sources of random coupon indices.
//!
//! The collector never owns its randomness: every draw goes through an
//! [`IndexSource`] handed over by the caller. Any [`rand::RngCore`] is a
//! uniform source out of the box, and [`Scripted`] replays a fixed sequence,
//! which is handy to exercise a known scenario.
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Something that can draw an index uniformly at random in `[0, n)`.
pub trait IndexSource {
    /// Draws one index in `[0, n)`.
    ///
    /// `n` is always strictly positive.
    fn draw_index(&mut self, n: usize) -> usize;
}

impl<R: RngCore + ?Sized> IndexSource for R {
    fn draw_index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Replays a fixed sequence of indices, in order.
///
/// Panics when the sequence runs out or when an index does not fit in the
/// requested range.
#[derive(Debug, Clone, PartialEq)]
pub struct Scripted {
    indices: Vec<usize>,
    position: usize,
}

impl Scripted {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }

    /// The number of indices that have been replayed so far.
    pub fn nb_drawn(&self) -> usize {
        self.position
    }
}

impl IndexSource for Scripted {
    fn draw_index(&mut self, n: usize) -> usize {
        let i = *self.indices.get(self.position).unwrap_or_else(|| {
            panic!(
                "scripted source exhausted after {} draws",
                self.indices.len()
            )
        });
        assert!(i < n, "scripted index {} out of range [0, {})", i, n);
        self.position += 1;
        i
    }
}

/// Builds the generator of a run.
///
/// With a seed, two runs see the exact same sequence of draws; without one,
/// the generator is seeded from system entropy.
pub fn seeded_rng(seed: Option<[u8; 32]>) -> StdRng {
    match seed {
        Some(seed) => StdRng::from_seed(seed),
        None => StdRng::from_entropy(),
    }
}

/// Parses a seed given as exactly 64 hexadecimal characters.
pub fn parse_hex_seed(s: &str) -> Result<[u8; 32], String> {
    if s.len() != 64 {
        return Err(format!(
            "Input string must be exactly 64 characters long, found {}",
            s.len()
        ));
    }

    let bytes = hex::decode(s).map_err(|e| format!("Failed to decode hex string: {}", e))?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| format!("expected 32 bytes, found {}", b.len()))
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::{parse_hex_seed, seeded_rng, IndexSource, Scripted};

    #[test]
    fn scripted() {
        let mut source = Scripted::new(vec![3, 0, 3]);
        assert_eq!(source.draw_index(4), 3);
        assert_eq!(source.draw_index(4), 0);
        assert_eq!(source.draw_index(4), 3);
        assert_eq!(source.nb_drawn(), 3);
    }

    #[test]
    #[should_panic(expected = "scripted source exhausted after 1 draws")]
    fn scripted_exhausted() {
        let mut source = Scripted::new(vec![0]);
        source.draw_index(1);
        source.draw_index(1);
    }

    #[test]
    #[should_panic(expected = "scripted index 4 out of range [0, 4)")]
    fn scripted_out_of_range() {
        Scripted::new(vec![4]).draw_index(4);
    }

    #[test]
    fn rng_stays_in_range() {
        let mut rng = seeded_rng(Some([7; 32]));
        for n in 1..50 {
            for _ in 0..100 {
                assert!(rng.draw_index(n) < n);
            }
        }
    }

    #[test]
    fn dyn_rng() {
        let mut rng = seeded_rng(Some([5; 32]));
        let rng: &mut dyn RngCore = &mut rng;
        for _ in 0..100 {
            assert!(rng.draw_index(3) < 3);
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = seeded_rng(Some([42; 32]));
        let mut b = seeded_rng(Some([42; 32]));

        let xs: Vec<usize> = (0..1_000).map(|_| a.draw_index(2048)).collect();
        let ys: Vec<usize> = (0..1_000).map(|_| b.draw_index(2048)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn hex_seed() {
        assert_eq!(parse_hex_seed(&"00".repeat(32)), Ok([0; 32]));
        assert_eq!(parse_hex_seed(&"ff".repeat(32)), Ok([255; 32]));

        let mut expected = [0u8; 32];
        expected[0] = 0x12;
        expected[31] = 0xab;
        assert_eq!(
            parse_hex_seed(&format!("12{}ab", "00".repeat(30))),
            Ok(expected)
        );

        let cases = vec![
            ("", "Input string must be exactly 64 characters long, found 0"),
            (
                "abcd",
                "Input string must be exactly 64 characters long, found 4",
            ),
        ];
        for (input, expected_error) in cases {
            assert_eq!(
                parse_hex_seed(input),
                Err(expected_error.to_string()),
                "input: {}",
                input
            );
        }

        let not_hex = format!("zz{}", "00".repeat(31));
        assert!(parse_hex_seed(&not_hex)
            .unwrap_err()
            .starts_with("Failed to decode hex string"));
    }
}
