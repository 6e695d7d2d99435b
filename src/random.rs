use rand::Rng;

/// A source of uniformly-distributed integers.
///
/// Every [`rand::Rng`] is a `RandomSource`, so the game normally runs on the
/// thread-local generator while tests substitute a seeded or scripted one.
pub(crate) trait RandomSource {
    /// Return an integer in the inclusive range `min..=max`, uniformly
    /// distributed over successive calls.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `min > max`; callers must check for an
    /// empty range first.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        self.random_range(min..=max)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// A `RandomSource` that replays a fixed list of values.  Each value is
    /// clamped into the requested range; once the list runs out, `min` is
    /// returned.
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub(crate) struct Scripted(VecDeque<usize>);

    impl Scripted {
        pub(crate) fn new<I: IntoIterator<Item = usize>>(values: I) -> Scripted {
            Scripted(values.into_iter().collect())
        }
    }

    impl RandomSource for Scripted {
        fn uniform_int(&mut self, min: usize, max: usize) -> usize {
            self.0.pop_front().map_or(min, |v| v.clamp(min, max))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn rng_stays_in_range() {
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..1000 {
            let n = rng.uniform_int(3, 7);
            assert!((3..=7).contains(&n), "{n} escaped 3..=7");
        }
    }

    #[test]
    fn rng_single_value_range() {
        let mut rng = ChaCha12Rng::seed_from_u64(42);
        assert_eq!(rng.uniform_int(5, 5), 5);
    }

    #[test]
    fn rng_covers_range() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.uniform_int(0, 3)] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn scripted_replays_then_defaults() {
        let mut src = Scripted::new([2, 9]);
        assert_eq!(src.uniform_int(0, 5), 2);
        assert_eq!(src.uniform_int(0, 5), 5);
        assert_eq!(src.uniform_int(1, 5), 1);
    }
}
