//! Deterministic random number generation for deck shuffling.
//!
//! `GameRng` wraps a 32-bit Mersenne Twister (MT19937) and shuffles with the
//! same draw sequence as libstdc++'s `std::shuffle` over
//! `std::uniform_int_distribution`. A given seed therefore produces the same
//! permutation as a C++ program seeding `std::mt19937` with that value and
//! shuffling a container of the same length.
//!
//! ```
//! use uno_engine::core::GameRng;
//!
//! let mut a = GameRng::new(1234);
//! let mut b = GameRng::new(1234);
//!
//! let mut left: Vec<u32> = (0..20).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::RngCore;
use rand_mt::Mt;

/// Seeded RNG used for every shuffle in a game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: Mt,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    ///
    /// Seeds that fit in 32 bits go through the standard MT19937
    /// initialization, so `GameRng::new(1234)` matches `std::mt19937(1234)`.
    /// Wider seeds are split into a two-word key.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let inner = match u32::try_from(seed) {
            Ok(small) => Mt::new(small),
            Err(_) => Mt::new_with_key([seed as u32, (seed >> 32) as u32]),
        };
        Self { inner, seed }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next raw 32-bit output of the generator.
    pub fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// Uniform integer in `0..=max`.
    pub fn uniform(&mut self, max: u32) -> u32 {
        uniform_below(&mut self.inner, u64::from(max) + 1) as u32
    }

    /// Shuffle a slice in place.
    ///
    /// Walks the slice front to back like Fisher-Yates, but whenever the
    /// square of the length fits in the generator's 32-bit range it derives
    /// two swap positions from a single draw: position `i` swaps within
    /// `0..=i` and position `i + 1` within `0..=i + 1`. An even-length slice
    /// first swaps element 1 with element 0 or itself so the rest pair up.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len() as u64;
        if len < 2 {
            return;
        }

        if u64::from(u32::MAX) / len < len {
            for i in 1..slice.len() {
                let j = uniform_below(&mut self.inner, i as u64 + 1);
                slice.swap(i, j as usize);
            }
            return;
        }

        let mut i = 1;
        if len % 2 == 0 {
            let j = uniform_below(&mut self.inner, 2);
            slice.swap(i, j as usize);
            i += 1;
        }

        while i < slice.len() {
            let first_range = i as u64 + 1;
            let second_range = first_range + 1;
            let x = uniform_below(&mut self.inner, first_range * second_range);

            slice.swap(i, (x / second_range) as usize);
            slice.swap(i + 1, (x % second_range) as usize);
            i += 2;
        }
    }
}

/// Uniform integer in `0..range` from a 32-bit generator.
///
/// Multiply-and-shift with rejection on the low word (Lemire, "Fast Random
/// Integer Generation in an Interval", 2019). `range` must be in
/// `1..=2^32`; a full 32-bit range takes the raw output.
fn uniform_below<R: RngCore>(rng: &mut R, range: u64) -> u64 {
    debug_assert!(range >= 1 && range <= 1 << 32);
    if range == 1 << 32 {
        return u64::from(rng.next_u32());
    }

    let range32 = range as u32;
    let mut product = u64::from(rng.next_u32()) * range;
    let mut low = product as u32;
    if low < range32 {
        let threshold = range32.wrapping_neg() % range32;
        while low < threshold {
            product = u64::from(rng.next_u32()) * range;
            low = product as u32;
        }
    }
    product >> 32
}
