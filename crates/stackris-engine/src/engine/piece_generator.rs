use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;

use crate::{
    ParsePieceSeedError,
    core::{Piece, PieceId},
};

/// Seed for deterministic piece generation.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator for piece generation. Using the same seed will produce the same
/// sequence of pieces, enabling:
///
/// - Reproducible sessions for debugging
/// - Replaying a remembered piece sequence
/// - Deterministic testing
///
/// The textual form is 32 hex characters, big-endian, matching what the
/// session prints on exit.
///
/// # Example
///
/// ```
/// use stackris_engine::PieceSeed;
/// use rand::Rng as _;
///
/// // Generate a random seed and restore it from its textual form.
/// let seed: PieceSeed = rand::rng().random();
/// let restored: PieceSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, restored);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParsePieceSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParsePieceSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random `PieceSeed` values using the standard random
/// distribution, so `rng.random()` works.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

/// Issues freshly generated pieces: a uniformly random shape paired with the
/// next sequence id.
///
/// The id counter lives here. Ids start at 1 and increase by one per
/// generated piece, so within a session every piece carries a distinct id in
/// generation order.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg32,
    next_id: u64,
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceGenerator {
    /// Creates a generator with a random seed.
    ///
    /// For deterministic piece generation, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic piece
    /// generation.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            next_id: 1,
        }
    }

    /// Generates the next piece.
    pub fn generate(&mut self) -> Piece {
        let shape = self.rng.random();
        let id = PieceId::new(self.next_id);
        self.next_id += 1;
        Piece::new(shape, id)
    }
}
