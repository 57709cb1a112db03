use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Enum representing the shape of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceShape {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// T-piece.
    T = 6,
}

impl Distribution<PieceShape> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceShape {
        match rng.random_range(0..=6) {
            0 => PieceShape::I,
            1 => PieceShape::O,
            2 => PieceShape::S,
            3 => PieceShape::Z,
            4 => PieceShape::J,
            5 => PieceShape::L,
            _ => PieceShape::T,
        }
    }
}

impl PieceShape {
    /// Number of piece shapes (7).
    pub const LEN: usize = 7;

    /// Returns the single character representation of this shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackris_engine::PieceShape;
    ///
    /// assert_eq!(PieceShape::I.as_char(), 'I');
    /// assert_eq!(PieceShape::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceShape::I => 'I',
            PieceShape::O => 'O',
            PieceShape::S => 'S',
            PieceShape::Z => 'Z',
            PieceShape::J => 'J',
            PieceShape::L => 'L',
            PieceShape::T => 'T',
        }
    }

    /// Parses a shape from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackris_engine::PieceShape;
    ///
    /// assert_eq!(PieceShape::from_char('I'), Some(PieceShape::I));
    /// assert_eq!(PieceShape::from_char('T'), Some(PieceShape::T));
    /// assert_eq!(PieceShape::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceShape::I),
            'O' => Some(PieceShape::O),
            'S' => Some(PieceShape::S),
            'Z' => Some(PieceShape::Z),
            'J' => Some(PieceShape::J),
            'L' => Some(PieceShape::L),
            'T' => Some(PieceShape::T),
            _ => None,
        }
    }
}

/// Identifier of a generated piece.
///
/// Ids are issued by [`PieceGenerator`](crate::PieceGenerator) in increasing
/// order starting from 1 and are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PieceId(u64);

impl PieceId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward to u64 so width/fill specifiers apply to the raw number.
        self.0.fmt(f)
    }
}

/// A game piece: a shape tag paired with its unique id.
///
/// Pieces are immutable values. Exactly one container holds a given piece at
/// any time; moving it between containers transfers the whole value.
///
/// # Example
///
/// ```
/// use stackris_engine::{Piece, PieceId, PieceShape};
///
/// let piece = Piece::new(PieceShape::T, PieceId::new(7));
/// assert_eq!(piece.to_string(), "[T-07]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: PieceShape,
    id: PieceId,
}

impl Piece {
    #[must_use]
    pub const fn new(shape: PieceShape, id: PieceId) -> Self {
        Self { shape, id }
    }

    #[must_use]
    pub const fn shape(&self) -> PieceShape {
        self.shape
    }

    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{:02}]", self.shape.as_char(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_shape_char_conversion() {
        assert_eq!(PieceShape::I.as_char(), 'I');
        assert_eq!(PieceShape::O.as_char(), 'O');
        assert_eq!(PieceShape::S.as_char(), 'S');
        assert_eq!(PieceShape::Z.as_char(), 'Z');
        assert_eq!(PieceShape::J.as_char(), 'J');
        assert_eq!(PieceShape::L.as_char(), 'L');
        assert_eq!(PieceShape::T.as_char(), 'T');

        assert_eq!(PieceShape::from_char('I'), Some(PieceShape::I));
        assert_eq!(PieceShape::from_char('O'), Some(PieceShape::O));
        assert_eq!(PieceShape::from_char('S'), Some(PieceShape::S));
        assert_eq!(PieceShape::from_char('Z'), Some(PieceShape::Z));
        assert_eq!(PieceShape::from_char('J'), Some(PieceShape::J));
        assert_eq!(PieceShape::from_char('L'), Some(PieceShape::L));
        assert_eq!(PieceShape::from_char('T'), Some(PieceShape::T));

        assert_eq!(PieceShape::from_char('X'), None);
        assert_eq!(PieceShape::from_char('t'), None);
    }

    #[test]
    fn test_piece_display_pads_small_ids() {
        let piece = Piece::new(PieceShape::I, PieceId::new(1));
        assert_eq!(piece.to_string(), "[I-01]");

        let piece = Piece::new(PieceShape::Z, PieceId::new(42));
        assert_eq!(piece.to_string(), "[Z-42]");
    }

    #[test]
    fn test_piece_display_wide_ids_keep_all_digits() {
        let piece = Piece::new(PieceShape::L, PieceId::new(123));
        assert_eq!(piece.to_string(), "[L-123]");
    }

    #[test]
    fn test_piece_id_ordering_follows_issue_order() {
        let earlier = PieceId::new(3);
        let later = PieceId::new(10);
        assert!(earlier < later);
        assert_eq!(earlier.as_u64(), 3);
    }
}
