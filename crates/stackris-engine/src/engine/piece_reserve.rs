use arrayvec::ArrayVec;

use crate::{CapacityExceededError, core::Piece};

/// Number of pieces the reserve holds when full.
const RESERVE_CAPACITY: usize = 3;

/// The reserve stack: a bounded LIFO of held-back pieces.
///
/// Unlike the supply, the reserve is never replenished on its own; it only
/// changes through explicit pushes, pops, and exchanges, and it rejects
/// pushes once [`Self::CAPACITY`] pieces are held.
///
/// # Example
///
/// ```
/// use stackris_engine::{Piece, PieceId, PieceReserve, PieceShape};
///
/// let mut reserve = PieceReserve::new();
/// reserve.push(Piece::new(PieceShape::L, PieceId::new(1))).unwrap();
/// reserve.push(Piece::new(PieceShape::J, PieceId::new(2))).unwrap();
///
/// // Last in, first out.
/// assert_eq!(reserve.pop().map(|piece| piece.id().as_u64()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceReserve {
    pieces: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl Default for PieceReserve {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceReserve {
    /// Fixed capacity of the reserve.
    pub const CAPACITY: usize = RESERVE_CAPACITY;

    /// Creates an empty reserve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pieces: ArrayVec::new(),
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns the number of pieces currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Pushes `piece` on top of the reserve.
    ///
    /// A full reserve rejects the push and stays unchanged.
    pub fn push(&mut self, piece: Piece) -> Result<(), CapacityExceededError> {
        self.pieces
            .try_push(piece)
            .map_err(|_| CapacityExceededError)
    }

    /// Removes and returns the top piece, or `None` if the reserve is empty.
    pub fn pop(&mut self) -> Option<Piece> {
        self.pieces.pop()
    }

    /// Returns the top piece without removing it.
    #[must_use]
    pub fn top(&self) -> Option<Piece> {
        self.pieces.last().copied()
    }

    /// Iterates over the held pieces in bottom-to-top order.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces.iter().copied()
    }

    /// Mutable access to the piece at `index`, counting from the bottom.
    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Piece> {
        self.pieces.get_mut(index)
    }

    /// Mutable access to the top piece.
    pub(crate) fn top_mut(&mut self) -> Option<&mut Piece> {
        self.pieces.last_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{PieceId, PieceShape};

    use super::*;

    fn piece(id: u64) -> Piece {
        Piece::new(PieceShape::S, PieceId::new(id))
    }

    #[test]
    fn test_pop_returns_pieces_in_reverse_push_order() {
        let mut reserve = PieceReserve::new();
        for id in 1..=3 {
            reserve.push(piece(id)).unwrap();
        }

        assert_eq!(reserve.pop(), Some(piece(3)));
        assert_eq!(reserve.pop(), Some(piece(2)));
        assert_eq!(reserve.pop(), Some(piece(1)));
        assert_eq!(reserve.pop(), None);
    }

    #[test]
    fn test_push_on_full_reserve_fails_without_mutation() {
        let mut reserve = PieceReserve::new();
        for id in 1..=3 {
            reserve.push(piece(id)).unwrap();
        }
        assert!(reserve.is_full());

        let before = reserve.clone();
        let result = reserve.push(piece(99));
        assert!(result.is_err(), "push on a full reserve must be rejected");
        assert_eq!(reserve, before);
    }

    #[test]
    fn test_push_then_pop_restores_prior_state() {
        let mut reserve = PieceReserve::new();
        reserve.push(piece(1)).unwrap();
        let before = reserve.clone();

        reserve.push(piece(2)).unwrap();
        assert_eq!(reserve.pop(), Some(piece(2)));
        assert_eq!(reserve, before);
    }

    #[test]
    fn test_top_matches_most_recent_push() {
        let mut reserve = PieceReserve::new();
        assert_eq!(reserve.top(), None);

        reserve.push(piece(4)).unwrap();
        assert_eq!(reserve.top(), Some(piece(4)));

        reserve.push(piece(5)).unwrap();
        assert_eq!(reserve.top(), Some(piece(5)));
    }

    #[test]
    fn test_iter_walks_bottom_to_top() {
        let mut reserve = PieceReserve::new();
        for id in 1..=3 {
            reserve.push(piece(id)).unwrap();
        }

        let ids: Vec<_> = reserve.iter().map(|piece| piece.id().as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
