use crate::core::Piece;

/// Number of pieces the supply holds when full.
const SUPPLY_CAPACITY: usize = 5;

/// The "next pieces" queue: a bounded FIFO ring of upcoming pieces.
///
/// Storage is a fixed array of [`Self::CAPACITY`] slots addressed through a
/// `head` cursor and a live-element count; logical position `i` lives in slot
/// `(head + i) % CAPACITY`, wrapping around the end of the array. Slots
/// outside the live window are always `None`.
///
/// During a session the supply is pre-filled to capacity and kept there by
/// the replace-on-draw policy in [`SupplySession`](crate::SupplySession), so
/// gameplay only ever observes a full supply.
///
/// # Example
///
/// ```
/// use stackris_engine::{Piece, PieceId, PieceShape, PieceSupply};
///
/// let mut supply = PieceSupply::new();
/// supply.enqueue(Piece::new(PieceShape::I, PieceId::new(1)));
/// supply.enqueue(Piece::new(PieceShape::O, PieceId::new(2)));
///
/// let first = supply.dequeue();
/// assert_eq!(first.map(|piece| piece.id().as_u64()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSupply {
    slots: [Option<Piece>; SUPPLY_CAPACITY],
    head: usize,
    len: usize,
}

impl Default for PieceSupply {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSupply {
    /// Fixed capacity of the supply.
    pub const CAPACITY: usize = SUPPLY_CAPACITY;

    /// Creates an empty supply.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; SUPPLY_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == SUPPLY_CAPACITY
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of pieces currently queued.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Inserts `piece` at the back of the queue.
    ///
    /// A full supply ignores the insert and stays unchanged; only the
    /// reserve treats overfilling as an error.
    pub fn enqueue(&mut self, piece: Piece) {
        if self.is_full() {
            return;
        }
        let back = (self.head + self.len) % SUPPLY_CAPACITY;
        self.slots[back] = Some(piece);
        self.len += 1;
    }

    /// Removes and returns the front piece, or `None` if the supply is
    /// empty.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.head]
            .take()
            .expect("live supply slots always hold a piece");
        self.head = (self.head + 1) % SUPPLY_CAPACITY;
        self.len -= 1;
        Some(piece)
    }

    /// Returns the front piece without removing it.
    #[must_use]
    pub const fn front(&self) -> Option<Piece> {
        self.slots[self.head]
    }

    /// Iterates over the queued pieces in front-to-back order.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).map(|i| {
            self.slots[(self.head + i) % SUPPLY_CAPACITY]
                .expect("live supply slots always hold a piece")
        })
    }

    /// Mutable access to the piece at logical position `index` (0 is the
    /// front), or `None` past the live window.
    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Piece> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % SUPPLY_CAPACITY].as_mut()
    }

    /// Mutable access to the front piece.
    pub(crate) fn front_mut(&mut self) -> Option<&mut Piece> {
        self.slot_mut(0)
    }
}
