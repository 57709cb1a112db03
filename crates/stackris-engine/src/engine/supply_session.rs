use rand::Rng as _;

use crate::{CapacityExceededError, EmptyReserveError, ExchangeError, core::Piece};

use super::{PieceGenerator, PieceReserve, PieceSeed, PieceSupply, SessionStats, exchange};

/// One interactive session: the supply, the reserve, and the generator that
/// feeds them.
///
/// The session owns both containers for its whole lifetime and maps each
/// user command onto exactly one container or exchange operation. The supply
/// is pre-filled on construction and every successful draw is followed by a
/// refill, so it holds [`PieceSupply::CAPACITY`] pieces whenever the session
/// is waiting for a command. Commands that fail return an error and leave
/// both containers exactly as they were.
///
/// # Example
///
/// ```
/// use stackris_engine::SupplySession;
///
/// let mut session = SupplySession::new();
/// assert!(session.supply().is_full());
///
/// // Draw the front piece; a fresh piece takes its place at the back.
/// let played = session.play_piece();
/// assert!(session.supply().is_full());
///
/// // Held-back pieces come back in LIFO order.
/// let reserved = session.reserve_piece().unwrap();
/// assert_eq!(session.recall_piece().unwrap(), reserved);
/// ```
#[derive(Debug, Clone)]
pub struct SupplySession {
    supply: PieceSupply,
    reserve: PieceReserve,
    generator: PieceGenerator,
    stats: SessionStats,
    seed: PieceSeed,
}

impl Default for SupplySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplySession {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed so the piece sequence
    /// can be reproduced.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        let mut generator = PieceGenerator::with_seed(seed);
        let mut supply = PieceSupply::new();
        while !supply.is_full() {
            supply.enqueue(generator.generate());
        }
        Self {
            supply,
            reserve: PieceReserve::new(),
            generator,
            stats: SessionStats::new(),
            seed,
        }
    }

    #[must_use]
    pub fn supply(&self) -> &PieceSupply {
        &self.supply
    }

    #[must_use]
    pub fn reserve(&self) -> &PieceReserve {
        &self.reserve
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Returns the seed this session was created with.
    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }

    /// Draws the front piece for play.
    ///
    /// The supply refills itself immediately, so it is full again when this
    /// returns.
    pub fn play_piece(&mut self) -> Piece {
        let piece = self.draw_from_supply();
        self.stats.record_play();
        piece
    }

    /// Moves the front piece onto the reserve and returns it.
    ///
    /// Fails when the reserve is already full. The check happens before the
    /// draw, so a rejected command removes nothing from the supply.
    pub fn reserve_piece(&mut self) -> Result<Piece, CapacityExceededError> {
        if self.reserve.is_full() {
            return Err(CapacityExceededError);
        }
        let piece = self.draw_from_supply();
        self.reserve
            .push(piece)
            .expect("reserve was checked to have room");
        self.stats.record_reserve();
        Ok(piece)
    }

    /// Takes the top piece back off the reserve for play.
    ///
    /// The supply is not involved; only the reserve shrinks.
    pub fn recall_piece(&mut self) -> Result<Piece, EmptyReserveError> {
        let piece = self.reserve.pop().ok_or(EmptyReserveError)?;
        self.stats.record_recall();
        Ok(piece)
    }

    /// Swaps the supply's front piece with the reserve's top piece.
    pub fn swap_front_top(&mut self) -> Result<(), ExchangeError> {
        exchange::swap_front_top(&mut self.supply, &mut self.reserve)?;
        self.stats.record_front_swap();
        Ok(())
    }

    /// Swaps the front three supply pieces with the full reserve.
    pub fn swap_triple(&mut self) -> Result<(), ExchangeError> {
        exchange::swap_triple(&mut self.supply, &mut self.reserve)?;
        self.stats.record_triple_swap();
        Ok(())
    }

    /// Dequeues the front piece and enqueues a freshly generated one in the
    /// same step.
    fn draw_from_supply(&mut self) -> Piece {
        let piece = self
            .supply
            .dequeue()
            .expect("supply is never left empty between commands");
        self.supply.enqueue(self.generator.generate());
        piece
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_seed() -> PieceSeed {
        "5eed5eed5eed5eed5eed5eed5eed5eed".parse().unwrap()
    }

    fn session() -> SupplySession {
        SupplySession::with_seed(fixed_seed())
    }

    fn supply_ids(session: &SupplySession) -> Vec<u64> {
        session
            .supply()
            .iter()
            .map(|piece| piece.id().as_u64())
            .collect()
    }

    fn reserve_ids(session: &SupplySession) -> Vec<u64> {
        session
            .reserve()
            .iter()
            .map(|piece| piece.id().as_u64())
            .collect()
    }

    #[test]
    fn test_new_session_has_full_supply_and_empty_reserve() {
        let session = session();
        assert!(session.supply().is_full());
        assert_eq!(supply_ids(&session), vec![1, 2, 3, 4, 5]);
        assert!(session.reserve().is_empty());
        assert_eq!(session.stats().total_commands(), 0);
    }

    #[test]
    fn test_play_piece_draws_front_and_refills_at_back() {
        let mut session = session();

        let played = session.play_piece();
        assert_eq!(played.id().as_u64(), 1);
        assert!(session.supply().is_full());
        assert_eq!(supply_ids(&session), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_reserve_piece_moves_front_onto_reserve_top() {
        let mut session = session();

        let reserved = session.reserve_piece().unwrap();
        assert_eq!(reserved.id().as_u64(), 1);
        assert_eq!(session.reserve().top(), Some(reserved));
        assert!(session.supply().is_full());
        assert_eq!(supply_ids(&session), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_reserve_piece_on_full_reserve_draws_nothing() {
        let mut session = session();
        for _ in 0..PieceReserve::CAPACITY {
            session.reserve_piece().unwrap();
        }
        let supply_before = session.supply().clone();
        let reserve_before = session.reserve().clone();

        let result = session.reserve_piece();
        assert!(result.is_err(), "a full reserve must reject the command");
        assert_eq!(session.supply(), &supply_before);
        assert_eq!(session.reserve(), &reserve_before);
        assert_eq!(session.stats().reserved(), PieceReserve::CAPACITY);
    }

    #[test]
    fn test_recall_piece_returns_most_recently_reserved() {
        let mut session = session();
        session.reserve_piece().unwrap();
        let second = session.reserve_piece().unwrap();

        let recalled = session.recall_piece().unwrap();
        assert_eq!(recalled, second);
        assert_eq!(session.reserve().len(), 1);
    }

    #[test]
    fn test_recall_piece_on_empty_reserve_fails() {
        let mut session = session();
        let supply_before = session.supply().clone();

        assert!(session.recall_piece().is_err());
        assert_eq!(session.supply(), &supply_before);
        assert_eq!(session.stats().recalled(), 0);
    }

    #[test]
    fn test_swap_front_top_crosses_front_and_top() {
        let mut session = session();
        session.reserve_piece().unwrap();
        // Supply front is now id 2, reserve top is id 1.

        session.swap_front_top().unwrap();
        assert_eq!(supply_ids(&session), vec![1, 3, 4, 5, 6]);
        assert_eq!(reserve_ids(&session), vec![2]);
    }

    #[test]
    fn test_swap_front_top_on_empty_reserve_changes_nothing() {
        let mut session = session();
        let supply_before = session.supply().clone();

        let result = session.swap_front_top();
        assert!(matches!(result, Err(ExchangeError::ReserveEmpty)));
        assert_eq!(session.supply(), &supply_before);
        assert_eq!(session.stats().front_swaps(), 0);
    }

    #[test]
    fn test_reserving_three_then_swapping_triple_matches_walkthrough() {
        // Start: supply 1,2,3,4,5 front-to-back.
        let mut session = session();

        // Reserving three times stacks 1,2,3 bottom-to-top and refills the
        // supply up to id 8.
        for _ in 0..3 {
            session.reserve_piece().unwrap();
        }
        assert_eq!(supply_ids(&session), vec![4, 5, 6, 7, 8]);
        assert_eq!(reserve_ids(&session), vec![1, 2, 3]);

        // The triple swap trades positions pairwise: front three 4,5,6
        // against bottom-to-top 1,2,3.
        session.swap_triple().unwrap();
        assert_eq!(supply_ids(&session), vec![1, 2, 3, 7, 8]);
        assert_eq!(reserve_ids(&session), vec![4, 5, 6]);
    }

    #[test]
    fn test_swap_triple_with_partial_reserve_changes_nothing() {
        let mut session = session();
        session.reserve_piece().unwrap();
        session.reserve_piece().unwrap();
        let supply_before = session.supply().clone();
        let reserve_before = session.reserve().clone();

        let result = session.swap_triple();
        assert!(matches!(result, Err(ExchangeError::ReserveNotFull)));
        assert_eq!(session.supply(), &supply_before);
        assert_eq!(session.reserve(), &reserve_before);
        assert_eq!(session.stats().triple_swaps(), 0);
    }

    #[test]
    fn test_supply_stays_full_through_mixed_commands() {
        let mut session = session();

        session.play_piece();
        session.reserve_piece().unwrap();
        assert!(session.supply().is_full());

        session.swap_front_top().unwrap();
        assert!(session.supply().is_full());

        session.reserve_piece().unwrap();
        session.reserve_piece().unwrap();
        session.swap_triple().unwrap();
        assert!(session.supply().is_full());

        session.recall_piece().unwrap();
        session.play_piece();
        assert!(session.supply().is_full());
    }

    #[test]
    fn test_stats_count_only_completed_commands() {
        let mut session = session();

        session.play_piece();
        session.play_piece();
        session.reserve_piece().unwrap();
        session.swap_front_top().unwrap();
        session.recall_piece().unwrap();

        // Failures afterwards must not move any counter.
        let _ = session.recall_piece();
        let _ = session.swap_triple();

        let stats = session.stats();
        assert_eq!(stats.played(), 2);
        assert_eq!(stats.reserved(), 1);
        assert_eq!(stats.recalled(), 1);
        assert_eq!(stats.front_swaps(), 1);
        assert_eq!(stats.triple_swaps(), 0);
        assert_eq!(stats.total_commands(), 5);
    }

    #[test]
    fn test_ids_stay_unique_across_commands() {
        let mut session = session();
        let mut seen = Vec::new();

        for _ in 0..3 {
            session.reserve_piece().unwrap();
        }
        session.swap_triple().unwrap();
        for _ in 0..10 {
            seen.push(session.play_piece().id().as_u64());
        }
        seen.extend(supply_ids(&session));
        seen.extend(reserve_ids(&session));

        let mut deduped = seen.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), seen.len(), "no id may ever repeat");
    }

    #[test]
    fn test_same_seed_reproduces_session() {
        let mut session1 = SupplySession::with_seed(fixed_seed());
        let mut session2 = SupplySession::with_seed(fixed_seed());

        for _ in 0..10 {
            assert_eq!(session1.play_piece(), session2.play_piece());
        }
        assert_eq!(supply_ids(&session1), supply_ids(&session2));
    }

    #[test]
    fn test_seed_is_remembered_for_replay() {
        let session = session();
        assert_eq!(session.seed(), fixed_seed());
    }
}
