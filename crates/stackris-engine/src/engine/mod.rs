//! Session logic built on the core piece types.
//!
//! This module provides the containers and orchestration that implement the
//! turn-based piece supply:
//!
//! - [`PieceSupply`] - Bounded circular queue of upcoming pieces (FIFO)
//! - [`PieceReserve`] - Bounded stack of held-back pieces (LIFO)
//! - [`swap_front_top`] / [`swap_triple`] - Atomic exchanges between the two
//! - [`PieceGenerator`] - Seeded piece generation with monotonic ids
//! - [`PieceSeed`] - Seed for deterministic piece generation
//! - [`SessionStats`] - Per-session command counters
//! - [`SupplySession`] - Owns all of the above for one interactive session
//!
//! # Session Flow
//!
//! A session progresses as follows:
//!
//! 1. Create a [`SupplySession`]; the supply is pre-filled to capacity
//! 2. Each command draws, reserves, recalls, or exchanges pieces
//! 3. Every successful draw is followed by a refill, so the supply is full
//!    again before the next command
//! 4. Repeat until the player quits
//!
//! # Example
//!
//! ```
//! use stackris_engine::SupplySession;
//!
//! let mut session = SupplySession::new();
//!
//! // Draw the front piece; the supply refills itself.
//! let piece = session.play_piece();
//! println!("played {piece}");
//! assert!(session.supply().is_full());
//!
//! // Hold a piece back for later.
//! session.reserve_piece().unwrap();
//! assert_eq!(session.reserve().len(), 1);
//! ```

pub use self::{
    exchange::*, piece_generator::*, piece_reserve::*, piece_supply::*, session_stats::*,
    supply_session::*,
};

mod exchange;
mod piece_generator;
mod piece_reserve;
mod piece_supply;
mod session_stats;
mod supply_session;
