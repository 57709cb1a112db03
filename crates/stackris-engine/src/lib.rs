pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("reserve is full")]
pub struct CapacityExceededError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("reserve is empty")]
pub struct EmptyReserveError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ExchangeError {
    #[display("reserve is empty")]
    ReserveEmpty,
    #[display("reserve needs 3 pieces for this exchange")]
    ReserveNotFull,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid piece seed: expected 32 hex characters")]
pub struct ParsePieceSeedError;
