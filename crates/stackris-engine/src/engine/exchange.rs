use std::mem;

use crate::ExchangeError;

use super::{PieceReserve, PieceSupply};

/// Swaps the piece at the front of the supply with the piece on top of the
/// reserve.
///
/// Neither container changes size. An empty reserve fails the exchange and
/// leaves both containers untouched.
pub fn swap_front_top(
    supply: &mut PieceSupply,
    reserve: &mut PieceReserve,
) -> Result<(), ExchangeError> {
    let Some(top) = reserve.top_mut() else {
        return Err(ExchangeError::ReserveEmpty);
    };
    let front = supply
        .front_mut()
        .expect("exchanges run against a supply kept at full capacity");
    mem::swap(front, top);
    Ok(())
}

/// Swaps the front three supply positions with the whole reserve, pairing
/// supply position `i` with reserve slot `i` counted from the bottom.
///
/// The reserve must hold exactly [`PieceReserve::CAPACITY`] pieces; anything
/// less fails the exchange and leaves both containers untouched. The pairing
/// is positional, so the queue's front lands at the bottom of the stack
/// rather than on top.
pub fn swap_triple(
    supply: &mut PieceSupply,
    reserve: &mut PieceReserve,
) -> Result<(), ExchangeError> {
    if !reserve.is_full() {
        return Err(ExchangeError::ReserveNotFull);
    }
    for i in 0..PieceReserve::CAPACITY {
        let supply_slot = supply
            .slot_mut(i)
            .expect("exchanges run against a supply kept at full capacity");
        let reserve_slot = reserve.slot_mut(i).expect("reserve is full");
        mem::swap(supply_slot, reserve_slot);
    }
    Ok(())
}
