use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128};

/// Progress of the swap currently being executed.
///
/// Lives only for the duration of a single `Swap` transaction: saved before the first hop is
/// dispatched, updated on every hop reply and removed once the output has been sent.
#[cw_serde]
pub struct SwapState<R> {
    /// Receiver of the swap output
    pub recipient: Addr,
    pub route: R,
    /// Index of the hop whose reply is awaited
    pub step: usize,
    /// Denom and amount going into the awaited hop, or coming out of the last completed one
    pub coin: Coin,
    pub minimum_output_amount: Uint128,
}
