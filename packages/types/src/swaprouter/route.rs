use std::fmt;

use cosmwasm_schema::cw_serde;
use osmosis_std::types::osmosis::poolmanager::v1beta1;

/// One leg of a route: swap through `pool_id`, receiving `token_out_denom`.
///
/// The input denom of a hop is the output denom of the previous hop, or the route's input
/// denom for the first hop.
#[cw_serde]
pub struct SwapAmountInRoute {
    pub pool_id: u64,
    pub token_out_denom: String,
}

impl SwapAmountInRoute {
    pub fn new(pool_id: u64, token_out_denom: impl Into<String>) -> Self {
        Self {
            pool_id,
            token_out_denom: token_out_denom.into(),
        }
    }
}

impl fmt::Display for SwapAmountInRoute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.pool_id, self.token_out_denom)
    }
}

impl From<SwapAmountInRoute> for v1beta1::SwapAmountInRoute {
    fn from(hop: SwapAmountInRoute) -> Self {
        Self {
            pool_id: hop.pool_id,
            token_out_denom: hop.token_out_denom,
        }
    }
}
