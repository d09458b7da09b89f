use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Decimal, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// The contract's owner, the only account allowed to set routes
    pub owner: String,
}

#[cw_serde]
pub enum ExecuteMsg<Route> {
    /// Register the route for swapping `input_denom` into `output_denom`.
    ///
    /// Overwrites any route previously registered for the same ordered pair. Owner only.
    SetRoute {
        input_denom: String,
        output_denom: String,
        pool_route: Route,
    },
    /// Swap the attached `input_coin` into `output_denom` along the registered route.
    ///
    /// The attached funds must be exactly `input_coin`. Fails if the final output amount is
    /// lower than `minimum_output_amount`.
    Swap {
        input_coin: Coin,
        output_denom: String,
        minimum_output_amount: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Query contract owner
    #[returns(GetOwnerResponse)]
    GetOwner {},
    /// Get route for swapping an input denom into an output denom
    #[returns(GetRouteResponse<cosmwasm_std::Empty>)]
    GetRoute {
        input_denom: String,
        output_denom: String,
    },
    /// Enumerate all registered routes
    #[returns(RoutesResponse<cosmwasm_std::Empty>)]
    GetRoutes {
        start_after: Option<(String, String)>,
        limit: Option<u32>,
    },
    /// Estimate the output of swapping `input_coin` along the registered route
    #[returns(EstimateSwapResponse)]
    EstimateSwap {
        input_coin: Coin,
        output_denom: String,
    },
    /// Arithmetic TWAP of `output_denom` quoted in `input_denom` along the registered route,
    /// from `start_time` (unix seconds) to now.
    /// Warning: Do not use this as an oracle price feed.
    #[returns(TwapResponse)]
    ArithmeticTwapToNow {
        input_denom: String,
        output_denom: String,
        start_time: u64,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct GetOwnerResponse {
    pub owner: String,
}

#[cw_serde]
pub struct GetRouteResponse<Route> {
    pub pool_route: Route,
}

#[cw_serde]
pub struct RouteResponse<Route> {
    pub input_denom: String,
    pub output_denom: String,
    pub pool_route: Route,
}

pub type RoutesResponse<Route> = Vec<RouteResponse<Route>>;

#[cw_serde]
pub struct EstimateSwapResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct TwapResponse {
    pub price: Decimal,
}

/// Set as the data of a successful swap
#[cw_serde]
pub struct SwapResponse {
    pub output_coin: Coin,
}
