use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, Coin, CosmosMsg, Empty, QuerierWrapper, StdResult, Uint128,
    WasmMsg,
};

use crate::swaprouter::{EstimateSwapResponse, ExecuteMsg, QueryMsg};

/// Handle used by other contracts to talk to a deployed swap router
#[cw_serde]
pub struct SwapRouterBase<T>(T);

impl<T> SwapRouterBase<T> {
    pub fn new(address: T) -> SwapRouterBase<T> {
        SwapRouterBase(address)
    }

    pub fn address(&self) -> &T {
        &self.0
    }
}

pub type SwapRouterUnchecked = SwapRouterBase<String>;
pub type SwapRouter = SwapRouterBase<Addr>;

impl From<SwapRouter> for SwapRouterUnchecked {
    fn from(s: SwapRouter) -> Self {
        Self(s.address().to_string())
    }
}

impl SwapRouterUnchecked {
    pub fn check(&self, api: &dyn Api) -> StdResult<SwapRouter> {
        Ok(SwapRouterBase::new(api.addr_validate(self.address())?))
    }
}

impl SwapRouter {
    /// Generate message for swapping `input_coin` along the router's registered route.
    /// The input coin is attached as funds.
    pub fn swap_msg(
        &self,
        input_coin: &Coin,
        output_denom: &str,
        minimum_output_amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.address().to_string(),
            msg: to_json_binary(&ExecuteMsg::<Empty>::Swap {
                input_coin: input_coin.clone(),
                output_denom: output_denom.to_string(),
                minimum_output_amount,
            })?,
            funds: vec![input_coin.clone()],
        }))
    }

    pub fn estimate_swap(
        &self,
        querier: &QuerierWrapper,
        input_coin: &Coin,
        output_denom: &str,
    ) -> StdResult<Uint128> {
        let res: EstimateSwapResponse = querier.query_wasm_smart(
            self.address().to_string(),
            &QueryMsg::EstimateSwap {
                input_coin: input_coin.clone(),
                output_denom: output_denom.to_string(),
            },
        )?;
        Ok(res.amount)
    }
}
