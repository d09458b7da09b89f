use std::fmt::{Debug, Display};

use cosmwasm_std::{
    Coin, CosmosMsg, CustomMsg, CustomQuery, Decimal, Env, QuerierWrapper, SubMsgResponse, Uint128,
};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Serialize};

use crate::ContractResult;

pub trait Route<M, Q>:
    Serialize + DeserializeOwned + Clone + Debug + Display + PartialEq + JsonSchema
where
    M: CustomMsg,
    Q: CustomQuery,
{
    /// Determine whether the route is valid, given a pair of input and output denoms
    fn validate(
        &self,
        querier: &QuerierWrapper<Q>,
        input_denom: &str,
        output_denom: &str,
    ) -> ContractResult<()>;

    /// Number of hops in the route
    fn hop_count(&self) -> usize;

    /// Denom received from the hop at `step` (0-based)
    fn hop_output_denom(&self, step: usize) -> Option<String>;

    /// Build the message executing the single hop at `step`, swapping `coin_in`
    fn build_hop_msg(&self, env: &Env, step: usize, coin_in: &Coin)
        -> ContractResult<CosmosMsg<M>>;

    /// Read the amount received by a hop from the backend's reply
    fn parse_hop_output(response: &SubMsgResponse) -> ContractResult<Uint128>;

    /// Estimate the output amount of swapping `coin_in` along the whole route
    fn estimate_swap(&self, querier: &QuerierWrapper<Q>, coin_in: &Coin)
        -> ContractResult<Uint128>;

    /// Arithmetic TWAP of the route's output denom quoted in `input_denom` since `start_time`
    fn query_twap_price(
        &self,
        querier: &QuerierWrapper<Q>,
        input_denom: &str,
        start_time: u64,
    ) -> ContractResult<Decimal>;
}
