use std::{collections::HashMap, str::FromStr};

use cosmwasm_std::{
    to_json_binary, Binary, ContractResult, Decimal, QuerierResult, SystemError, SystemResult,
    Uint128,
};
use osmosis_std::{
    shim::Any,
    types::osmosis::{
        poolmanager::v1beta1::{
            EstimateSwapExactAmountInRequest, EstimateSwapExactAmountInResponse, PoolRequest,
            PoolResponse,
        },
        twap::v1beta1::{ArithmeticTwapToNowRequest, ArithmeticTwapToNowResponse},
    },
};
use prost::{DecodeError, Message};

#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct PriceKey {
    pub pool_id: u64,
    pub denom_in: String,
    pub denom_out: String,
}

#[derive(Clone, Default)]
pub struct OsmosisQuerier {
    pub pools: HashMap<u64, Any>,

    /// Output per unit of input when swapping through a pool
    pub swap_rates: HashMap<PriceKey, Decimal>,
    pub arithmetic_twap_prices: HashMap<PriceKey, ArithmeticTwapToNowResponse>,
}

impl OsmosisQuerier {
    pub fn handle_stargate_query(&self, path: &str, data: &Binary) -> Result<QuerierResult, ()> {
        if path == "/osmosis.poolmanager.v1beta1.Query/Pool" {
            let parse_osmosis_query: Result<PoolRequest, DecodeError> =
                Message::decode(data.as_slice());
            if let Ok(osmosis_query) = parse_osmosis_query {
                return Ok(self.handle_query_pool_request(osmosis_query));
            }
        }

        if path == "/osmosis.poolmanager.v1beta1.Query/EstimateSwapExactAmountIn" {
            let parse_osmosis_query: Result<EstimateSwapExactAmountInRequest, DecodeError> =
                Message::decode(data.as_slice());
            if let Ok(osmosis_query) = parse_osmosis_query {
                return Ok(self.handle_estimate_swap_request(osmosis_query));
            }
        }

        if path == "/osmosis.twap.v1beta1.Query/ArithmeticTwapToNow" {
            let parse_osmosis_query: Result<ArithmeticTwapToNowRequest, DecodeError> =
                Message::decode(data.as_slice());
            if let Ok(osmosis_query) = parse_osmosis_query {
                return Ok(self.handle_query_arithmetic_twap_request(osmosis_query));
            }
        }

        Err(())
    }

    fn handle_query_pool_request(&self, request: PoolRequest) -> QuerierResult {
        let pool_id = request.pool_id;
        let res: ContractResult<Binary> = match self.pools.get(&pool_id) {
            Some(pool) => to_json_binary(&PoolResponse {
                pool: Some(pool.clone()),
            })
            .into(),
            None => Err(SystemError::InvalidRequest {
                error: format!("pool not found for pool id: {pool_id}"),
                request: Default::default(),
            })
            .into(),
        };
        Ok(res).into()
    }

    fn handle_estimate_swap_request(
        &self,
        request: EstimateSwapExactAmountInRequest,
    ) -> QuerierResult {
        let Some(hop) = request.routes.first() else {
            return invalid_request("estimate swap request without routes");
        };
        let Some((amount_in, denom_in)) = parse_coin(&request.token_in) else {
            return invalid_request(&format!("invalid token_in: {}", request.token_in));
        };

        let price_key = PriceKey {
            pool_id: hop.pool_id,
            denom_in,
            denom_out: hop.token_out_denom.clone(),
        };
        let res: ContractResult<Binary> = match self.swap_rates.get(&price_key) {
            Some(rate) => to_json_binary(&EstimateSwapExactAmountInResponse {
                token_out_amount: (amount_in * *rate).to_string(),
            })
            .into(),
            None => Err(SystemError::InvalidRequest {
                error: format!("swap rate is not found for price key: {price_key:?}"),
                request: Default::default(),
            })
            .into(),
        };
        Ok(res).into()
    }

    fn handle_query_arithmetic_twap_request(
        &self,
        request: ArithmeticTwapToNowRequest,
    ) -> QuerierResult {
        let price_key = PriceKey {
            pool_id: request.pool_id,
            denom_in: request.base_asset,
            denom_out: request.quote_asset,
        };
        let res: ContractResult<Binary> = match self.arithmetic_twap_prices.get(&price_key) {
            Some(query_response) => to_json_binary(&query_response).into(),
            None => Err(SystemError::InvalidRequest {
                error: format!(
                    "ArithmeticTwapToNowResponse is not found for price key: {price_key:?}"
                ),
                request: Default::default(),
            })
            .into(),
        };
        Ok(res).into()
    }
}

fn invalid_request(error: &str) -> QuerierResult {
    SystemResult::Err(SystemError::InvalidRequest {
        error: error.to_string(),
        request: Default::default(),
    })
}

/// Split a coin string such as `1000uosmo` into amount and denom
fn parse_coin(coin: &str) -> Option<(Uint128, String)> {
    let split_at = coin.find(|c: char| !c.is_ascii_digit())?;
    let (amount, denom) = coin.split_at(split_at);
    let amount = Uint128::from_str(amount).ok()?;
    Some((amount, denom.to_string()))
}
