use cosmwasm_std::{
    from_json, testing::MockQuerier, Decimal, Empty, Querier, QuerierResult, QueryRequest,
    SystemError, SystemResult,
};
use osmosis_std::{
    shim::Any,
    types::{
        cosmos::base::v1beta1::Coin as OsmoCoin,
        osmosis::{
            gamm::v1beta1::{Pool as BalancerPool, PoolAsset},
            twap::v1beta1::ArithmeticTwapToNowResponse,
        },
    },
};

use crate::osmosis_querier::{OsmosisQuerier, PriceKey};

pub struct SwapRouterMockQuerier {
    base: MockQuerier<Empty>,
    osmosis_querier: OsmosisQuerier,
}

impl Querier for SwapRouterMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {e}"),
                    request: bin_request.into(),
                })
            }
        };

        self.handle_query(&request)
    }
}

impl SwapRouterMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        SwapRouterMockQuerier {
            base,
            osmosis_querier: OsmosisQuerier::default(),
        }
    }

    /// Register a pool of any type, encoded the way the pool manager returns it
    pub fn set_pool(&mut self, pool_id: u64, pool: Any) {
        self.osmosis_querier.pools.insert(pool_id, pool);
    }

    /// Register a balancer pool holding the given denoms with equal weights
    pub fn set_balancer_pool(&mut self, pool_id: u64, denoms: &[&str]) {
        let pool = BalancerPool {
            id: pool_id,
            pool_assets: denoms
                .iter()
                .map(|denom| PoolAsset {
                    token: Some(OsmoCoin {
                        denom: denom.to_string(),
                        amount: "1000000".to_string(),
                    }),
                    weight: "100".to_string(),
                })
                .collect(),
            ..Default::default()
        };
        self.set_pool(pool_id, pool.to_any());
    }

    /// Set how many units of `denom_out` one unit of `denom_in` buys in the pool
    pub fn set_swap_rate(&mut self, pool_id: u64, denom_in: &str, denom_out: &str, rate: Decimal) {
        let price_key = PriceKey {
            pool_id,
            denom_in: denom_in.to_string(),
            denom_out: denom_out.to_string(),
        };
        self.osmosis_querier.swap_rates.insert(price_key, rate);
    }

    pub fn set_arithmetic_twap_price(
        &mut self,
        pool_id: u64,
        base_asset_denom: &str,
        quote_asset_denom: &str,
        price: Decimal,
    ) {
        let price_key = PriceKey {
            pool_id,
            denom_in: base_asset_denom.to_string(),
            denom_out: quote_asset_denom.to_string(),
        };
        self.osmosis_querier.arithmetic_twap_prices.insert(
            price_key,
            ArithmeticTwapToNowResponse {
                arithmetic_twap: price.to_string(),
            },
        );
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Stargate {
                path,
                data,
            } => {
                if let Ok(querier_res) = self.osmosis_querier.handle_stargate_query(path, data) {
                    return querier_res;
                }

                panic!("[mock]: Unsupported stargate query, path: {path:?}");
            }

            _ => self.base.handle_query(request),
        }
    }
}
