use std::str::FromStr;

use cosmwasm_std::{
    from_json, Coin, Decimal, Empty, QuerierWrapper, QueryRequest, StdError, StdResult, Uint128,
};
use osmosis_std::{
    shim::{Any, Timestamp},
    types::osmosis::{
        concentratedliquidity::v1beta1::Pool as ConcentratedLiquidityPool,
        cosmwasmpool::v1beta1::CosmWasmPool as OsmoCosmWasmPool,
        gamm::{
            poolmodels::stableswap::v1beta1::Pool as StableSwapPool,
            v1beta1::Pool as BalancerPool,
        },
        poolmanager::v1beta1::{
            EstimateSwapExactAmountInRequest, EstimateSwapExactAmountInResponse, PoolRequest,
            PoolResponse, SwapAmountInRoute,
        },
        twap::v1beta1::TwapQuerier,
    },
};
use prost::Message;
use serde::{Deserialize, Serialize};

/// Instantiate message of transmuter v1 and v2 pools. Only the denoms are read, other fields
/// are ignored.
#[derive(Serialize, Deserialize)]
struct TransmuterInstantiateMsg {
    pub pool_asset_denoms: Vec<String>,
}

/// Instantiate message of transmuter v3 pools, where every denom comes with its normalization
/// factor.
#[derive(Serialize, Deserialize)]
struct TransmuterV3InstantiateMsg {
    pub pool_asset_configs: Vec<AssetConfig>,
}

#[derive(Serialize, Deserialize)]
struct AssetConfig {
    pub denom: String,
}

/// Denoms of a CosmWasm pool, read from whichever transmuter instantiate message it was created
/// with. Unknown versions leave the denoms empty, so every membership check against the pool
/// fails instead of the lookup itself.
fn cosmwasm_pool_denoms(instantiate_msg: &[u8]) -> Vec<String> {
    if let Ok(msg) = from_json::<TransmuterInstantiateMsg>(instantiate_msg) {
        return msg.pool_asset_denoms;
    }

    if let Ok(msg) = from_json::<TransmuterV3InstantiateMsg>(instantiate_msg) {
        return msg.pool_asset_configs.into_iter().map(|config| config.denom).collect();
    }

    vec![]
}

#[derive(Debug, PartialEq)]
pub struct CosmWasmPool {
    pub id: u64,
    pub pool_asset_denoms: Vec<String>,
}

// Get denoms from different type of the pool
pub trait CommonPoolData {
    fn get_pool_id(&self) -> u64;
    fn get_pool_denoms(&self) -> Vec<String>;
}

#[derive(Debug, PartialEq)]
pub enum Pool {
    Balancer(BalancerPool),
    StableSwap(StableSwapPool),
    ConcentratedLiquidity(ConcentratedLiquidityPool),
    CosmWasm(CosmWasmPool),
}

impl CommonPoolData for Pool {
    fn get_pool_id(&self) -> u64 {
        match self {
            Pool::Balancer(pool) => pool.id,
            Pool::StableSwap(pool) => pool.id,
            Pool::ConcentratedLiquidity(pool) => pool.id,
            Pool::CosmWasm(pool) => pool.id,
        }
    }

    fn get_pool_denoms(&self) -> Vec<String> {
        match self {
            Pool::Balancer(pool) => pool
                .pool_assets
                .iter()
                .flat_map(|asset| &asset.token)
                .map(|token| token.denom.clone())
                .collect(),
            Pool::StableSwap(pool) => {
                pool.pool_liquidity.iter().map(|pl| pl.denom.clone()).collect()
            }
            Pool::ConcentratedLiquidity(pool) => {
                vec![pool.token0.clone(), pool.token1.clone()]
            }
            Pool::CosmWasm(pool) => pool.pool_asset_denoms.clone(),
        }
    }
}

impl Pool {
    pub fn has_denom(&self, denom: &str) -> bool {
        self.get_pool_denoms().iter().any(|d| d == denom)
    }
}

impl TryFrom<Any> for Pool {
    type Error = StdError;

    fn try_from(value: Any) -> Result<Self, Self::Error> {
        let parse_err = |target: &str, err: prost::DecodeError| StdError::ParseErr {
            target_type: target.to_string(),
            msg: err.to_string(),
        };

        match value.type_url.as_str() {
            BalancerPool::TYPE_URL => BalancerPool::decode(value.value.as_slice())
                .map(Pool::Balancer)
                .map_err(|e| parse_err(BalancerPool::TYPE_URL, e)),
            StableSwapPool::TYPE_URL => StableSwapPool::decode(value.value.as_slice())
                .map(Pool::StableSwap)
                .map_err(|e| parse_err(StableSwapPool::TYPE_URL, e)),
            ConcentratedLiquidityPool::TYPE_URL => {
                ConcentratedLiquidityPool::decode(value.value.as_slice())
                    .map(Pool::ConcentratedLiquidity)
                    .map_err(|e| parse_err(ConcentratedLiquidityPool::TYPE_URL, e))
            }
            OsmoCosmWasmPool::TYPE_URL => {
                let pool = OsmoCosmWasmPool::decode(value.value.as_slice())
                    .map_err(|e| parse_err(OsmoCosmWasmPool::TYPE_URL, e))?;
                Ok(Pool::CosmWasm(CosmWasmPool {
                    id: pool.pool_id,
                    pool_asset_denoms: cosmwasm_pool_denoms(&pool.instantiate_msg),
                }))
            }
            type_url => Err(StdError::parse_err(
                "Pool",
                format!("Unsupported pool type: {type_url}"),
            )),
        }
    }
}

/// Query an Osmosis pool through the pool manager
pub fn query_pool(querier: &QuerierWrapper, pool_id: u64) -> StdResult<Pool> {
    let req: QueryRequest<Empty> = PoolRequest {
        pool_id,
    }
    .into();
    let res: PoolResponse = querier.query(&req)?;
    res.pool.ok_or_else(|| StdError::not_found("pool"))?.try_into() // convert `Any` to `Pool`
}

/// Estimate the amount of `token_out_denom` received for swapping `coin_in` through a single pool
pub fn query_swap_estimate(
    querier: &QuerierWrapper,
    pool_id: u64,
    coin_in: &Coin,
    token_out_denom: &str,
) -> StdResult<Uint128> {
    let req: QueryRequest<Empty> = EstimateSwapExactAmountInRequest {
        pool_id,
        token_in: coin_in.to_string(),
        routes: vec![SwapAmountInRoute {
            pool_id,
            token_out_denom: token_out_denom.to_string(),
        }],
        ..Default::default()
    }
    .into();
    let res: EstimateSwapExactAmountInResponse = querier.query(&req)?;
    Uint128::from_str(&res.token_out_amount)
}

/// Query arithmetic twap price of `base_denom` quoted in `quote_denom`.
/// `start_time` must be within 48 hours of current block time.
pub fn query_arithmetic_twap_price(
    querier: &QuerierWrapper,
    pool_id: u64,
    base_denom: &str,
    quote_denom: &str,
    start_time: u64,
) -> StdResult<Decimal> {
    let seconds = i64::try_from(start_time).map_err(|_| {
        StdError::generic_err(format!("start time {start_time} is out of range"))
    })?;
    let twap_res = TwapQuerier::new(querier).arithmetic_twap_to_now(
        pool_id,
        base_denom.to_string(),
        quote_denom.to_string(),
        Some(Timestamp {
            seconds,
            nanos: 0,
        }),
    )?;
    let price = Decimal::from_str(&twap_res.arithmetic_twap)?;
    Ok(price)
}
