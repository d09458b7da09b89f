use std::{fmt, str::FromStr};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Coin, CosmosMsg, Decimal, Empty, Env, QuerierWrapper, StdError, SubMsgResponse, Uint128,
};
use osmosis_std::types::{
    cosmos::base::v1beta1,
    osmosis::poolmanager::v1beta1::{MsgSwapExactAmountIn, MsgSwapExactAmountInResponse},
};
use swaprouter_base::{ContractError, ContractResult, Route, RouteError};
use swaprouter_osmosis_helpers::helpers::{
    query_arithmetic_twap_price, query_pool, query_swap_estimate,
};
use swaprouter_types::swaprouter::SwapAmountInRoute;

/// Minimum output of a single hop. Slippage is enforced once, on the output of the last hop.
const HOP_MIN_OUTPUT_AMOUNT: &str = "1";

#[cw_serde]
pub struct OsmosisRoute(pub Vec<SwapAmountInRoute>);

impl fmt::Display for OsmosisRoute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self.0.iter().map(|hop| hop.to_string()).collect::<Vec<_>>().join("|");
        write!(f, "{s}")
    }
}

impl OsmosisRoute {
    fn hop(&self, step: usize) -> ContractResult<&SwapAmountInRoute> {
        self.0.get(step).ok_or_else(|| ContractError::BackendFailure {
            reason: format!("route {} has no hop at step {}", self, step + 1),
        })
    }
}

impl Route<Empty, Empty> for OsmosisRoute {
    // Walk the hops, checking each pool against the denom flowing into it
    fn validate(
        &self,
        querier: &QuerierWrapper,
        input_denom: &str,
        output_denom: &str,
    ) -> ContractResult<()> {
        let hops = &self.0;

        // there must be at least one hop
        if hops.is_empty() {
            return Err(RouteError::EmptyRoute.into());
        }

        // for each hop:
        // - the pool must exist
        // - the pool must contain the input and output denoms
        // - the output denom must differ from the input denom
        let mut current_denom = input_denom;
        for (i, hop) in hops.iter().enumerate() {
            let step = i + 1;
            let pool = query_pool(querier, hop.pool_id).map_err(|_| ContractError::PoolNotFound {
                pool_id: hop.pool_id,
            })?;

            if !pool.has_denom(current_denom) {
                return Err(RouteError::HopInputNotInPool {
                    step,
                    pool_id: hop.pool_id,
                    denom: current_denom.to_string(),
                }
                .into());
            }

            if !pool.has_denom(&hop.token_out_denom) {
                return Err(RouteError::HopOutputNotInPool {
                    step,
                    pool_id: hop.pool_id,
                    denom: hop.token_out_denom.clone(),
                }
                .into());
            }

            if hop.token_out_denom == current_denom {
                return Err(RouteError::HopDoesNotChangeDenom {
                    step,
                    pool_id: hop.pool_id,
                    denom: hop.token_out_denom.clone(),
                }
                .into());
            }

            current_denom = &hop.token_out_denom;
        }

        // the route's final output denom must match the desired output denom
        if current_denom != output_denom {
            return Err(RouteError::OutputMismatch {
                expected: output_denom.to_string(),
                actual: current_denom.to_string(),
            }
            .into());
        }

        Ok(())
    }

    fn hop_count(&self) -> usize {
        self.0.len()
    }

    fn hop_output_denom(&self, step: usize) -> Option<String> {
        self.0.get(step).map(|hop| hop.token_out_denom.clone())
    }

    fn build_hop_msg(&self, env: &Env, step: usize, coin_in: &Coin) -> ContractResult<CosmosMsg> {
        let hop = self.hop(step)?;

        let swap_msg: CosmosMsg = MsgSwapExactAmountIn {
            sender: env.contract.address.to_string(),
            routes: vec![hop.clone().into()],
            token_in: Some(v1beta1::Coin {
                denom: coin_in.denom.clone(),
                amount: coin_in.amount.to_string(),
            }),
            token_out_min_amount: HOP_MIN_OUTPUT_AMOUNT.to_string(),
        }
        .into();
        Ok(swap_msg)
    }

    fn parse_hop_output(response: &SubMsgResponse) -> ContractResult<Uint128> {
        let Some(b) = response.data.clone() else {
            return Err(ContractError::BackendFailure {
                reason: "no data sent back after swapping".to_string(),
            });
        };

        let parsed_response: MsgSwapExactAmountInResponse =
            b.try_into().map_err(|e: StdError| ContractError::BackendFailure {
                reason: e.to_string(),
            })?;
        Uint128::from_str(&parsed_response.token_out_amount).map_err(|e| {
            ContractError::BackendFailure {
                reason: e.to_string(),
            }
        })
    }

    fn estimate_swap(&self, querier: &QuerierWrapper, coin_in: &Coin) -> ContractResult<Uint128> {
        let coin_out = self.0.iter().try_fold(coin_in.clone(), |coin, hop| -> ContractResult<_> {
            let amount = query_swap_estimate(querier, hop.pool_id, &coin, &hop.token_out_denom)?;
            Ok(Coin {
                denom: hop.token_out_denom.clone(),
                amount,
            })
        })?;
        Ok(coin_out.amount)
    }

    /// Multiply the TWAP price of every hop.
    ///
    /// Example:
    /// route uatom -> uosmo -> uusdc through [pool_1 (atom/osmo), pool_69 (osmo/usdc)]
    /// 1) query pool_1 for the price of osmo quoted in atom
    /// 2) query pool_69 for the price of usdc quoted in osmo
    /// 3) usdc quoted in atom = (osmo in atom) * (usdc in osmo)
    fn query_twap_price(
        &self,
        querier: &QuerierWrapper,
        input_denom: &str,
        start_time: u64,
    ) -> ContractResult<Decimal> {
        let mut price = Decimal::one();
        let mut quote_denom = input_denom;
        for hop in &self.0 {
            let hop_price = query_arithmetic_twap_price(
                querier,
                hop.pool_id,
                &hop.token_out_denom,
                quote_denom,
                start_time,
            )?;
            price = price.checked_mul(hop_price)?;
            quote_denom = &hop.token_out_denom;
        }
        Ok(price)
    }
}
