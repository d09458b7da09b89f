use std::marker::PhantomData;

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, CustomMsg, CustomQuery, Deps, DepsMut, Env,
    MessageInfo, Order, Reply, Response, StdResult, SubMsg, SubMsgResponse, Uint128,
};
use cw_storage_plus::{Bound, Item, Map};
use mars_owner::{Owner, OwnerInit::SetInitialOwner};
use swaprouter_types::swaprouter::{
    EstimateSwapResponse, ExecuteMsg, GetOwnerResponse, GetRouteResponse, InstantiateMsg,
    QueryMsg, RouteResponse, RoutesResponse, SwapResponse, TwapResponse,
};

use crate::{assert_exact_funds_sent, ContractError, ContractResult, Route, SwapState};

/// Reply id of every single-hop swap submessage
pub const SWAP_HOP_REPLY_ID: u64 = 1;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

pub struct SwapRouter<'a, Q, M, R>
where
    Q: CustomQuery,
    M: CustomMsg,
    R: Route<M, Q>,
{
    /// The contract's owner who is the only one allowed to set routes
    pub owner: Owner<'a>,
    /// The route for each ordered pair of input/output denoms
    pub routes: Map<'a, (String, String), R>,
    /// The swap being executed, only present while a `Swap` transaction is in progress
    pub swap_state: Item<'a, SwapState<R>>,
    /// Phantom data holds generics
    pub custom_query: PhantomData<Q>,
    pub custom_message: PhantomData<M>,
}

impl<'a, Q, M, R> Default for SwapRouter<'a, Q, M, R>
where
    Q: CustomQuery,
    M: CustomMsg,
    R: Route<M, Q>,
{
    fn default() -> Self {
        Self {
            owner: Owner::new("owner"),
            routes: Map::new("routes"),
            swap_state: Item::new("swap_state"),
            custom_query: PhantomData,
            custom_message: PhantomData,
        }
    }
}

impl<'a, Q, M, R> SwapRouter<'a, Q, M, R>
where
    Q: CustomQuery,
    M: CustomMsg,
    R: Route<M, Q>,
{
    pub fn instantiate(
        &self,
        deps: DepsMut<Q>,
        msg: InstantiateMsg,
    ) -> ContractResult<Response<M>> {
        self.owner.initialize(
            deps.storage,
            deps.api,
            SetInitialOwner {
                owner: msg.owner.clone(),
            },
        )?;

        Ok(Response::new().add_attribute("action", "instantiate").add_attribute("owner", msg.owner))
    }

    pub fn execute(
        &self,
        deps: DepsMut<Q>,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg<R>,
    ) -> ContractResult<Response<M>> {
        match msg {
            ExecuteMsg::SetRoute {
                input_denom,
                output_denom,
                pool_route,
            } => self.set_route(deps, info.sender, input_denom, output_denom, pool_route),
            ExecuteMsg::Swap {
                input_coin,
                output_denom,
                minimum_output_amount,
            } => self.swap(deps, env, info, input_coin, output_denom, minimum_output_amount),
        }
    }

    pub fn query(&self, deps: Deps<Q>, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
        let res = match msg {
            QueryMsg::GetOwner {} => to_json_binary(&self.query_owner(deps)?),
            QueryMsg::GetRoute {
                input_denom,
                output_denom,
            } => to_json_binary(&self.query_route(deps, input_denom, output_denom)?),
            QueryMsg::GetRoutes {
                start_after,
                limit,
            } => to_json_binary(&self.query_routes(deps, start_after, limit)?),
            QueryMsg::EstimateSwap {
                input_coin,
                output_denom,
            } => to_json_binary(&self.estimate_swap(deps, input_coin, output_denom)?),
            QueryMsg::ArithmeticTwapToNow {
                input_denom,
                output_denom,
                start_time,
            } => to_json_binary(&self.query_twap_price(
                deps,
                input_denom,
                output_denom,
                start_time,
            )?),
        };
        res.map_err(Into::into)
    }

    pub fn reply(&self, deps: DepsMut<Q>, env: Env, reply: Reply) -> ContractResult<Response<M>> {
        let response = reply.result.into_result().map_err(|reason| {
            ContractError::BackendFailure {
                reason,
            }
        })?;
        match reply.id {
            SWAP_HOP_REPLY_ID => self.handle_swap_hop_reply(deps, env, response),
            id => Err(ContractError::ReplyError(format!("reply id {id} is not valid"))),
        }
    }

    fn query_owner(&self, deps: Deps<Q>) -> StdResult<GetOwnerResponse> {
        let owner = self.owner.query(deps.storage)?.owner.unwrap_or_default();
        Ok(GetOwnerResponse {
            owner,
        })
    }

    fn query_route(
        &self,
        deps: Deps<Q>,
        input_denom: String,
        output_denom: String,
    ) -> ContractResult<GetRouteResponse<R>> {
        Ok(GetRouteResponse {
            pool_route: self.get_route(deps, &input_denom, &output_denom)?,
        })
    }

    fn query_routes(
        &self,
        deps: Deps<Q>,
        start_after: Option<(String, String)>,
        limit: Option<u32>,
    ) -> ContractResult<RoutesResponse<R>> {
        let start = start_after.map(Bound::exclusive);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

        self.routes
            .range(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| -> ContractResult<RouteResponse<R>> {
                let ((input_denom, output_denom), pool_route) = item?;
                Ok(RouteResponse {
                    input_denom,
                    output_denom,
                    pool_route,
                })
            })
            .collect()
    }

    fn estimate_swap(
        &self,
        deps: Deps<Q>,
        input_coin: Coin,
        output_denom: String,
    ) -> ContractResult<EstimateSwapResponse> {
        let route = self.get_route(deps, &input_coin.denom, &output_denom)?;
        let amount = route.estimate_swap(&deps.querier, &input_coin)?;
        Ok(EstimateSwapResponse {
            amount,
        })
    }

    fn query_twap_price(
        &self,
        deps: Deps<Q>,
        input_denom: String,
        output_denom: String,
        start_time: u64,
    ) -> ContractResult<TwapResponse> {
        let route = self.get_route(deps, &input_denom, &output_denom)?;
        let price = route.query_twap_price(&deps.querier, &input_denom, start_time)?;
        Ok(TwapResponse {
            price,
        })
    }

    fn set_route(
        &self,
        deps: DepsMut<Q>,
        sender: Addr,
        input_denom: String,
        output_denom: String,
        pool_route: R,
    ) -> ContractResult<Response<M>> {
        if !self.owner.is_owner(deps.storage, &sender)? {
            return Err(ContractError::Unauthorized {
                user: sender.to_string(),
                action: "set route".to_string(),
            });
        }

        pool_route.validate(&deps.querier, &input_denom, &output_denom)?;

        self.routes.save(
            deps.storage,
            (input_denom.clone(), output_denom.clone()),
            &pool_route,
        )?;

        Ok(Response::new()
            .add_attribute("action", "swaprouter/set_route")
            .add_attribute("input_denom", input_denom)
            .add_attribute("output_denom", output_denom)
            .add_attribute("route", pool_route.to_string()))
    }

    fn swap(
        &self,
        deps: DepsMut<Q>,
        env: Env,
        info: MessageInfo,
        input_coin: Coin,
        output_denom: String,
        minimum_output_amount: Uint128,
    ) -> ContractResult<Response<M>> {
        assert_exact_funds_sent(&info, &input_coin)?;

        let route = self.get_route(deps.as_ref(), &input_coin.denom, &output_denom)?;
        let hop_msg = route.build_hop_msg(&env, 0, &input_coin)?;

        self.swap_state.save(
            deps.storage,
            &SwapState {
                recipient: info.sender,
                route: route.clone(),
                step: 0,
                coin: input_coin.clone(),
                minimum_output_amount,
            },
        )?;

        Ok(Response::new()
            .add_submessage(SubMsg::reply_on_success(hop_msg, SWAP_HOP_REPLY_ID))
            .add_attribute("action", "swaprouter/swap")
            .add_attribute("input_coin", input_coin.to_string())
            .add_attribute("output_denom", output_denom)
            .add_attribute("minimum_output_amount", minimum_output_amount)
            .add_attribute("route", route.to_string()))
    }

    /// Fold the output of the completed hop into the swap state, then either dispatch the next
    /// hop or settle the swap
    fn handle_swap_hop_reply(
        &self,
        deps: DepsMut<Q>,
        env: Env,
        response: SubMsgResponse,
    ) -> ContractResult<Response<M>> {
        let mut state = self.swap_state.load(deps.storage)?;

        let denom_out = state.route.hop_output_denom(state.step).ok_or_else(|| {
            ContractError::BackendFailure {
                reason: format!("no hop at step {} of route {}", state.step + 1, state.route),
            }
        })?;
        let amount_out = R::parse_hop_output(&response)?;
        state.coin = Coin {
            denom: denom_out,
            amount: amount_out,
        };
        state.step += 1;

        if state.step < state.route.hop_count() {
            let hop_msg = state.route.build_hop_msg(&env, state.step, &state.coin)?;
            self.swap_state.save(deps.storage, &state)?;

            return Ok(Response::new()
                .add_submessage(SubMsg::reply_on_success(hop_msg, SWAP_HOP_REPLY_ID))
                .add_attribute("action", "swaprouter/swap_hop")
                .add_attribute("step", state.step.to_string())
                .add_attribute("coin_out", state.coin.to_string()));
        }

        if state.coin.amount < state.minimum_output_amount {
            return Err(ContractError::SlippageExceeded {
                denom: state.coin.denom,
                minimum: state.minimum_output_amount,
                actual: state.coin.amount,
            });
        }

        self.swap_state.remove(deps.storage);

        let data = to_json_binary(&SwapResponse {
            output_coin: state.coin.clone(),
        })?;

        Ok(Response::new()
            .add_message(BankMsg::Send {
                to_address: state.recipient.to_string(),
                amount: vec![state.coin.clone()],
            })
            .set_data(data)
            .add_attribute("action", "swaprouter/swap_complete")
            .add_attribute("recipient", state.recipient)
            .add_attribute("output_coin", state.coin.to_string()))
    }

    fn get_route(&self, deps: Deps<Q>, input_denom: &str, output_denom: &str) -> ContractResult<R> {
        self.routes
            .may_load(deps.storage, (input_denom.to_string(), output_denom.to_string()))?
            .ok_or_else(|| ContractError::RouteNotFound {
                input_denom: input_denom.to_string(),
                output_denom: output_denom.to_string(),
            })
    }
}
