use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Reply, Response};
use cw2::set_contract_version;
use swaprouter_base::{ContractResult, SwapRouter};
use swaprouter_types::swaprouter::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

use crate::{migrations, route::OsmosisRoute};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The Osmosis swap router contract inherits logic from the base swap router contract
pub type OsmosisSwapRouter<'a> = SwapRouter<'a, Empty, Empty, OsmosisRoute>;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;
    OsmosisSwapRouter::default().instantiate(deps, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg<OsmosisRoute>,
) -> ContractResult<Response> {
    OsmosisSwapRouter::default().execute(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    OsmosisSwapRouter::default().query(deps, env, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, reply: Reply) -> ContractResult<Response> {
    OsmosisSwapRouter::default().reply(deps, env, reply)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> ContractResult<Response> {
    migrations::v0_2_0::migrate(deps)
}
