use cosmwasm_schema::write_api;
use swaprouter_osmosis::route::OsmosisRoute;
use swaprouter_types::swaprouter::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg<OsmosisRoute>,
        query: QueryMsg,
        migrate: MigrateMsg,
    }
}
