use cosmwasm_std::{
    testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR},
    Addr, Coin, MessageInfo, OwnedDeps,
};

use super::swaprouter_mock_querier::SwapRouterMockQuerier;

/// quick mock info with just the sender
pub fn mock_info(sender: &str) -> MessageInfo {
    mock_info_with_funds(sender, &[])
}

/// mock info with the sender and the funds attached to the message
pub fn mock_info_with_funds(sender: &str, funds: &[Coin]) -> MessageInfo {
    MessageInfo {
        sender: Addr::unchecked(sender),
        funds: funds.to_vec(),
    }
}

/// Dependencies whose querier answers the Osmosis pool, estimate and TWAP queries the router
/// makes. `contract_balance` is the router's own bank balance.
pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, SwapRouterMockQuerier> {
    let contract_addr = Addr::unchecked(MOCK_CONTRACT_ADDR);
    let custom_querier =
        SwapRouterMockQuerier::new(MockQuerier::new(&[(contract_addr.as_str(), contract_balance)]));

    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: custom_querier,
        custom_query_type: Default::default(),
    }
}
