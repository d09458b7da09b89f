use cosmwasm_std::{
    attr, coin, from_json,
    testing::{mock_env, MOCK_CONTRACT_ADDR},
    BankMsg, Coin, CosmosMsg, SubMsg, SubMsgResponse, SubMsgResult, Uint128,
};
use osmosis_std::types::{
    cosmos::base::v1beta1,
    osmosis::poolmanager::v1beta1::{MsgSwapExactAmountIn, SwapAmountInRoute},
};
use swaprouter_base::{ContractError, SWAP_HOP_REPLY_ID};
use swaprouter_osmosis::contract::{reply, OsmosisSwapRouter};
use swaprouter_types::swaprouter::SwapResponse;
use test_case::test_case;

use super::helpers::{
    hop_reply, route, send_hop_reply, set_route, setup_test, swap, MockDeps, OWNER, TRADER,
};

fn expected_hop_msg(pool_id: u64, token_out_denom: &str, coin_in: Coin) -> SubMsg {
    let msg: CosmosMsg = MsgSwapExactAmountIn {
        sender: MOCK_CONTRACT_ADDR.to_string(),
        routes: vec![SwapAmountInRoute {
            pool_id,
            token_out_denom: token_out_denom.to_string(),
        }],
        token_in: Some(v1beta1::Coin {
            denom: coin_in.denom,
            amount: coin_in.amount.to_string(),
        }),
        token_out_min_amount: "1".to_string(),
    }
    .into();
    SubMsg::reply_on_success(msg, SWAP_HOP_REPLY_ID)
}

/// Router with the route uosmo -> uion -> uatom registered
fn setup_two_hop_route() -> MockDeps {
    let mut deps = setup_test();
    set_route(&mut deps, OWNER, "uosmo", "uatom", route(&[(1, "uion"), (2, "uatom")])).unwrap();
    deps
}

#[test]
fn single_hop_swap() {
    let mut deps = setup_test();
    set_route(&mut deps, OWNER, "uosmo", "uion", route(&[(1, "uion")])).unwrap();

    let res = swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uion", 900).unwrap();
    assert_eq!(res.messages, vec![expected_hop_msg(1, "uion", coin(1000, "uosmo"))]);
    assert_eq!(
        res.attributes,
        vec![
            attr("action", "swaprouter/swap"),
            attr("input_coin", "1000uosmo"),
            attr("output_denom", "uion"),
            attr("minimum_output_amount", "900"),
            attr("route", "1:uion"),
        ]
    );

    let res = send_hop_reply(&mut deps, 950).unwrap();
    assert_eq!(
        res.messages,
        vec![SubMsg::new(BankMsg::Send {
            to_address: TRADER.to_string(),
            amount: vec![coin(950, "uion")],
        })]
    );
    assert_eq!(
        res.attributes,
        vec![
            attr("action", "swaprouter/swap_complete"),
            attr("recipient", TRADER),
            attr("output_coin", "950uion"),
        ]
    );

    let data: SwapResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.output_coin, coin(950, "uion"));
}

#[test]
fn multi_hop_swap_chains_outputs() {
    let mut deps = setup_two_hop_route();

    let res = swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap();
    assert_eq!(res.messages, vec![expected_hop_msg(1, "uion", coin(1000, "uosmo"))]);

    // the output of the first hop goes into the second one
    let res = send_hop_reply(&mut deps, 2000).unwrap();
    assert_eq!(res.messages, vec![expected_hop_msg(2, "uatom", coin(2000, "uion"))]);
    assert_eq!(
        res.attributes,
        vec![
            attr("action", "swaprouter/swap_hop"),
            attr("step", "1"),
            attr("coin_out", "2000uion"),
        ]
    );

    let res = send_hop_reply(&mut deps, 950).unwrap();
    assert_eq!(
        res.messages,
        vec![SubMsg::new(BankMsg::Send {
            to_address: TRADER.to_string(),
            amount: vec![coin(950, "uatom")],
        })]
    );
    let data: SwapResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.output_coin, coin(950, "uatom"));
}

#[test]
fn swap_state_only_lives_during_swap() {
    let mut deps = setup_two_hop_route();
    let router = OsmosisSwapRouter::default();

    assert!(router.swap_state.may_load(deps.as_ref().storage).unwrap().is_none());

    swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap();
    let state = router.swap_state.load(deps.as_ref().storage).unwrap();
    assert_eq!(state.step, 0);
    assert_eq!(state.coin, coin(1000, "uosmo"));
    assert_eq!(state.minimum_output_amount, Uint128::new(900));
    assert_eq!(state.recipient.as_str(), TRADER);

    send_hop_reply(&mut deps, 2000).unwrap();
    let state = router.swap_state.load(deps.as_ref().storage).unwrap();
    assert_eq!(state.step, 1);
    assert_eq!(state.coin, coin(2000, "uion"));

    send_hop_reply(&mut deps, 950).unwrap();
    assert!(router.swap_state.may_load(deps.as_ref().storage).unwrap().is_none());
}

#[test]
fn output_equal_to_minimum_succeeds() {
    let mut deps = setup_two_hop_route();

    swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap();
    send_hop_reply(&mut deps, 2000).unwrap();
    let res = send_hop_reply(&mut deps, 900).unwrap();

    let data: SwapResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.output_coin, coin(900, "uatom"));
}

#[test]
fn output_below_minimum_fails() {
    let mut deps = setup_two_hop_route();

    swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap();
    send_hop_reply(&mut deps, 2000).unwrap();
    let err = send_hop_reply(&mut deps, 899).unwrap_err();

    assert_eq!(
        err,
        ContractError::SlippageExceeded {
            denom: "uatom".to_string(),
            minimum: Uint128::new(900),
            actual: Uint128::new(899),
        }
    );
}

#[test]
fn swap_without_route() {
    let mut deps = setup_test();

    let err =
        swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap_err();
    assert_eq!(
        err,
        ContractError::RouteNotFound {
            input_denom: "uosmo".to_string(),
            output_denom: "uatom".to_string(),
        }
    );
}

#[test]
fn reverse_route_is_not_used() {
    let mut deps = setup_two_hop_route();

    let err =
        swap(&mut deps, &[coin(1000, "uatom")], coin(1000, "uatom"), "uosmo", 900).unwrap_err();
    assert_eq!(
        err,
        ContractError::RouteNotFound {
            input_denom: "uatom".to_string(),
            output_denom: "uosmo".to_string(),
        }
    );
}

#[test_case(&[] ; "no funds")]
#[test_case(&[coin(999, "uosmo")] ; "lower amount")]
fn insufficient_funds(funds: &[Coin]) {
    let mut deps = setup_two_hop_route();

    let err = swap(&mut deps, funds, coin(1000, "uosmo"), "uatom", 900).unwrap_err();
    assert!(matches!(err, ContractError::InsufficientFunds { .. }));
}

#[test_case(&[coin(1000, "uion")] ; "other denom")]
#[test_case(&[coin(1000, "uosmo"), coin(1, "uatom")] ; "additional denom")]
fn wrong_denomination(funds: &[Coin]) {
    let mut deps = setup_two_hop_route();

    let err = swap(&mut deps, funds, coin(1000, "uosmo"), "uatom", 900).unwrap_err();
    assert!(matches!(err, ContractError::WrongDenomination { .. }));
}

#[test]
fn excess_funds() {
    let mut deps = setup_two_hop_route();

    let err =
        swap(&mut deps, &[coin(1001, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap_err();
    assert_eq!(
        err,
        ContractError::ExcessFunds {
            expected: "1000uosmo".to_string(),
            received: "1001uosmo".to_string(),
        }
    );
}

#[test]
fn funds_checked_before_route_lookup() {
    let mut deps = setup_test();

    let err =
        swap(&mut deps, &[coin(1000, "uion")], coin(1000, "uosmo"), "uatom", 900).unwrap_err();
    assert!(matches!(err, ContractError::WrongDenomination { .. }));
}

#[test]
fn unknown_reply_id() {
    let mut deps = setup_two_hop_route();
    swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap();

    let mut unknown = hop_reply(2000);
    unknown.id = 42;
    let err = reply(deps.as_mut(), mock_env(), unknown).unwrap_err();

    assert_eq!(err, ContractError::ReplyError("reply id 42 is not valid".to_string()));
}

#[test]
fn failed_hop_reply() {
    let mut deps = setup_two_hop_route();
    swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap();

    let mut failed = hop_reply(0);
    failed.result = SubMsgResult::Err("insufficient liquidity".to_string());
    let err = reply(deps.as_mut(), mock_env(), failed).unwrap_err();

    assert_eq!(
        err,
        ContractError::BackendFailure {
            reason: "insufficient liquidity".to_string(),
        }
    );
}

#[test]
fn hop_reply_without_data() {
    let mut deps = setup_two_hop_route();
    swap(&mut deps, &[coin(1000, "uosmo")], coin(1000, "uosmo"), "uatom", 900).unwrap();

    let mut empty = hop_reply(0);
    empty.result = SubMsgResult::Ok(SubMsgResponse {
        events: vec![],
        data: None,
    });
    let err = reply(deps.as_mut(), mock_env(), empty).unwrap_err();

    assert!(matches!(err, ContractError::BackendFailure { .. }));
}
