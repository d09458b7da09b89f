use cosmwasm_std::{Coin, MessageInfo};
use cw_utils::{must_pay, PaymentError};

use crate::{ContractError, ContractResult};

/// Assert that exactly `expected` was sent along with the message, nothing more and nothing less
pub fn assert_exact_funds_sent(info: &MessageInfo, expected: &Coin) -> ContractResult<()> {
    let received = fmt_coins(&info.funds);

    let amount = must_pay(info, &expected.denom).map_err(|err| match err {
        PaymentError::NoFunds {} => ContractError::InsufficientFunds {
            expected: expected.to_string(),
            received: received.clone(),
        },
        _ => ContractError::WrongDenomination {
            expected: expected.to_string(),
            received: received.clone(),
        },
    })?;

    if amount < expected.amount {
        return Err(ContractError::InsufficientFunds {
            expected: expected.to_string(),
            received,
        });
    }

    if amount > expected.amount {
        return Err(ContractError::ExcessFunds {
            expected: expected.to_string(),
            received,
        });
    }

    Ok(())
}

fn fmt_coins(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "none".to_string();
    }
    coins.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
}
