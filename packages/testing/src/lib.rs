#![cfg(not(target_arch = "wasm32"))]

/// Mock dependencies emulating the Osmosis chain the router talks to
mod mocks;
mod osmosis_querier;
mod swaprouter_mock_querier;

pub use mocks::*;
pub use swaprouter_mock_querier::SwapRouterMockQuerier;
