pub mod contract;
pub mod migrations;
pub mod route;
