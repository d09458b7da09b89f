pub mod adapters;
pub mod swaprouter;
