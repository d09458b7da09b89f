pub mod swaprouter;
