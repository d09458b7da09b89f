mod contract;
mod error;
mod helpers;
mod state;
mod traits;

pub use contract::*;
pub use error::*;
pub use helpers::*;
pub use state::*;
pub use traits::*;
