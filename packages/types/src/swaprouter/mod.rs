mod msgs;
mod route;

pub use msgs::*;
pub use route::*;
