mod catalog;
mod filter;
mod seed;

pub use catalog::*;
pub use filter::*;
pub use seed::*;
