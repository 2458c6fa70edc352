mod error;
pub mod meal;
pub mod week;

pub use error::*;
pub use meal::*;
pub use week::*;
