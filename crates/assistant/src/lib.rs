mod client;
mod extract;
mod prompt;

pub use client::*;
pub use extract::*;
pub use prompt::*;
