pub mod error;
pub mod output;

pub use output::*;
