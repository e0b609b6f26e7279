pub mod risk;
pub mod stats;

pub use risk::*;
pub use stats::*;
