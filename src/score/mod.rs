pub mod allocation;
pub mod compute;
pub mod score_aggregators;
pub mod sort_utils;

pub use allocation::*;
pub use compute::*;
pub use score_aggregators::*;
pub use sort_utils::*;
