pub mod round_data;

pub use round_data::*;
