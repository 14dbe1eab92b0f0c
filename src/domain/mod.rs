pub mod roast;
pub mod shared;
pub mod token_exchange;
