pub mod staking_pool;
pub mod stake_entry;

pub use staking_pool::*;
pub use stake_entry::*;
