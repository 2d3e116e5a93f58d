pub const SEED_POOL: &[u8] = b"staking_pool";
pub const SEED_POOL_VAULT: &[u8] = b"pool_vault";
pub const SEED_STAKE_ENTRY: &[u8] = b"stake_entry";

/// Staking stays open for 72 hours after the pool is created.
pub const STAKING_WINDOW_SECONDS: i64 = 72 * 60 * 60;

// Defaults assume a 9-decimal mint.
pub const DEFAULT_THRESHOLD: u64 = 1_000_000_000;
pub const DEFAULT_MIN_STAKE: u64 = 500_000_000;

pub const DISCRIMINATOR_SIZE: usize = 8;
