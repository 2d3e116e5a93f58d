use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub beneficiary: Pubkey,
    pub token_mint: Pubkey,
    pub deadline: i64,
    pub threshold: u64,
    pub min_stake: u64,
}

#[event]
pub struct Staked {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_held: u64,
    pub depositor_count: u32,
}

// Anyone may trigger execution, so the caller is recorded separately.
#[event]
pub struct Executed {
    pub pool: Pubkey,
    pub caller: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
}
