use anchor_lang::prelude::*;
use crate::constants::DISCRIMINATOR_SIZE;

/// One ledger line: what a single depositor can reclaim from a pool.
#[account]
pub struct StakeEntry {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub balance: u64,
    pub bump: u8,
}

impl StakeEntry {
    pub const LEN: usize = DISCRIMINATOR_SIZE + 32 + 32 + 8 + 1;

    /// Stand-in for a depositor with no ledger account yet.
    pub fn empty(pool: Pubkey, depositor: Pubkey) -> Self {
        Self {
            pool,
            depositor,
            balance: 0,
            bump: 0,
        }
    }

    /// `init_if_needed` hands back a zeroed account on first use.
    pub fn is_new(&self) -> bool {
        self.pool == Pubkey::default()
    }
}
