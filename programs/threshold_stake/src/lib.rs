use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::PoolPhase;

declare_id!("4n5GgvegVuNMTmt1aSHQSRsnFMPvA5JZcqoWUpnRevJm");

#[program]
pub mod threshold_stake {
    use super::*;

    // --- SETUP ---

    pub fn create_pool(
        ctx: Context<CreatePool>,
        threshold: Option<u64>,
        min_stake: Option<u64>,
    ) -> Result<()> {
        instructions::create_pool::create_pool(ctx, threshold, min_stake)
    }

    // --- POOL ---

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::stake(ctx, amount)
    }

    pub fn execute(ctx: Context<Execute>) -> Result<()> {
        instructions::execute::execute(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::withdraw(ctx)
    }

    // --- VIEWS ---

    pub fn time_left(ctx: Context<PoolView>) -> Result<i64> {
        instructions::views::time_left(ctx)
    }

    pub fn pool_phase(ctx: Context<PoolView>) -> Result<PoolPhase> {
        instructions::views::pool_phase(ctx)
    }

    pub fn balance_of(ctx: Context<BalanceOf>, depositor: Pubkey) -> Result<u64> {
        instructions::views::balance_of(ctx, depositor)
    }
}
