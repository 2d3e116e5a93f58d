use anchor_lang::prelude::*;
use external_beneficiary::Completion;
use crate::constants::{SEED_POOL, SEED_STAKE_ENTRY};
use crate::errors::CustomError;
use crate::state::{PoolPhase, StakeEntry, StakingPool};
use crate::utils::beneficiary::CompletionStatus;

#[derive(Accounts)]
pub struct PoolView<'info> {
    #[account(
        seeds = [SEED_POOL, pool.beneficiary.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, StakingPool>,

    #[account(address = pool.beneficiary @ CustomError::BeneficiaryMismatch)]
    pub completion: Account<'info, Completion>,
}

#[derive(Accounts)]
#[instruction(depositor: Pubkey)]
pub struct BalanceOf<'info> {
    pub pool: Account<'info, StakingPool>,

    // Absent until the depositor's first stake.
    #[account(
        seeds = [SEED_STAKE_ENTRY, pool.key().as_ref(), depositor.as_ref()],
        bump
    )]
    pub stake_entry: Option<Account<'info, StakeEntry>>,
}

pub fn time_left(ctx: Context<PoolView>) -> Result<i64> {
    let clock = Clock::get()?;
    Ok(ctx.accounts.pool.time_left(clock.unix_timestamp))
}

pub fn pool_phase(ctx: Context<PoolView>) -> Result<PoolPhase> {
    let clock = Clock::get()?;
    let completed = ctx.accounts.completion.completed();
    Ok(ctx.accounts.pool.phase(clock.unix_timestamp, completed))
}

pub fn balance_of(ctx: Context<BalanceOf>, _depositor: Pubkey) -> Result<u64> {
    Ok(ctx
        .accounts
        .stake_entry
        .as_ref()
        .map_or(0, |entry| entry.balance))
}
