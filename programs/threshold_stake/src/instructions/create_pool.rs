use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use external_beneficiary::Completion;
use crate::constants::{
    DEFAULT_MIN_STAKE, DEFAULT_THRESHOLD, SEED_POOL, SEED_POOL_VAULT, STAKING_WINDOW_SECONDS,
};
use crate::errors::CustomError;
use crate::events::PoolCreated;
use crate::state::StakingPool;
use crate::utils::beneficiary::CompletionStatus;

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        constraint = completion.token_mint == token_mint.key() @ CustomError::BeneficiaryMismatch
    )]
    pub completion: Account<'info, Completion>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = StakingPool::LEN,
        seeds = [SEED_POOL, completion.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, StakingPool>>,

    #[account(
        init,
        payer = creator,
        seeds = [SEED_POOL_VAULT, pool.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = pool,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Resolves the optional overrides against the defaults and checks they
/// describe a pool that can ever reach its threshold.
pub fn resolve_pool_params(threshold: Option<u64>, min_stake: Option<u64>) -> Result<(u64, u64)> {
    let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
    let min_stake = min_stake.unwrap_or(DEFAULT_MIN_STAKE);

    require!(min_stake > 0, CustomError::InvalidPoolConfig);
    require!(min_stake <= threshold, CustomError::InvalidPoolConfig);
    Ok((threshold, min_stake))
}

pub fn create_pool(
    ctx: Context<CreatePool>,
    threshold: Option<u64>,
    min_stake: Option<u64>,
) -> Result<()> {
    let (threshold, min_stake) = resolve_pool_params(threshold, min_stake)?;
    require!(!ctx.accounts.completion.completed(), CustomError::AlreadyCompleted);
    require_keys_eq!(
        ctx.accounts.completion.funder,
        ctx.accounts.pool.key(),
        CustomError::BeneficiaryMismatch
    );

    let clock = Clock::get()?;
    let deadline = clock
        .unix_timestamp
        .checked_add(STAKING_WINDOW_SECONDS)
        .ok_or(CustomError::MathOverflow)?;

    let pool = &mut ctx.accounts.pool;
    pool.creator = ctx.accounts.creator.key();
    pool.beneficiary = ctx.accounts.completion.key();
    pool.token_mint = ctx.accounts.token_mint.key();
    pool.vault = ctx.accounts.pool_vault.key();
    pool.created_at = clock.unix_timestamp;
    pool.deadline = deadline;
    pool.threshold = threshold;
    pool.min_stake = min_stake;
    pool.total_held = 0;
    pool.total_forwarded = 0;
    pool.depositor_count = 0;
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.pool_vault;

    msg!("Pool {} open until {}", pool.key(), deadline);

    emit!(PoolCreated {
        pool: pool.key(),
        beneficiary: pool.beneficiary,
        token_mint: pool.token_mint,
        deadline,
        threshold,
        min_stake,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_params() {
        assert_eq!(
            resolve_pool_params(None, None).unwrap(),
            (DEFAULT_THRESHOLD, DEFAULT_MIN_STAKE)
        );
        assert_eq!(resolve_pool_params(Some(10), Some(10)).unwrap(), (10, 10));
    }

    #[test]
    fn rejects_unreachable_configs() {
        assert!(resolve_pool_params(Some(10), Some(0)).is_err());
        assert!(resolve_pool_params(Some(10), Some(11)).is_err());
        assert!(resolve_pool_params(Some(DEFAULT_MIN_STAKE - 1), None).is_err());
    }
}
