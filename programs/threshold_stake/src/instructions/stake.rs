use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};
use external_beneficiary::Completion;
use crate::constants::{SEED_POOL, SEED_POOL_VAULT, SEED_STAKE_ENTRY};
use crate::errors::CustomError;
use crate::events::Staked;
use crate::state::{StakeEntry, StakingPool};

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_POOL, pool.beneficiary.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, StakingPool>>,

    #[account(
        mut,
        seeds = [SEED_POOL_VAULT, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    #[account(address = pool.beneficiary @ CustomError::BeneficiaryMismatch)]
    pub completion: Account<'info, Completion>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = StakeEntry::LEN,
        seeds = [SEED_STAKE_ENTRY, pool.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub stake_entry: Box<Account<'info, StakeEntry>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    #[account(address = pool.token_mint)]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let depositor_key = ctx.accounts.depositor.key();

    let balance = ctx.accounts.pool.stake(
        &mut ctx.accounts.stake_entry,
        amount,
        clock.unix_timestamp,
        &*ctx.accounts.completion,
    )?;

    if ctx.accounts.stake_entry.is_new() {
        let entry = &mut ctx.accounts.stake_entry;
        entry.pool = pool_key;
        entry.depositor = depositor_key;
        entry.bump = ctx.bumps.stake_entry;

        ctx.accounts.pool.register_depositor()?;
    }

    token::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    let total_held = ctx.accounts.pool.total_held;
    let depositor_count = ctx.accounts.pool.depositor_count;
    msg!("Staked {} into {}, pool holds {}", amount, pool_key, total_held);

    emit!(Staked {
        pool: pool_key,
        depositor: depositor_key,
        amount,
        balance,
        total_held,
        depositor_count,
    });

    Ok(())
}
