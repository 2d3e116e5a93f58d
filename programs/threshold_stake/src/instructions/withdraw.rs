use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};
use external_beneficiary::Completion;
use crate::constants::{SEED_POOL, SEED_POOL_VAULT, SEED_STAKE_ENTRY};
use crate::errors::CustomError;
use crate::events::Withdrawn;
use crate::state::{StakeEntry, StakingPool};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    // Absent for a depositor who never staked; reads as a zero balance.
    #[account(
        mut,
        seeds = [SEED_STAKE_ENTRY, pool.key().as_ref(), depositor.key().as_ref()],
        bump,
    )]
    pub stake_entry: Option<Box<Account<'info, StakeEntry>>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    #[account(address = pool.token_mint)]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let depositor_key = ctx.accounts.depositor.key();
    let beneficiary = ctx.accounts.pool.beneficiary;
    let bump = ctx.accounts.pool.bump;

    let seeds = &[SEED_POOL, beneficiary.as_ref(), &[bump]];
    let signer = &[&seeds[..]];

    let token_program = ctx.accounts.token_program.to_account_info();
    let transfer_accounts = TransferChecked {
        from: ctx.accounts.pool_vault.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.depositor_token_account.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let decimals = ctx.accounts.token_mint.decimals;

    let mut missing = StakeEntry::empty(pool_key, depositor_key);
    let entry: &mut StakeEntry = match ctx.accounts.stake_entry.as_mut() {
        Some(entry) => &mut ***entry,
        None => &mut missing,
    };

    // Ledger is zeroed inside `withdraw` before this closure runs.
    let refunded = ctx.accounts.pool.withdraw(
        entry,
        clock.unix_timestamp,
        &*ctx.accounts.completion,
        move |amount| {
            token::transfer_checked(
                CpiContext::new_with_signer(token_program, transfer_accounts, signer),
                amount,
                decimals,
            )
        },
    )?;

    msg!("Refunded {} from {}", refunded, pool_key);

    emit!(Withdrawn {
        pool: pool_key,
        depositor: depositor_key,
        amount: refunded,
    });

    Ok(())
}
