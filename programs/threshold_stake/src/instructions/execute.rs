use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use external_beneficiary::Completion;
use crate::constants::{SEED_POOL, SEED_POOL_VAULT};
use crate::errors::CustomError;
use crate::events::Executed;
use crate::state::StakingPool;
use crate::utils::beneficiary::CompletionCpi;

/// No depositor check: once the threshold is met anyone may settle.
#[derive(Accounts)]
pub struct Execute<'info> {
    pub caller: Signer<'info>,

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

    #[account(mut, address = pool.beneficiary @ CustomError::BeneficiaryMismatch)]
    pub completion: Account<'info, Completion>,

    #[account(mut, address = completion.treasury @ CustomError::BeneficiaryMismatch)]
    pub beneficiary_treasury: Account<'info, TokenAccount>,

    #[account(address = pool.token_mint)]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: pinned to the beneficiary program id
    #[account(address = external_beneficiary::ID)]
    pub beneficiary_program: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn execute(ctx: Context<Execute>) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let pool_info = ctx.accounts.pool.to_account_info();
    let beneficiary = ctx.accounts.pool.beneficiary;
    let bump = ctx.accounts.pool.bump;

    let seeds = &[SEED_POOL, beneficiary.as_ref(), &[bump]];
    let signer = &[&seeds[..]];

    let mut sink = CompletionCpi {
        completion: &ctx.accounts.completion,
        beneficiary_program: ctx.accounts.beneficiary_program.to_account_info(),
        pool: pool_info,
        vault: ctx.accounts.pool_vault.to_account_info(),
        treasury: ctx.accounts.beneficiary_treasury.to_account_info(),
        token_mint: ctx.accounts.token_mint.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    let amount = ctx.accounts.pool.execute(&mut sink)?;

    msg!("Pool {} forwarded {} to {}", pool_key, amount, beneficiary);

    emit!(Executed {
        pool: pool_key,
        caller: ctx.accounts.caller.key(),
        amount,
    });

    Ok(())
}
