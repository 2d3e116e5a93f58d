use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

declare_id!("uqjn5563Y5g7DCtA5nKbZ7fMZH2NRcJMc3BYRjGVDre");

pub const SEED_COMPLETION: &[u8] = b"completion";
pub const SEED_TREASURY: &[u8] = b"treasury";

#[program]
pub mod external_beneficiary {
    use super::*;

    /// `funder` is the only signer later allowed to call `complete`,
    /// normally the pool PDA that will settle into this beneficiary.
    pub fn initialize(ctx: Context<Initialize>, funder: Pubkey) -> Result<()> {
        let completion = &mut ctx.accounts.completion;
        completion.authority = ctx.accounts.authority.key();
        completion.funder = funder;
        completion.token_mint = ctx.accounts.token_mint.key();
        completion.treasury = ctx.accounts.treasury.key();
        completion.completed = false;
        completion.total_received = 0;
        completion.completed_at = 0;
        completion.bump = ctx.bumps.completion;

        msg!("Beneficiary initialized: {}", completion.key());
        Ok(())
    }

    /// Pulls `amount` from `source` into the treasury and marks completion.
    /// The caller must sign as the authority of `source`.
    pub fn complete(ctx: Context<Complete>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let funder = ctx.accounts.authority.key();
        ctx.accounts
            .completion
            .record(&funder, amount, clock.unix_timestamp)?;

        token::transfer_checked(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.source.to_account_info(),
                    mint: ctx.accounts.token_mint.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.authority.to_account_info(),
                },
            ),
            amount,
            ctx.accounts.token_mint.decimals,
        )?;

        emit!(Completed {
            completion: ctx.accounts.completion.key(),
            funder,
            amount,
        });

        Ok(())
    }
}

#[account]
pub struct Completion {
    pub authority: Pubkey,
    pub funder: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
    pub completed: bool,
    pub total_received: u64,
    pub completed_at: i64,
    pub bump: u8,
}

impl Completion {
    pub const LEN: usize = 8 + 32 + 32 + 32 + 32 + 1 + 8 + 8 + 1;

    pub fn record(&mut self, funder: &Pubkey, amount: u64, now: i64) -> Result<()> {
        require_keys_eq!(*funder, self.funder, BeneficiaryError::Unauthorized);
        require!(!self.completed, BeneficiaryError::AlreadyCompleted);
        require!(amount > 0, BeneficiaryError::ZeroAmount);

        self.completed = true;
        self.total_received = amount;
        self.completed_at = now;
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = Completion::LEN,
        seeds = [SEED_COMPLETION, authority.key().as_ref()],
        bump
    )]
    pub completion: Account<'info, Completion>,

    #[account(
        init,
        payer = authority,
        seeds = [SEED_TREASURY, completion.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = completion,
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct Complete<'info> {
    #[account(
        mut,
        seeds = [SEED_COMPLETION, completion.authority.as_ref()],
        bump = completion.bump
    )]
    pub completion: Account<'info, Completion>,

    pub authority: Signer<'info>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = authority,
    )]
    pub source: Account<'info, TokenAccount>,

    #[account(mut, address = completion.treasury)]
    pub treasury: Account<'info, TokenAccount>,

    #[account(address = completion.token_mint)]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Completed {
    pub completion: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
}

#[error_code]
pub enum BeneficiaryError {
    #[msg("Beneficiary has already completed.")]
    AlreadyCompleted,
    #[msg("Completion amount must be greater than zero.")]
    ZeroAmount,
    #[msg("Signer is not the registered funder.")]
    Unauthorized,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Completion {
        Completion {
            authority: Pubkey::new_unique(),
            funder: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            completed: false,
            total_received: 0,
            completed_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn record_marks_completion_once() {
        let mut completion = fresh();
        let funder = completion.funder;
        completion.record(&funder, 1_200, 42).unwrap();
        assert!(completion.completed);
        assert_eq!(completion.total_received, 1_200);
        assert_eq!(completion.completed_at, 42);

        assert!(completion.record(&funder, 5, 43).is_err());
        assert_eq!(completion.total_received, 1_200);
    }

    #[test]
    fn record_rejects_zero_amount() {
        let mut completion = fresh();
        let funder = completion.funder;
        assert!(completion.record(&funder, 0, 1).is_err());
        assert!(!completion.completed);
    }

    #[test]
    fn record_rejects_unregistered_funder() {
        let mut completion = fresh();
        let stranger = Pubkey::new_unique();
        let err = completion.record(&stranger, 1, 1).unwrap_err();
        match err {
            anchor_lang::error::Error::AnchorError(e) => {
                assert_eq!(e.error_code_number, u32::from(BeneficiaryError::Unauthorized))
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!completion.completed);
        assert_eq!(completion.total_received, 0);
    }
}
