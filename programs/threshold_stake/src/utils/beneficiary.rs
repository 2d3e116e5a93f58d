use anchor_lang::prelude::*;
use external_beneficiary::Completion;

/// Read side of the beneficiary capability.
pub trait CompletionStatus {
    fn completed(&self) -> bool;
}

/// Receives the pooled total. `complete` must take the whole amount or fail
/// without side effects.
pub trait Beneficiary: CompletionStatus {
    fn complete(&mut self, amount: u64) -> Result<()>;
}

impl CompletionStatus for Completion {
    fn completed(&self) -> bool {
        self.completed
    }
}

/// Calls `external_beneficiary::complete` with the pool PDA as signer. The
/// beneficiary pulls the amount out of the pool vault itself, so the transfer
/// and the completion flag land in the same instruction.
pub struct CompletionCpi<'a, 'info> {
    pub completion: &'a Account<'info, Completion>,
    pub beneficiary_program: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub treasury: AccountInfo<'info>,
    pub token_mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl CompletionStatus for CompletionCpi<'_, '_> {
    fn completed(&self) -> bool {
        self.completion.completed
    }
}

impl Beneficiary for CompletionCpi<'_, '_> {
    fn complete(&mut self, amount: u64) -> Result<()> {
        external_beneficiary::cpi::complete(
            CpiContext::new_with_signer(
                self.beneficiary_program.clone(),
                external_beneficiary::cpi::accounts::Complete {
                    completion: self.completion.to_account_info(),
                    authority: self.pool.clone(),
                    source: self.vault.clone(),
                    treasury: self.treasury.clone(),
                    token_mint: self.token_mint.clone(),
                    token_program: self.token_program.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
    }
}
