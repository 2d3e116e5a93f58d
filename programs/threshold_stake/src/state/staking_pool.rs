use anchor_lang::prelude::*;
use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::CustomError;
use crate::state::StakeEntry;
use crate::utils::beneficiary::{Beneficiary, CompletionStatus};

/// Coarse lifecycle of a pool, derived from the clock, the held total and the
/// beneficiary's completion flag. Nothing stores it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolPhase {
    /// Before the deadline, threshold not yet reached.
    Open,
    /// Threshold reached and not yet executed. Deadline state does not matter.
    GoalMetPending,
    /// Deadline passed below threshold. Depositors may reclaim.
    ExpiredUnmet,
    /// Beneficiary has completed. Terminal.
    Completed,
}

#[account]
pub struct StakingPool {
    pub creator: Pubkey,
    /// Completion account of the beneficiary. Fixed at creation.
    pub beneficiary: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,

    pub created_at: i64,
    pub deadline: i64,

    pub threshold: u64,
    pub min_stake: u64,

    /// Sum of all live ledger balances until execution, 0 afterwards.
    pub total_held: u64,
    pub total_forwarded: u64,
    pub depositor_count: u32,

    pub bump: u8,
    pub vault_bump: u8,
}

impl StakingPool {
    pub const LEN: usize = DISCRIMINATOR_SIZE
        + 32 // creator
        + 32 // beneficiary
        + 32 // token_mint
        + 32 // vault
        + 8 // created_at
        + 8 // deadline
        + 8 // threshold
        + 8 // min_stake
        + 8 // total_held
        + 8 // total_forwarded
        + 4 // depositor_count
        + 1 // bump
        + 1; // vault_bump

    pub fn time_left(&self, now: i64) -> i64 {
        self.deadline.saturating_sub(now).max(0)
    }

    pub fn goal_met(&self) -> bool {
        self.total_held >= self.threshold
    }

    pub fn phase(&self, now: i64, completed: bool) -> PoolPhase {
        if completed {
            PoolPhase::Completed
        } else if self.goal_met() {
            PoolPhase::GoalMetPending
        } else if self.time_left(now) > 0 {
            PoolPhase::Open
        } else {
            PoolPhase::ExpiredUnmet
        }
    }

    /// Credits `amount` to `entry`. Returns the depositor's new balance.
    pub fn stake<S: CompletionStatus + ?Sized>(
        &mut self,
        entry: &mut StakeEntry,
        amount: u64,
        now: i64,
        beneficiary: &S,
    ) -> Result<u64> {
        require!(!beneficiary.completed(), CustomError::AlreadyCompleted);
        require!(self.time_left(now) > 0, CustomError::DeadlinePassed);
        require_gte!(amount, self.min_stake, CustomError::InsufficientAmount);

        let balance = entry
            .balance
            .checked_add(amount)
            .ok_or(CustomError::MathOverflow)?;
        let total_held = self
            .total_held
            .checked_add(amount)
            .ok_or(CustomError::MathOverflow)?;

        entry.balance = balance;
        self.total_held = total_held;
        Ok(balance)
    }

    /// Counts a depositor's first ledger entry. Returns the new count.
    pub fn register_depositor(&mut self) -> Result<u32> {
        self.depositor_count = self
            .depositor_count
            .checked_add(1)
            .ok_or(CustomError::MathOverflow)?;
        Ok(self.depositor_count)
    }

    /// Hands the whole held total to the beneficiary. The held total is
    /// cleared before the call and restored if the beneficiary rejects.
    pub fn execute<B: Beneficiary + ?Sized>(&mut self, beneficiary: &mut B) -> Result<u64> {
        require!(!beneficiary.completed(), CustomError::AlreadyCompleted);
        require!(self.goal_met(), CustomError::ThresholdNotMet);

        let amount = self.total_held;
        self.total_held = 0;

        if let Err(e) = beneficiary.complete(amount) {
            self.total_held = amount;
            msg!("Beneficiary rejected completion: {:?}", e);
            return err!(CustomError::BeneficiaryRejected);
        }

        self.total_forwarded = amount;
        Ok(amount)
    }

    /// Zeroes `entry` and then pays its balance out through `transfer`.
    /// A failed transfer puts the balance and the held total back.
    pub fn withdraw<S, F>(
        &mut self,
        entry: &mut StakeEntry,
        now: i64,
        beneficiary: &S,
        transfer: F,
    ) -> Result<u64>
    where
        S: CompletionStatus + ?Sized,
        F: FnOnce(u64) -> Result<()>,
    {
        require!(!beneficiary.completed(), CustomError::AlreadyCompleted);
        require!(self.time_left(now) == 0, CustomError::DeadlineNotReached);

        let balance = entry.balance;
        require!(balance > 0, CustomError::NothingToWithdraw);

        let remaining = self
            .total_held
            .checked_sub(balance)
            .ok_or(CustomError::MathOverflow)?;
        entry.balance = 0;
        self.total_held = remaining;

        if let Err(e) = transfer(balance) {
            entry.balance = balance;
            self.total_held = remaining + balance;
            msg!("Refund transfer failed: {:?}", e);
            return err!(CustomError::TransferFailed);
        }

        Ok(balance)
    }
}
