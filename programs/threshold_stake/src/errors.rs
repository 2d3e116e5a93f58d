use anchor_lang::prelude::*;

#[error_code]
pub enum CustomError {
    #[msg("Staking deadline has passed.")]
    DeadlinePassed,
    #[msg("Staking deadline has not been reached yet.")]
    DeadlineNotReached,
    #[msg("Beneficiary has already completed.")]
    AlreadyCompleted,
    #[msg("Stake amount is below the pool minimum.")]
    InsufficientAmount,
    #[msg("Pool total is below the threshold.")]
    ThresholdNotMet,
    #[msg("Beneficiary rejected the completion call.")]
    BeneficiaryRejected,
    #[msg("No balance to withdraw.")]
    NothingToWithdraw,
    #[msg("Outbound transfer to depositor failed.")]
    TransferFailed,
    #[msg("Minimum stake must be non-zero and not exceed the threshold.")]
    InvalidPoolConfig,
    #[msg("Math operation overflow.")]
    MathOverflow,
    #[msg("Account does not belong to this pool's beneficiary.")]
    BeneficiaryMismatch,
}
