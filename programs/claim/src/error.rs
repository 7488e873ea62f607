use anchor_lang::prelude::*;

/// Custom error codes for the allocation claim program (spec-authoritative).
#[error_code]
pub enum ClaimError {
    #[msg("Unauthorized: admin signature required")]
    NotAuthorized,

    #[msg("Sale is closed")]
    SaleClosed,

    #[msg("Address is not whitelisted")]
    NotWhitelisted,

    #[msg("Cannot buy more than allowed")]
    ExceedsAllowance,

    #[msg("Purchase below minimum amount")]
    BelowMinimum,

    #[msg("Payment transfer failed")]
    PaymentTransferFailed,

    #[msg("Allocation would exceed a global cap")]
    CapacityExceeded,

    #[msg("Claimer kind is already set and cannot change")]
    ImmutableKind,

    #[msg("Caller holds no allocation to migrate")]
    NothingToMigrate,

    #[msg("No matching migration push recorded")]
    NoPushRecorded,

    #[msg("Destination already holds an allocation")]
    DestinationOccupied,

    #[msg("Withdrawal failed")]
    WithdrawalFailed,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,
}
