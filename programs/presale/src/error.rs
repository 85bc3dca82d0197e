use anchor_lang::prelude::*;

/// Custom error codes for the presale program.
#[error_code]
pub enum PresaleError {
    #[msg("Unauthorized: owner signature required")]
    NotOwner,

    #[msg("Presale is not active")]
    SaleNotActive,

    #[msg("No tokens left")]
    SupplyExhausted,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("No tokens to claim")]
    NothingToClaim,

    #[msg("Not enough tokens in the contract")]
    InsufficientCustodyBalance,

    #[msg("Presale has not ended yet")]
    SaleNotEnded,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
