use anchor_lang::prelude::*;

/// Per-buyer vesting record PDA, created lazily on first purchase and never
/// deleted.
#[account]
pub struct VestingRecord {
    /// Record owner.
    pub buyer: Pubkey,
    /// Cumulative base units purchased across all of the buyer's purchases.
    pub purchased_amount: u64,
    /// Cumulative base units already claimed.
    /// Invariant: `claimed_amount <= purchased_amount`.
    pub claimed_amount: u64,
}

impl VestingRecord {
    pub const SIZE: usize =
        32 + // buyer
        8 +  // purchased_amount
        8;   // claimed_amount
}
