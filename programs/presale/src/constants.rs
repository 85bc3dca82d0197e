//! Program-wide constants.

/// Fixed-point scale shared by token base units and the configured price
/// (`tokens = payment * SCALE / price`).
pub const SCALE: u64 = 1_000_000_000;

/// Seconds per vesting month (fixed 30-day months).
pub const MONTH_SECONDS: i64 = 30 * 86_400;

/// Percentage points of a purchase unlocked the instant the sale ends.
pub const CLIFF_SHARE: u64 = 40;

/// Additional percentage points unlocked per elapsed month after the cliff.
pub const VESTING_SHARE: u64 = 20;

/// Denominator for unlock-fraction percentages.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// Referral commission divisor: the referral receives 1/20 (5%) of the
/// charged cost.
pub const REFERRAL_DIVISOR: u64 = 20;
