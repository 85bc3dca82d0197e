//! Cliff-plus-linear unlock schedule over fixed 30-day months.
//!
//! Nothing unlocks while the sale runs. At the effective sale end 40% of a
//! buyer's purchase unlocks at once; each subsequent whole month unlocks a
//! further 20%, reaching 100% three months after the end.

use crate::constants::{CLIFF_SHARE, MONTH_SECONDS, PERCENT_DENOMINATOR, VESTING_SHARE};
use crate::error::PresaleError;

/// Whole months elapsed between the sale end and `now` (0 before the end).
pub fn months_elapsed(now: i64, end_ts: i64) -> u64 {
    if now <= end_ts {
        return 0;
    }
    ((now - end_ts) / MONTH_SECONDS) as u64
}

/// Unlocked percentage points at `months` elapsed since the sale end,
/// capped at 100.
pub fn unlocked_fraction(months: u64) -> u64 {
    CLIFF_SHARE
        .saturating_add(VESTING_SHARE.saturating_mul(months))
        .min(PERCENT_DENOMINATOR)
}

/// floor(purchased * fraction / 100) unlocked at `now`; 0 while the sale is
/// still running.
pub fn unlocked_amount(purchased: u64, now: i64, end_ts: i64) -> Result<u64, PresaleError> {
    if now < end_ts {
        return Ok(0);
    }
    let fraction = unlocked_fraction(months_elapsed(now, end_ts));
    let unlocked = (purchased as u128)
        .checked_mul(fraction as u128)
        .ok_or(PresaleError::MathOverflow)?
        / (PERCENT_DENOMINATOR as u128);
    u64::try_from(unlocked).map_err(|_| PresaleError::MathOverflow)
}

/// Claimable delta at `now`: unlocked minus already claimed. Claims only ever
/// advance `claimed` to the then-current unlocked amount, and the unlocked
/// amount is monotone in both time and purchases, so the subtraction cannot
/// underflow.
pub fn claimable_amount(
    purchased: u64,
    claimed: u64,
    now: i64,
    end_ts: i64,
) -> Result<u64, PresaleError> {
    let unlocked = unlocked_amount(purchased, now, end_ts)?;
    unlocked.checked_sub(claimed).ok_or(PresaleError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const END: i64 = 1_700_000_000;

    #[test]
    fn fraction_schedule() {
        assert_eq!(unlocked_fraction(0), 40);
        assert_eq!(unlocked_fraction(1), 60);
        assert_eq!(unlocked_fraction(2), 80);
        assert_eq!(unlocked_fraction(3), 100);
        assert_eq!(unlocked_fraction(4), 100);
        assert_eq!(unlocked_fraction(u64::MAX), 100);
    }

    #[test]
    fn locked_during_sale() {
        assert_eq!(unlocked_amount(1_000, END - 1, END).unwrap(), 0);
        assert_eq!(claimable_amount(1_000, 0, END - 1, END).unwrap(), 0);
    }

    #[test]
    fn cliff_at_exact_end() {
        assert_eq!(unlocked_amount(1_000, END, END).unwrap(), 400);
    }

    #[test]
    fn monthly_steps() {
        let amount = 790_390_390_390_390u64;
        assert_eq!(
            claimable_amount(amount, 0, END, END).unwrap(),
            amount * 40 / 100
        );
        assert_eq!(
            claimable_amount(amount, 0, END + MONTH_SECONDS, END).unwrap(),
            amount * 60 / 100
        );
        assert_eq!(
            claimable_amount(amount, 0, END + 2 * MONTH_SECONDS, END).unwrap(),
            amount * 80 / 100
        );
        assert_eq!(
            claimable_amount(amount, 0, END + 3 * MONTH_SECONDS, END).unwrap(),
            amount
        );
        assert_eq!(
            claimable_amount(amount, 0, END + 48 * MONTH_SECONDS, END).unwrap(),
            amount
        );
    }

    #[test]
    fn mid_month_does_not_unlock() {
        let amount = 1_000u64;
        let two_and_a_half = END + 2 * MONTH_SECONDS + MONTH_SECONDS / 2;
        assert_eq!(unlocked_amount(amount, two_and_a_half, END).unwrap(), 800);
        // One second before the month boundary still pays the prior step.
        assert_eq!(
            unlocked_amount(amount, END + MONTH_SECONDS - 1, END).unwrap(),
            400
        );
        assert_eq!(
            unlocked_amount(amount, END + MONTH_SECONDS, END).unwrap(),
            600
        );
    }

    #[test]
    fn unlock_is_monotone_until_full() {
        let amount = 123_456_789u64;
        let mut prev = 0;
        for day in 0..120 {
            let unlocked = unlocked_amount(amount, END + day * DAY, END).unwrap();
            assert!(unlocked >= prev);
            prev = unlocked;
        }
        assert_eq!(prev, amount);
    }

    #[test]
    fn claims_drain_to_exactly_purchased() {
        let amount = 1_000_003u64;
        let mut claimed = 0u64;
        for month in 0..5 {
            let now = END + month * MONTH_SECONDS;
            let claimable = claimable_amount(amount, claimed, now, END).unwrap();
            claimed += claimable;
            assert!(claimed <= amount);
            // Immediately after a claim there is nothing left at the same
            // instant.
            assert_eq!(claimable_amount(amount, claimed, now, END).unwrap(), 0);
        }
        assert_eq!(claimed, amount);
    }

    #[test]
    fn further_purchase_reopens_claims() {
        let now = END + 4 * MONTH_SECONDS;
        assert_eq!(claimable_amount(500, 500, now, END).unwrap(), 0);
        assert_eq!(claimable_amount(900, 500, now, END).unwrap(), 400);
    }
}
