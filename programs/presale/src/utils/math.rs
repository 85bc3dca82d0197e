//! Fixed-price conversion between payment lamports and token base units.
//!
//! All intermediates widen to u128; the floor of the integer division is the
//! normative rounding everywhere, for both directions of the conversion.

use crate::constants::{REFERRAL_DIVISOR, SCALE};
use crate::error::PresaleError;

/// Outcome of filling a purchase against remaining supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fill {
    /// Base units actually sold.
    pub tokens: u64,
    /// Lamports actually charged for `tokens`.
    pub cost: u64,
}

/// floor(payment * SCALE / price). A zero result means the payment is below
/// the smallest sellable unit; there is no separate minimum-payment constant.
pub fn tokens_for_payment(payment: u64, price: u64) -> Result<u64, PresaleError> {
    if price == 0 {
        return Err(PresaleError::InvalidConfig);
    }
    let tokens = (payment as u128)
        .checked_mul(SCALE as u128)
        .ok_or(PresaleError::MathOverflow)?
        / (price as u128);
    u64::try_from(tokens).map_err(|_| PresaleError::MathOverflow)
}

/// floor(tokens * price / SCALE): the charge for a capped fill, using the
/// same floor convention as `tokens_for_payment`.
pub fn cost_for_tokens(tokens: u64, price: u64) -> Result<u64, PresaleError> {
    let cost = (tokens as u128)
        .checked_mul(price as u128)
        .ok_or(PresaleError::MathOverflow)?
        / (SCALE as u128);
    u64::try_from(cost).map_err(|_| PresaleError::MathOverflow)
}

/// Convert `payment` at `price` and cap the fill against `remaining` supply.
///
/// A capped fill charges only the truncated cost of the remaining tokens, so
/// the buyer is never charged for tokens the sale cannot deliver. A
/// non-capped fill consumes the full payment; the floor remainder stays with
/// the seller.
pub fn fill_order(payment: u64, price: u64, remaining: u64) -> Result<Fill, PresaleError> {
    let requested = tokens_for_payment(payment, price)?;
    if requested == 0 {
        return Err(PresaleError::InsufficientFunds);
    }
    if requested > remaining {
        Ok(Fill {
            tokens: remaining,
            cost: cost_for_tokens(remaining, price)?,
        })
    } else {
        Ok(Fill {
            tokens: requested,
            cost: payment,
        })
    }
}

/// Referral commission: floor(cost / 20). The owner residual is always
/// `cost - referral_share(cost)`, never an independently rounded 95%.
pub fn referral_share(cost: u64) -> u64 {
    cost / REFERRAL_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1.25e13 lamports per whole token.
    const PRICE: u64 = 12_500_000_000_000;

    #[test]
    fn floors_token_conversion() {
        let payment: u64 = 9_879_879_879_879_879_877;
        // SCALE / PRICE reduces to an exact divisor of 12_500.
        assert_eq!(
            tokens_for_payment(payment, PRICE).unwrap(),
            790_390_390_390_390
        );
    }

    #[test]
    fn one_unit_threshold() {
        assert_eq!(tokens_for_payment(12_499, PRICE).unwrap(), 0);
        assert!(matches!(
            fill_order(12_499, PRICE, u64::MAX),
            Err(PresaleError::InsufficientFunds)
        ));
        assert_eq!(
            fill_order(12_500, PRICE, 1_000).unwrap(),
            Fill {
                tokens: 1,
                cost: 12_500
            }
        );
    }

    #[test]
    fn non_capped_fill_consumes_full_payment() {
        let payment = 12_500 * 7 + 3;
        let fill = fill_order(payment, PRICE, 1_000).unwrap();
        assert_eq!(fill.tokens, 7);
        assert_eq!(fill.cost, payment);
        // The payment covers at least the sold tokens at the configured price.
        assert!(
            (fill.tokens as u128) * (PRICE as u128) <= (fill.cost as u128) * (SCALE as u128)
        );
    }

    #[test]
    fn capped_fill_charges_truncated_cost() {
        let remaining = 10;
        let payment = 100 * 12_500 + 7;
        let fill = fill_order(payment, PRICE, remaining).unwrap();
        assert_eq!(fill.tokens, remaining);
        assert_eq!(fill.cost, 10 * 12_500);
        assert!(fill.cost <= payment);
        // Truncation never overcharges relative to the exact product.
        assert!(
            (fill.cost as u128) * (SCALE as u128) <= (fill.tokens as u128) * (PRICE as u128)
        );
    }

    #[test]
    fn never_charges_above_payment() {
        for payment in [
            12_500u64,
            12_501,
            25_000,
            1_000_000_007,
            9_879_879_879_879_879_877,
        ] {
            let fill = fill_order(payment, PRICE, u64::MAX).unwrap();
            assert!(fill.cost <= payment);
            let capped = fill_order(payment, PRICE, 3).unwrap();
            assert!(capped.cost <= payment);
            assert!(capped.tokens <= 3);
        }
    }

    #[test]
    fn referral_share_floors_then_subtracts() {
        let cost: u64 = 9_879_879_879_879_879_877;
        let share = referral_share(cost);
        assert_eq!(share, 493_993_993_993_993_993);
        let residual = cost - share;
        assert_eq!(residual, 9_385_885_885_885_885_884);
        // Differs from an independently floored 95% by one unit here.
        assert_eq!(residual, (cost as u128 * 19 / 20) as u64 + 1);
    }

    #[test]
    fn referral_share_of_truncated_cost() {
        // On a capped fill the 5% comes out of the truncated cost, not the
        // original payment.
        let fill = fill_order(u64::MAX / 2, PRICE, 33).unwrap();
        assert_eq!(fill.cost, 33 * 12_500);
        assert_eq!(referral_share(fill.cost), 33 * 12_500 / 20);
    }
}
