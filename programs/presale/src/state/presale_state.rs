use anchor_lang::prelude::*;

/// Single presale state PDA.
#[account]
pub struct PresaleState {
    /// Mint of the token being sold.
    pub mint: Pubkey,
    /// Owner authority (may end the sale early and collect proceeds).
    pub owner: Pubkey,
    /// Sale open timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// Effective sale end. Initialized to `start_ts + duration`; only ever
    /// tightened afterward, by `end_presale` or by supply exhaustion.
    pub end_ts: i64,
    /// Payment lamports per whole token, scaled by `SCALE`.
    pub price: u64,
    /// Total sellable supply in token base units.
    pub total_supply: u64,
    /// Cumulative base units sold. Invariant: `amount_sold <= total_supply`.
    pub amount_sold: u64,
}

impl PresaleState {
    pub const SIZE: usize =
        32 + // mint
        32 + // owner
        8 +  // start_ts
        8 +  // end_ts
        8 +  // price
        8 +  // total_supply
        8;   // amount_sold

    /// Remaining sellable capacity.
    pub fn amount_left(&self) -> u64 {
        self.total_supply.saturating_sub(self.amount_sold)
    }

    /// Whether purchases are admitted at `now`. Always recomputed from the
    /// clock; never cached.
    pub fn is_active(&self, now: i64) -> bool {
        now >= self.start_ts && now < self.end_ts && self.amount_sold < self.total_supply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(start_ts: i64, end_ts: i64, sold: u64) -> PresaleState {
        PresaleState {
            mint: Pubkey::default(),
            owner: Pubkey::default(),
            start_ts,
            end_ts,
            price: 1,
            total_supply: 100,
            amount_sold: sold,
        }
    }

    #[test]
    fn window_is_half_open() {
        let st = state(100, 200, 0);
        assert!(!st.is_active(99));
        assert!(st.is_active(100));
        assert!(st.is_active(199));
        assert!(!st.is_active(200));
    }

    #[test]
    fn exhausted_supply_deactivates() {
        let st = state(100, 200, 100);
        assert!(!st.is_active(150));
        assert_eq!(st.amount_left(), 0);
    }
}
