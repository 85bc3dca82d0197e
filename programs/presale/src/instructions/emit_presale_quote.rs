use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::PresaleError;
use crate::state::{PresaleState, VestingRecord};
use crate::utils::vesting;

/// Off-chain read surface: emits the derived sale and per-wallet vesting
/// figures as one event. A wallet that never purchased reports zeros.
pub fn emit_presale_quote(ctx: Context<EmitPresaleQuote>, wallet: Pubkey) -> Result<()> {
    let st = &ctx.accounts.presale_state;
    let now = Clock::get()?.unix_timestamp;

    let (purchased_amount, claimed_amount) = match ctx.accounts.vesting_record.as_ref() {
        Some(record) => (record.purchased_amount, record.claimed_amount),
        None => (0, 0),
    };
    let claimable = vesting::claimable_amount(purchased_amount, claimed_amount, now, st.end_ts)?;

    emit!(PresaleQuote {
        wallet,
        amount_left: st.amount_left(),
        end_ts: st.end_ts,
        price: st.price,
        token_balance: ctx.accounts.vault.amount,
        purchased_amount,
        claimed_amount,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitPresaleQuote<'info> {
    #[account(seeds = [b"presale_state"], bump)]
    pub presale_state: Account<'info, PresaleState>,

    #[account(
        seeds = [b"vault", presale_state.key().as_ref()],
        bump,
        constraint = vault.mint == presale_state.mint @ PresaleError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        seeds = [b"vesting_record", wallet.as_ref()],
        bump
    )]
    pub vesting_record: Option<Account<'info, VestingRecord>>,
}

#[event]
pub struct PresaleQuote {
    pub wallet: Pubkey,
    pub amount_left: u64,
    pub end_ts: i64,
    pub price: u64,
    pub token_balance: u64,
    pub purchased_amount: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
}
