use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::PresaleError;
use crate::state::{PresaleState, VestingRecord};
use crate::utils::vesting;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    // Capture AccountInfo before taking borrows for the CPI below.
    let presale_state_ai = ctx.accounts.presale_state.to_account_info();
    let presale_state_bump = ctx.bumps.presale_state;

    let st = &ctx.accounts.presale_state;
    let now = Clock::get()?.unix_timestamp;

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, PresaleError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.buyer_token_account.mint,
        st.mint,
        PresaleError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.buyer_token_account.owner,
        ctx.accounts.buyer.key(),
        PresaleError::InvalidTokenAccount
    );

    let record = &mut ctx.accounts.vesting_record;
    // Computed once; the same value feeds the transfer and the ledger update.
    let claimable = vesting::claimable_amount(
        record.purchased_amount,
        record.claimed_amount,
        now,
        st.end_ts,
    )?;
    require!(claimable > 0, PresaleError::NothingToClaim);

    // Custody may lag behind sales; the buyer retries once it is topped up.
    require!(
        ctx.accounts.vault.amount >= claimable,
        PresaleError::InsufficientCustodyBalance
    );

    record.claimed_amount = record
        .claimed_amount
        .checked_add(claimable)
        .ok_or(PresaleError::MathOverflow)?;

    let signer_seeds: &[&[&[u8]]] = &[&[b"presale_state", &[presale_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.buyer_token_account.to_account_info(),
                authority: presale_state_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    emit!(TokensClaimed {
        buyer: ctx.accounts.buyer.key(),
        amount: claimable,
        claimed_total: record.claimed_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(seeds = [b"presale_state"], bump)]
    pub presale_state: Account<'info, PresaleState>,

    #[account(
        mut,
        seeds = [b"vesting_record", buyer.key().as_ref()],
        bump
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    #[account(
        mut,
        seeds = [b"vault", presale_state.key().as_ref()],
        bump,
        constraint = vault.mint == presale_state.mint @ PresaleError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub buyer: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
}
