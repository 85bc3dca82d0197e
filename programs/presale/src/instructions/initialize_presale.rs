use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::PresaleError;
use crate::state::PresaleState;

pub fn initialize_presale(
    ctx: Context<InitializePresale>,
    start_ts: i64,
    duration: i64,
    price: u64,
    total_supply: u64,
) -> Result<()> {
    require!(total_supply > 0, PresaleError::InvalidConfig);
    require!(price > 0, PresaleError::InvalidConfig);
    require!(duration > 0, PresaleError::InvalidConfig);
    require!(start_ts > 0, PresaleError::InvalidTimestamp);

    let end_ts = start_ts
        .checked_add(duration)
        .ok_or(PresaleError::MathOverflow)?;

    let st = &mut ctx.accounts.presale_state;
    st.mint = ctx.accounts.mint.key();
    st.owner = ctx.accounts.owner.key();
    st.start_ts = start_ts;
    st.end_ts = end_ts;
    st.price = price;
    st.total_supply = total_supply;
    st.amount_sold = 0;

    emit!(PresaleInitialized {
        mint: st.mint,
        owner: st.owner,
        start_ts,
        end_ts,
        price,
        total_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePresale<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + PresaleState::SIZE,
        seeds = [b"presale_state"],
        bump
    )]
    pub presale_state: Account<'info, PresaleState>,

    /// Custody vault for the sellable supply; seeded by a plain SPL transfer
    /// before the sale opens.
    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = presale_state,
        seeds = [b"vault", presale_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PresaleInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub start_ts: i64,
    pub end_ts: i64,
    pub price: u64,
    pub total_supply: u64,
}
