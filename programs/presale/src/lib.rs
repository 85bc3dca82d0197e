use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("EmcETFRC5ftDYwNn6cHB3zQioNH1z8cRSwx5MZC1BPRs");

#[program]
pub mod presale {
    use super::*;

    pub fn initialize_presale(
        ctx: Context<InitializePresale>,
        start_ts: i64,
        duration: i64,
        price: u64,
        total_supply: u64,
    ) -> Result<()> {
        instructions::initialize_presale::initialize_presale(
            ctx,
            start_ts,
            duration,
            price,
            total_supply,
        )
    }

    pub fn buy(ctx: Context<Buy>, payment: u64) -> Result<()> {
        instructions::buy::buy(ctx, payment)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    pub fn end_presale(ctx: Context<EndPresale>) -> Result<()> {
        instructions::end_presale::end_presale(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::withdraw(ctx)
    }

    pub fn emit_presale_quote(ctx: Context<EmitPresaleQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_presale_quote::emit_presale_quote(ctx, wallet)
    }
}
