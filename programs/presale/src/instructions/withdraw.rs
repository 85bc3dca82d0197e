use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::PresaleError;
use crate::state::PresaleState;

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let st = &ctx.accounts.presale_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, PresaleError::NotOwner);

    let now = Clock::get()?.unix_timestamp;
    require!(now >= st.end_ts, PresaleError::SaleNotEnded);

    // Sweep everything above the rent floor; a repeat call moves zero and
    // still succeeds.
    let rent_floor = Rent::get()?.minimum_balance(0);
    let amount = ctx
        .accounts
        .sol_vault
        .lamports()
        .saturating_sub(rent_floor);

    let presale_state_key = ctx.accounts.presale_state.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"sol_vault",
        presale_state_key.as_ref(),
        &[ctx.bumps.sol_vault],
    ]];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.sol_vault.to_account_info(),
                to: ctx.accounts.owner.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(ProceedsWithdrawn {
        owner: st.owner,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [b"presale_state"], bump)]
    pub presale_state: Account<'info, PresaleState>,

    #[account(
        mut,
        seeds = [b"sol_vault", presale_state.key().as_ref()],
        bump
    )]
    pub sol_vault: SystemAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ProceedsWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
}
