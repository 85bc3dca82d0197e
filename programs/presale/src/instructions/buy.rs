use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::PresaleError;
use crate::state::{PresaleState, VestingRecord};
use crate::utils::math;

pub fn buy(ctx: Context<Buy>, payment: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let buyer_key = ctx.accounts.buyer.key();

    let st = &mut ctx.accounts.presale_state;
    // Exhaustion reported ahead of the generic window check, so a sold-out
    // sale surfaces the specific cause.
    require!(
        st.amount_sold < st.total_supply,
        PresaleError::SupplyExhausted
    );
    require!(st.is_active(now), PresaleError::SaleNotActive);

    let fill = math::fill_order(payment, st.price, st.amount_left())?;

    // Commission only for a real third party; the buyer itself or the
    // default pubkey counts as no referral.
    let referral = ctx
        .accounts
        .referral
        .as_ref()
        .filter(|r| r.key() != buyer_key && r.key() != Pubkey::default());
    let referral_share = match referral {
        Some(_) => math::referral_share(fill.cost),
        None => 0,
    };
    let proceeds = fill
        .cost
        .checked_sub(referral_share)
        .ok_or(PresaleError::MathOverflow)?;

    st.amount_sold = st
        .amount_sold
        .checked_add(fill.tokens)
        .ok_or(PresaleError::MathOverflow)?;
    if st.amount_sold == st.total_supply {
        // Supply exhaustion ends the sale on the spot; the public end time
        // must reflect it.
        st.end_ts = st.end_ts.min(now);
    }

    let record = &mut ctx.accounts.vesting_record;
    if record.buyer == Pubkey::default() {
        record.buyer = buyer_key;
    }
    record.purchased_amount = record
        .purchased_amount
        .checked_add(fill.tokens)
        .ok_or(PresaleError::MathOverflow)?;

    // Interactions after all state updates. The buyer is charged exactly
    // `fill.cost`; on a capped fill the remainder of `payment` is simply
    // never debited.
    if let Some(referral) = referral {
        if referral_share > 0 {
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.buyer.to_account_info(),
                        to: referral.to_account_info(),
                    },
                ),
                referral_share,
            )?;
        }
    }
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.sol_vault.to_account_info(),
            },
        ),
        proceeds,
    )?;

    emit!(Purchase {
        buyer: buyer_key,
        amount: fill.tokens,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut, seeds = [b"presale_state"], bump)]
    pub presale_state: Account<'info, PresaleState>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + VestingRecord::SIZE,
        seeds = [b"vesting_record", buyer.key().as_ref()],
        bump
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    /// Accrues seller proceeds until swept by `withdraw`.
    #[account(
        mut,
        seeds = [b"sol_vault", presale_state.key().as_ref()],
        bump
    )]
    pub sol_vault: SystemAccount<'info>,

    /// Referral named by the buyer, paid 5% of the charged cost.
    #[account(mut)]
    pub referral: Option<SystemAccount<'info>>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Purchase {
    pub buyer: Pubkey,
    pub amount: u64,
}
