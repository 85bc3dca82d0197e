use anchor_lang::prelude::*;

use crate::error::PresaleError;
use crate::state::PresaleState;

pub fn end_presale(ctx: Context<EndPresale>) -> Result<()> {
    let st = &mut ctx.accounts.presale_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, PresaleError::NotOwner);

    let now = Clock::get()?.unix_timestamp;
    // min() keeps repeated calls from ever extending an ended sale.
    st.end_ts = st.end_ts.min(now);

    emit!(PresaleEnded {
        owner: st.owner,
        end_ts: st.end_ts,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EndPresale<'info> {
    #[account(mut, seeds = [b"presale_state"], bump)]
    pub presale_state: Account<'info, PresaleState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct PresaleEnded {
    pub owner: Pubkey,
    pub end_ts: i64,
}
