use anchor_lang::prelude::*;

use crate::error::ClaimError;
use crate::state::SaleState;

pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), ClaimError::InvalidPubkey);

    let st = &mut ctx.accounts.sale_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, ClaimError::NotAuthorized);

    let old = st.admin;
    st.admin = new_admin;

    emit!(AdminSet {
        old_admin: old,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(mut, seeds = [b"sale_state"], bump)]
    pub sale_state: Account<'info, SaleState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminSet {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
