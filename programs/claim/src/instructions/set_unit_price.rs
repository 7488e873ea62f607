use anchor_lang::prelude::*;

use crate::error::ClaimError;
use crate::state::SaleState;

pub fn set_unit_price(ctx: Context<SetUnitPrice>, new_price: u64) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, ClaimError::NotAuthorized);

    let old = st.unit_price;
    st.unit_price = new_price;

    emit!(UnitPriceSet {
        admin: st.admin,
        old_price: old,
        new_price,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetUnitPrice<'info> {
    #[account(mut, seeds = [b"sale_state"], bump)]
    pub sale_state: Account<'info, SaleState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct UnitPriceSet {
    pub admin: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
}
