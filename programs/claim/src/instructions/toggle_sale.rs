use anchor_lang::prelude::*;

use crate::error::ClaimError;
use crate::state::SaleState;

pub fn toggle_sale(ctx: Context<ToggleSale>) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, ClaimError::NotAuthorized);

    st.sale_open = !st.sale_open;

    emit!(SaleStatusToggled {
        admin: st.admin,
        sale_open: st.sale_open,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ToggleSale<'info> {
    #[account(mut, seeds = [b"sale_state"], bump)]
    pub sale_state: Account<'info, SaleState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct SaleStatusToggled {
    pub admin: Pubkey,
    pub sale_open: bool,
}
