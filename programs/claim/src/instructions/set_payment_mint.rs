use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::ClaimError;
use crate::state::SaleState;

pub fn set_payment_mint(ctx: Context<SetPaymentMint>) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, ClaimError::NotAuthorized);

    let old = st.payment_mint;
    st.payment_mint = ctx.accounts.new_payment_mint.key();

    emit!(PaymentMintSet {
        admin: st.admin,
        old_mint: old,
        new_mint: st.payment_mint,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPaymentMint<'info> {
    #[account(mut, seeds = [b"sale_state"], bump)]
    pub sale_state: Account<'info, SaleState>,

    /// Custody for the new payment asset; created here so the purchase
    /// path can rely on the vault existing for the current mint.
    #[account(
        init_if_needed,
        payer = admin,
        token::mint = new_payment_mint,
        token::authority = sale_state,
        seeds = [b"vault", new_payment_mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub new_payment_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PaymentMintSet {
    pub admin: Pubkey,
    pub old_mint: Pubkey,
    pub new_mint: Pubkey,
}
