use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::SaleState;

pub fn initialize(ctx: Context<Initialize>, unit_price: u64) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    st.admin = ctx.accounts.admin.key();
    st.payment_mint = ctx.accounts.payment_mint.key();
    st.unit_price = unit_price;
    st.sale_open = false;
    st.total_percent_allocated = 0;
    st.total_units_allocated = 0;

    emit!(SaleInitialized {
        admin: st.admin,
        payment_mint: st.payment_mint,
        unit_price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + SaleState::SIZE,
        seeds = [b"sale_state"],
        bump
    )]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        init,
        payer = admin,
        token::mint = payment_mint,
        token::authority = sale_state,
        seeds = [b"vault", payment_mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub payment_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct SaleInitialized {
    pub admin: Pubkey,
    pub payment_mint: Pubkey,
    pub unit_price: u64,
}
