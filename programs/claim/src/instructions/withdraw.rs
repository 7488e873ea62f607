use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::ClaimError;
use crate::state::SaleState;

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.sale_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, ClaimError::NotAuthorized);

    require!(
        ctx.accounts.vault.amount >= amount,
        ClaimError::WithdrawalFailed
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"sale_state", &[ctx.bumps.sale_state]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.sale_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
    .map_err(|_| ClaimError::WithdrawalFailed)?;

    emit!(CustodyWithdrawn {
        admin: st.admin,
        mint: ctx.accounts.mint.key(),
        destination: ctx.accounts.destination.key(),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [b"sale_state"], bump)]
    pub sale_state: Account<'info, SaleState>,

    /// Custody vault for `mint`; any custodied asset may be drained, not
    /// just the current payment mint.
    #[account(
        mut,
        seeds = [b"vault", mint.key().as_ref()],
        bump,
        constraint = vault.mint == mint.key() @ ClaimError::WithdrawalFailed,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == mint.key() @ ClaimError::WithdrawalFailed,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct CustodyWithdrawn {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
