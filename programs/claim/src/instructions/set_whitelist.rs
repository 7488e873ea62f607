use anchor_lang::prelude::*;

use crate::error::ClaimError;
use crate::state::{SaleState, WhitelistEntry};

pub fn set_whitelist(
    ctx: Context<SetWhitelist>,
    participant: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(participant != Pubkey::default(), ClaimError::InvalidPubkey);

    let st = &ctx.accounts.sale_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, ClaimError::NotAuthorized);

    // Assignment, not accumulation: the admin states the full remaining
    // balance each time.
    let entry = &mut ctx.accounts.whitelist;
    entry.remaining = amount;

    emit!(WhitelistSet {
        admin: st.admin,
        participant,
        remaining: amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(participant: Pubkey)]
pub struct SetWhitelist<'info> {
    #[account(seeds = [b"sale_state"], bump)]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + WhitelistEntry::SIZE,
        seeds = [b"whitelist", participant.as_ref()],
        bump
    )]
    pub whitelist: Account<'info, WhitelistEntry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct WhitelistSet {
    pub admin: Pubkey,
    pub participant: Pubkey,
    pub remaining: u64,
}
