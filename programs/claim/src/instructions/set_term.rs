use anchor_lang::prelude::*;

use crate::error::ClaimError;
use crate::state::{ClaimerKind, SaleState, Term};

pub fn set_term(
    ctx: Context<SetTerm>,
    participant: Pubkey,
    percent: u64,
    max: u64,
    claimer_kind: ClaimerKind,
) -> Result<()> {
    require!(participant != Pubkey::default(), ClaimError::InvalidPubkey);

    let st = &mut ctx.accounts.sale_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, ClaimError::NotAuthorized);

    let term = &mut ctx.accounts.term;

    term.assign_kind(claimer_kind)?;
    st.apply_term_delta(term.percent, term.max, percent, max)?;

    term.percent = percent;
    term.max = max;

    emit!(TermSet {
        admin: st.admin,
        participant,
        percent,
        max,
        claimer_kind,
        total_percent_allocated: st.total_percent_allocated,
        total_units_allocated: st.total_units_allocated,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(participant: Pubkey)]
pub struct SetTerm<'info> {
    #[account(mut, seeds = [b"sale_state"], bump)]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Term::SIZE,
        seeds = [b"term", participant.as_ref()],
        bump
    )]
    pub term: Account<'info, Term>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TermSet {
    pub admin: Pubkey,
    pub participant: Pubkey,
    pub percent: u64,
    pub max: u64,
    pub claimer_kind: ClaimerKind,
    pub total_percent_allocated: u64,
    pub total_units_allocated: u64,
}
