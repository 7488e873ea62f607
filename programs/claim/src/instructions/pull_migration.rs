use anchor_lang::prelude::*;

use crate::error::ClaimError;
use crate::state::{ClaimerKind, PendingMigration, Term};

pub fn pull_migration(ctx: Context<PullMigration>, source: Pubkey) -> Result<()> {
    let destination_key = ctx.accounts.destination.key();

    // Only the identity the source pushed to may claim; anything else
    // looks like no push at all.
    let migration = ctx
        .accounts
        .migration
        .as_mut()
        .filter(|m| m.claimable_by(&destination_key))
        .ok_or(ClaimError::NoPushRecorded)?;

    let dest_term = &mut ctx.accounts.destination_term;
    require!(dest_term.is_zero(), ClaimError::DestinationOccupied);

    // Move the whole term; the global running sums are untouched, total
    // allocation is conserved across the move.
    let src_term = &mut ctx.accounts.source_term;
    dest_term.percent = src_term.percent;
    dest_term.max = src_term.max;
    dest_term.claimer_kind = src_term.claimer_kind;

    src_term.percent = 0;
    src_term.max = 0;
    src_term.claimer_kind = ClaimerKind::None;

    migration.clear();

    emit!(MigrationPulled {
        source,
        destination: destination_key,
        percent: dest_term.percent,
        max: dest_term.max,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(source: Pubkey)]
pub struct PullMigration<'info> {
    #[account(
        mut,
        seeds = [b"migration", source.as_ref()],
        bump
    )]
    pub migration: Option<Account<'info, PendingMigration>>,

    #[account(
        mut,
        seeds = [b"term", source.as_ref()],
        bump
    )]
    pub source_term: Account<'info, Term>,

    #[account(
        init_if_needed,
        payer = destination,
        space = 8 + Term::SIZE,
        seeds = [b"term", destination.key().as_ref()],
        bump
    )]
    pub destination_term: Account<'info, Term>,

    #[account(mut)]
    pub destination: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MigrationPulled {
    pub source: Pubkey,
    pub destination: Pubkey,
    pub percent: u64,
    pub max: u64,
}
