use anchor_lang::prelude::*;

use crate::error::ClaimError;
use crate::state::{PendingMigration, Term};

pub fn push_migration(ctx: Context<PushMigration>, destination: Pubkey) -> Result<()> {
    require!(destination != Pubkey::default(), ClaimError::InvalidPubkey);

    // Only an identity holding something can start a move.
    let holds_term = ctx
        .accounts
        .term
        .as_ref()
        .map(|t| !t.is_zero())
        .unwrap_or(false);
    require!(holds_term, ClaimError::NothingToMigrate);

    // The destination is not validated here; it proves itself at pull
    // time. Re-pushing simply replaces the target.
    let migration = &mut ctx.accounts.migration;
    migration.push(destination);

    emit!(MigrationPushed {
        source: ctx.accounts.source.key(),
        destination,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct PushMigration<'info> {
    #[account(
        seeds = [b"term", source.key().as_ref()],
        bump
    )]
    pub term: Option<Account<'info, Term>>,

    #[account(
        init_if_needed,
        payer = source,
        space = 8 + PendingMigration::SIZE,
        seeds = [b"migration", source.key().as_ref()],
        bump
    )]
    pub migration: Account<'info, PendingMigration>,

    #[account(mut)]
    pub source: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MigrationPushed {
    pub source: Pubkey,
    pub destination: Pubkey,
}
