use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::ClaimerKind;

declare_id!("CLm7qGrQ5s8xkQVXhLdN2u9jW4fYbTzE3aPpRvKcUd6M");

#[program]
pub mod claim {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, unit_price: u64) -> Result<()> {
        instructions::initialize(ctx, unit_price)
    }

    pub fn set_unit_price(ctx: Context<SetUnitPrice>, new_price: u64) -> Result<()> {
        instructions::set_unit_price(ctx, new_price)
    }

    pub fn set_payment_mint(ctx: Context<SetPaymentMint>) -> Result<()> {
        instructions::set_payment_mint(ctx)
    }

    pub fn toggle_sale(ctx: Context<ToggleSale>) -> Result<()> {
        instructions::toggle_sale(ctx)
    }

    pub fn set_whitelist(
        ctx: Context<SetWhitelist>,
        participant: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::set_whitelist(ctx, participant, amount)
    }

    pub fn set_term(
        ctx: Context<SetTerm>,
        participant: Pubkey,
        percent: u64,
        max: u64,
        claimer_kind: ClaimerKind,
    ) -> Result<()> {
        instructions::set_term(ctx, participant, percent, max, claimer_kind)
    }

    pub fn buy_allocation(
        ctx: Context<BuyAllocation>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::buy_allocation(ctx, beneficiary, amount)
    }

    pub fn push_migration(ctx: Context<PushMigration>, destination: Pubkey) -> Result<()> {
        instructions::push_migration(ctx, destination)
    }

    pub fn pull_migration(ctx: Context<PullMigration>, source: Pubkey) -> Result<()> {
        instructions::pull_migration(ctx, source)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin(ctx, new_admin)
    }

    pub fn emit_share_quote(
        ctx: Context<EmitShareQuote>,
        amount: u64,
        total: u64,
        scale: u64,
    ) -> Result<()> {
        instructions::emit_share_quote(ctx, amount, total, scale)
    }
}
