use anchor_lang::prelude::*;

use crate::utils::math;

/// Read-only exposure of the share function for off-chain callers.
pub fn emit_share_quote(
    _ctx: Context<EmitShareQuote>,
    amount: u64,
    total: u64,
    scale: u64,
) -> Result<()> {
    let share = math::share(amount, total, scale)?;

    emit!(ShareQuote {
        amount,
        total,
        scale,
        share,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitShareQuote {}

#[event]
pub struct ShareQuote {
    pub amount: u64,
    pub total: u64,
    pub scale: u64,
    pub share: u64,
}
