use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{MIN_PURCHASE_UNITS, PERCENT_CAP, UNIT_CAP};
use crate::error::ClaimError;
use crate::state::{ClaimerKind, SaleState, Term, WhitelistEntry};
use crate::utils::math;

pub fn buy_allocation(
    ctx: Context<BuyAllocation>,
    beneficiary: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(beneficiary != Pubkey::default(), ClaimError::InvalidPubkey);

    let st = &mut ctx.accounts.sale_state;
    require!(st.sale_open, ClaimError::SaleClosed);

    // A missing entry and an exhausted one are the same thing to a buyer.
    let whitelist = ctx
        .accounts
        .whitelist
        .as_mut()
        .filter(|w| w.remaining > 0)
        .ok_or(ClaimError::NotWhitelisted)?;
    require!(amount <= whitelist.remaining, ClaimError::ExceedsAllowance);

    let (payment, percent_inc) = purchase_quote(amount, st.unit_price)?;

    // Move payment into custody before any ledger write; a rejected
    // transfer aborts the whole purchase.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.payer.to_account_info(),
            },
        ),
        payment,
    )
    .map_err(|_| ClaimError::PaymentTransferFailed)?;

    whitelist.consume(amount)?;

    let term = &mut ctx.accounts.term;
    let old_percent = term.percent;
    let old_max = term.max;
    term.credit(percent_inc, amount)?;
    st.apply_term_delta(old_percent, old_max, term.percent, term.max)?;

    if term.claimer_kind == ClaimerKind::None {
        term.claimer_kind = ClaimerKind::Investor;
    }

    emit!(AllocationPurchased {
        payer: ctx.accounts.payer.key(),
        beneficiary,
        units: amount,
        payment,
        percent_added: percent_inc,
        term_percent: term.percent,
        term_max: term.max,
    });

    Ok(())
}

/// Payment owed and percent increment for a purchase of `amount` units.
/// Rejects dust orders below the purchase minimum.
fn purchase_quote(amount: u64, unit_price: u64) -> std::result::Result<(u64, u64), ClaimError> {
    if amount < MIN_PURCHASE_UNITS {
        return Err(ClaimError::BelowMinimum);
    }
    let payment = amount
        .checked_mul(unit_price)
        .ok_or(ClaimError::MathOverflow)?;
    let percent_inc = math::share(amount, UNIT_CAP, PERCENT_CAP)?;
    Ok((payment, percent_inc))
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct BuyAllocation<'info> {
    #[account(mut, seeds = [b"sale_state"], bump)]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        mut,
        seeds = [b"whitelist", beneficiary.as_ref()],
        bump
    )]
    pub whitelist: Option<Account<'info, WhitelistEntry>>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Term::SIZE,
        seeds = [b"term", beneficiary.as_ref()],
        bump
    )]
    pub term: Account<'info, Term>,

    #[account(
        mut,
        seeds = [b"vault", sale_state.payment_mint.as_ref()],
        bump,
        constraint = vault.mint == sale_state.payment_mint @ ClaimError::PaymentTransferFailed,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = payer_token_account.mint == sale_state.payment_mint @ ClaimError::PaymentTransferFailed,
        constraint = payer_token_account.owner == payer.key() @ ClaimError::PaymentTransferFailed,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct AllocationPurchased {
    pub payer: Pubkey,
    pub beneficiary: Pubkey,
    pub units: u64,
    pub payment: u64,
    pub percent_added: u64,
    pub term_percent: u64,
    pub term_max: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_is_units_times_price() {
        let (payment, _) = purchase_quote(1_000 * 1_000_000_000, 100).unwrap();
        assert_eq!(payment, 100_000 * 1_000_000_000);
    }

    #[test]
    fn equal_purchases_accumulate() {
        let amount = 1_400_000 * 1_000_000_000; // 1.4M units
        let (_, inc) = purchase_quote(amount, 100).unwrap();
        // 1.4M / 70M of 50_000 = 1_000
        assert_eq!(inc, 1_000);

        let mut term = Term {
            percent: 0,
            max: 0,
            claimer_kind: ClaimerKind::None,
        };
        term.credit(inc, amount).unwrap();
        term.credit(inc, amount).unwrap();
        // Sum of two independently computed increments, not an overwrite.
        assert_eq!(term.percent, 2_000);
        assert_eq!(term.max, 2 * amount);
    }

    #[test]
    fn minimum_purchase_boundary() {
        assert!(matches!(
            purchase_quote(MIN_PURCHASE_UNITS - 1, 100),
            Err(ClaimError::BelowMinimum)
        ));
        // The threshold itself is accepted; its percent increment
        // truncates to zero under the floor policy.
        let (payment, inc) = purchase_quote(MIN_PURCHASE_UNITS, 100).unwrap();
        assert_eq!(payment, MIN_PURCHASE_UNITS * 100);
        assert_eq!(inc, 0);
    }

    #[test]
    fn share_increment_matches_share_function() {
        let amount = 7_000 * 1_000_000_000;
        let (_, inc) = purchase_quote(amount, 1).unwrap();
        assert_eq!(inc, math::share(amount, UNIT_CAP, PERCENT_CAP).unwrap());
    }
}
