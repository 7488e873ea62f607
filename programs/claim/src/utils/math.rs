//! Proportional-share arithmetic (spec-authoritative).
//! share(amount, total, scale) = floor(amount * scale / total).
//! Truncation toward zero is the defined rounding policy; callers must
//! not assume any rounding up.

use crate::error::ClaimError;

/// Scaled proportional share of `amount` within `total`. Pure; `total`
/// of zero is undefined in this domain.
pub fn share(amount: u64, total: u64, scale: u64) -> Result<u64, ClaimError> {
    if total == 0 {
        return Err(ClaimError::DivisionByZero);
    }
    let scaled = (amount as u128)
        .checked_mul(scale as u128)
        .ok_or(ClaimError::MathOverflow)?;
    let q = scaled / (total as u128);
    u64::try_from(q).map_err(|_| ClaimError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_truncation_case() {
        assert_eq!(share(700_000, 70_000_000, 50_000).unwrap(), 500);
    }

    #[test]
    fn truncates_toward_zero() {
        // 999 * 50_000 / 70_000_000 = 0.7135... -> 0
        assert_eq!(share(999, 70_000_000, 50_000).unwrap(), 0);
        // 1_500 * 10 / 10_000 = 1.5 -> 1
        assert_eq!(share(1_500, 10_000, 10).unwrap(), 1);
    }

    #[test]
    fn zero_amount_is_zero() {
        assert_eq!(share(0, 70_000_000, 50_000).unwrap(), 0);
    }

    #[test]
    fn zero_total_rejected() {
        assert!(matches!(share(1, 0, 50_000), Err(ClaimError::DivisionByZero)));
    }

    #[test]
    fn wide_intermediate_does_not_overflow() {
        // u64::MAX * scale overflows u64 but not the u128 intermediate.
        assert_eq!(share(u64::MAX, u64::MAX, 50_000).unwrap(), 50_000);
    }
}
