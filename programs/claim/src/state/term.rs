use anchor_lang::prelude::*;

use crate::error::ClaimError;

/// Vesting-schedule classification of a participant. Set once: the only
/// legal transition is `None` to a concrete kind.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum ClaimerKind {
    #[default]
    None,
    Investor,
    Developer,
    Adviser,
}

/// Per-participant allocation term PDA. Created zero-valued on first
/// reference; zeroed again when migrated away.
#[account]
pub struct Term {
    /// Scaled share of the total vesting distribution.
    pub percent: u64,
    /// Cumulative units this participant may claim.
    pub max: u64,
    pub claimer_kind: ClaimerKind,
}

impl Term {
    pub const SIZE: usize =
        8 + // percent
        8 + // max
        1;  // claimer_kind

    pub fn is_zero(&self) -> bool {
        self.percent == 0 && self.max == 0 && self.claimer_kind == ClaimerKind::None
    }

    /// Enforce the set-once rule before assigning a kind.
    pub fn assign_kind(&mut self, kind: ClaimerKind) -> std::result::Result<(), ClaimError> {
        if self.claimer_kind != ClaimerKind::None && kind != self.claimer_kind {
            return Err(ClaimError::ImmutableKind);
        }
        self.claimer_kind = kind;
        Ok(())
    }

    /// Accumulate a purchased increment into the term.
    pub fn credit(&mut self, percent_inc: u64, units: u64) -> std::result::Result<(), ClaimError> {
        self.percent = self
            .percent
            .checked_add(percent_inc)
            .ok_or(ClaimError::MathOverflow)?;
        self.max = self
            .max
            .checked_add(units)
            .ok_or(ClaimError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero() -> Term {
        Term {
            percent: 0,
            max: 0,
            claimer_kind: ClaimerKind::None,
        }
    }

    #[test]
    fn kind_set_once() {
        let mut t = zero();
        // First assignment succeeds.
        t.assign_kind(ClaimerKind::Investor).unwrap();
        // Re-assigning the same kind succeeds.
        t.assign_kind(ClaimerKind::Investor).unwrap();
        // Any differing kind, including back to None, is rejected.
        assert!(matches!(
            t.assign_kind(ClaimerKind::Adviser),
            Err(ClaimError::ImmutableKind)
        ));
        assert!(matches!(
            t.assign_kind(ClaimerKind::None),
            Err(ClaimError::ImmutableKind)
        ));
        assert_eq!(t.claimer_kind, ClaimerKind::Investor);
    }

    #[test]
    fn zero_detection() {
        let mut t = zero();
        assert!(t.is_zero());
        t.max = 1;
        assert!(!t.is_zero());

        let mut t = zero();
        t.assign_kind(ClaimerKind::Developer).unwrap();
        // A kind alone makes the term non-zero.
        assert!(!t.is_zero());
    }

    #[test]
    fn credits_accumulate() {
        let mut t = zero();
        t.credit(714, 1_000_000_000_000).unwrap();
        t.credit(714, 1_000_000_000_000).unwrap();
        assert_eq!(t.percent, 1_428);
        assert_eq!(t.max, 2_000_000_000_000);
    }
}
