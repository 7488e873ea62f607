use anchor_lang::prelude::*;

use crate::error::ClaimError;

/// Per-participant purchasable-units counter PDA. Set (not added) by the
/// admin, decremented by each successful purchase.
#[account]
pub struct WhitelistEntry {
    pub remaining: u64,
}

impl WhitelistEntry {
    pub const SIZE: usize = 8; // remaining

    /// Consume `units` from the remaining balance. The balance never goes
    /// negative; a request past it is the caller's error.
    pub fn consume(&mut self, units: u64) -> std::result::Result<(), ClaimError> {
        if units > self.remaining {
            return Err(ClaimError::ExceedsAllowance);
        }
        self.remaining -= units;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_decrements_and_bounds() {
        let mut w = WhitelistEntry { remaining: 100 };
        w.consume(40).unwrap();
        w.consume(60).unwrap();
        assert_eq!(w.remaining, 0);
        assert!(matches!(w.consume(1), Err(ClaimError::ExceedsAllowance)));
    }
}
