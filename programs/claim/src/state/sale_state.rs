use anchor_lang::prelude::*;

use crate::constants::{PERCENT_CAP, UNIT_CAP};
use crate::error::ClaimError;

/// Singleton sale state PDA.
#[account]
pub struct SaleState {
    /// Admin authority.
    pub admin: Pubkey,
    /// Mint of the asset purchases are paid in.
    pub payment_mint: Pubkey,
    /// Price of one allocation unit, in the payment asset's smallest
    /// denomination.
    pub unit_price: u64,
    /// Gate for the public purchase path.
    pub sale_open: bool,
    /// Running sum of all participant `percent` values. Never exceeds
    /// `PERCENT_CAP`.
    pub total_percent_allocated: u64,
    /// Running sum of all participant `max` values. Never exceeds
    /// `UNIT_CAP`.
    pub total_units_allocated: u64,
}

impl SaleState {
    pub const SIZE: usize =
        32 + // admin
        32 + // payment_mint
        8 +  // unit_price
        1 +  // sale_open
        8 +  // total_percent_allocated
        8;   // total_units_allocated

    /// Replace one participant's contribution to the running sums.
    ///
    /// The cap check and the sum update are a single operation: both sums
    /// are recomputed from the old/new term values, validated against the
    /// caps, and only then committed. Callers pass the participant's term
    /// values before and after the mutation; accumulating paths (purchase)
    /// pass `old + increment` as the new value.
    pub fn apply_term_delta(
        &mut self,
        old_percent: u64,
        old_max: u64,
        new_percent: u64,
        new_max: u64,
    ) -> std::result::Result<(), ClaimError> {
        let percent_total = self
            .total_percent_allocated
            .checked_sub(old_percent)
            .ok_or(ClaimError::MathOverflow)?
            .checked_add(new_percent)
            .ok_or(ClaimError::MathOverflow)?;
        let units_total = self
            .total_units_allocated
            .checked_sub(old_max)
            .ok_or(ClaimError::MathOverflow)?
            .checked_add(new_max)
            .ok_or(ClaimError::MathOverflow)?;

        if percent_total > PERCENT_CAP || units_total > UNIT_CAP {
            return Err(ClaimError::CapacityExceeded);
        }

        self.total_percent_allocated = percent_total;
        self.total_units_allocated = units_total;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> SaleState {
        SaleState {
            admin: Pubkey::default(),
            payment_mint: Pubkey::default(),
            unit_price: 100,
            sale_open: false,
            total_percent_allocated: 0,
            total_units_allocated: 0,
        }
    }

    #[test]
    fn percent_cap_boundary() {
        let mut st = fresh();
        // Exactly at the cap succeeds.
        st.apply_term_delta(0, 0, PERCENT_CAP, 0).unwrap();
        assert_eq!(st.total_percent_allocated, PERCENT_CAP);

        // One past the cap fails and leaves both sums untouched.
        let mut st = fresh();
        assert!(matches!(
            st.apply_term_delta(0, 0, PERCENT_CAP + 1, 0),
            Err(ClaimError::CapacityExceeded)
        ));
        assert_eq!(st.total_percent_allocated, 0);
        assert_eq!(st.total_units_allocated, 0);
    }

    #[test]
    fn unit_cap_boundary() {
        let mut st = fresh();
        st.apply_term_delta(0, 0, 0, UNIT_CAP).unwrap();
        assert_eq!(st.total_units_allocated, UNIT_CAP);

        let mut st = fresh();
        assert!(matches!(
            st.apply_term_delta(0, 0, 0, UNIT_CAP + 1),
            Err(ClaimError::CapacityExceeded)
        ));
    }

    #[test]
    fn replacement_uses_delta_not_sum() {
        let mut st = fresh();
        st.apply_term_delta(0, 0, 40_000, 1_000).unwrap();
        // Re-setting the same participant replaces, so a second near-cap
        // value is fine even though 40_000 + 45_000 would not be.
        st.apply_term_delta(40_000, 1_000, 45_000, 2_000).unwrap();
        assert_eq!(st.total_percent_allocated, 45_000);
        assert_eq!(st.total_units_allocated, 2_000);
    }

    #[test]
    fn sequences_never_exceed_caps() {
        let mut st = fresh();
        let mut a = (0u64, 0u64);
        let mut b = (0u64, 0u64);
        let steps: &[(bool, u64, u64)] = &[
            (true, 20_000, 500),
            (false, 15_000, 700),
            (true, 30_000, 900),   // replaces a's 20_000
            (false, 10_000, 100),  // replaces b's 15_000
            (true, 40_000, 1_000), // 40_000 + 10_000 == cap
        ];
        for &(is_a, p, m) in steps {
            let old = if is_a { a } else { b };
            st.apply_term_delta(old.0, old.1, p, m).unwrap();
            if is_a {
                a = (p, m);
            } else {
                b = (p, m);
            }
            assert!(st.total_percent_allocated <= PERCENT_CAP);
            assert!(st.total_units_allocated <= UNIT_CAP);
        }
        assert_eq!(st.total_percent_allocated, 50_000);

        // Next increment of either sum must fail.
        assert!(matches!(
            st.apply_term_delta(0, 0, 1, 0),
            Err(ClaimError::CapacityExceeded)
        ));
    }

    #[test]
    fn migration_shaped_delta_conserves_totals() {
        let mut st = fresh();
        st.apply_term_delta(0, 0, 12_345, 678).unwrap();
        let before = (st.total_percent_allocated, st.total_units_allocated);
        // Moving a term between identities zeroes one side and fills the
        // other with identical values; the sums must not move.
        st.apply_term_delta(12_345, 678, 0, 0).unwrap();
        st.apply_term_delta(0, 0, 12_345, 678).unwrap();
        assert_eq!(
            (st.total_percent_allocated, st.total_units_allocated),
            before
        );
    }
}
