//! Program-wide constants (spec-authoritative).

/// Smallest-denomination units per one allocation unit (9 decimals).
pub const UNIT_DECIMALS: u64 = 1_000_000_000;

/// Cap on the sum of all participant `percent` values: 5% of the total
/// distribution, at a scale where 1_000_000 = 100%.
pub const PERCENT_CAP: u64 = 50_000;

/// Cap on the sum of all participant `max` values: 70M units.
pub const UNIT_CAP: u64 = 70_000_000 * UNIT_DECIMALS;

/// Minimum units per purchase (0.14 units). Dust guard on the public
/// buy path; note a purchase this small still earns a zero `percent`
/// increment under the floor policy.
pub const MIN_PURCHASE_UNITS: u64 = 140_000_000;
