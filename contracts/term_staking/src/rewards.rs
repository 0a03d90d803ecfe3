//! Fixed-term yield arithmetic.
//!
//! The payout of a stake is decided entirely at creation time: it is a pure
//! function of principal, the APY snapshot, and the tier's nominal lock
//! duration. Unstaking later than the lock expiry neither gains nor loses
//! yield, which is what makes the outstanding obligation of a stake an exact
//! number rather than an accrual.

/// Seconds in a 365-day year, the normalisation base for the APY.
pub const SECONDS_PER_YEAR: i128 = 365 * 86_400;

/// The APY is denominated in basis points: 10_000 = 100 %.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Yield owed for a fixed-term stake.
///
/// `principal * apy_bps * duration_secs / (SECONDS_PER_YEAR * 10_000)`,
/// truncated toward zero so the ledger never over-pays. Returns `None` if the
/// intermediate product overflows `i128`.
pub fn payout(principal: i128, apy_bps: u32, duration_secs: u64) -> Option<i128> {
    let gross = principal
        .checked_mul(apy_bps as i128)?
        .checked_mul(duration_secs as i128)?;
    Some(gross / (SECONDS_PER_YEAR * BPS_DENOMINATOR))
}
