use crate::ContractError;

/// Lock durations in seconds, indexed by tier.
///
/// The tier set is fixed configuration: 7, 14, 30, and 60 days.
pub const LOCK_DURATIONS: [u64; 4] = [
    7 * 86_400,
    14 * 86_400,
    30 * 86_400,
    60 * 86_400,
];

/// Number of selectable tiers.
pub const TIER_COUNT: u32 = LOCK_DURATIONS.len() as u32;

/// Resolve a tier index to its lock duration.
pub fn duration_of(tier_index: u32) -> Result<u64, ContractError> {
    LOCK_DURATIONS
        .get(tier_index as usize)
        .copied()
        .ok_or(ContractError::InvalidTier)
}
