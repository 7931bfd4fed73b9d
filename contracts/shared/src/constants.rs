//! Common constants used across the voting contracts

// ===== Time Constants =====

/// One day expressed in ledgers (86400 s at ~5 s per ledger)
pub const DAY_IN_LEDGERS: u32 = 17_280;

// ===== Storage TTL Constants (in ledgers) =====

/// Entries are bumped once their remaining TTL drops below 30 days
pub const RECORD_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;

/// Bumped entries live for another 180 days
pub const RECORD_TTL_EXTEND_TO: u32 = 180 * DAY_IN_LEDGERS;

/// Instance storage (registry counter) uses the same window
pub const INSTANCE_TTL_THRESHOLD: u32 = RECORD_TTL_THRESHOLD;
pub const INSTANCE_TTL_EXTEND_TO: u32 = RECORD_TTL_EXTEND_TO;

// ===== Election Constants =====

/// Value of `voting_end_time` before voting is started
pub const UNSET_END_TIME: u64 = 0;
