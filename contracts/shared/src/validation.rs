//! Validation helpers shared by the voting contracts
//!
//! Each helper checks a single precondition and maps a failure to the
//! matching `VotingError`, so entry points can chain them with `?` before
//! touching storage.

use crate::errors::VotingError;
use soroban_sdk::{Address, Env};

// ===== Address Validation =====

/// Validate that an address can take part in an election.
///
/// Soroban has no zero address; the contract's own address is the one
/// identity that can never authorize a vote, so it is rejected instead.
pub fn validate_participant(env: &Env, address: &Address) -> Result<(), VotingError> {
    if *address == env.current_contract_address() {
        return Err(VotingError::InvalidAddress);
    }
    Ok(())
}

// ===== Time Validation =====

/// Validate that a voting end time lies strictly in the future
pub fn validate_end_time(current_time: u64, end_time: u64) -> Result<(), VotingError> {
    if end_time <= current_time {
        return Err(VotingError::InvalidEndTime);
    }
    Ok(())
}

// ===== Pagination Validation =====

/// Validate a pagination limit
pub fn validate_page_limit(limit: u32) -> Result<(), VotingError> {
    if limit == 0 {
        return Err(VotingError::InvalidPageLimit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_time_must_be_in_future() {
        assert_eq!(validate_end_time(100, 100), Err(VotingError::InvalidEndTime));
        assert_eq!(validate_end_time(100, 99), Err(VotingError::InvalidEndTime));
        assert_eq!(validate_end_time(100, 101), Ok(()));
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(validate_page_limit(0), Err(VotingError::InvalidPageLimit));
        assert_eq!(validate_page_limit(1), Ok(()));
    }
}
