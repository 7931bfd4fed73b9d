//! Error types for the voting contracts
//!
//! Every failure a contract entry point can return is a `VotingError` with a
//! stable numeric code. Codes are grouped by kind so that clients can map a
//! whole range to one class of user-facing message:
//! - 1-19: Authorization errors
//! - 20-39: Lifecycle state errors
//! - 40-59: Input validation errors
//! - 60-79: Already-acted errors

use soroban_sdk::contracterror;

/// Error type returned by every voting contract entry point
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Authorization Errors (1-19) =====
    /// Caller is not the owner of the election
    Unauthorized = 1,

    // ===== State Errors (20-39) =====
    /// Voting was already started, registration and restart are closed
    VotingAlreadyStarted = 20,

    /// Voting has not been started yet
    VotingNotStarted = 21,

    /// Voting deadline has passed or the election was closed
    VotingEnded = 22,

    /// Results requested while voting is still open
    VotingStillOngoing = 23,

    // ===== Validation Errors (40-59) =====
    /// Address can never take part in an election
    InvalidAddress = 40,

    /// Address is already registered in the same role
    AlreadyRegistered = 41,

    /// Address is already registered in the other role
    RoleConflict = 42,

    /// Caller is not a registered voter
    VoterNotRegistered = 43,

    /// Candidate id was never assigned
    InvalidCandidate = 44,

    /// Pagination limit must be greater than zero
    InvalidPageLimit = 45,

    /// Voting end time is not in the future
    InvalidEndTime = 46,

    /// No election exists under the given handle
    ElectionNotFound = 47,

    // ===== Already-Acted Errors (60-79) =====
    /// Voter has already cast a vote
    AlreadyVoted = 60,
}

/// Coarse classification of a `VotingError`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    State,
    Validation,
    AlreadyActed,
}

impl VotingError {
    /// Get the class this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1..=19 => ErrorKind::Authorization,
            20..=39 => ErrorKind::State,
            40..=59 => ErrorKind::Validation,
            _ => ErrorKind::AlreadyActed,
        }
    }

    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            VotingError::Unauthorized => "Caller is not the election owner",

            VotingError::VotingAlreadyStarted => "Voting has already started",
            VotingError::VotingNotStarted => "Voting has not started yet",
            VotingError::VotingEnded => "Voting has ended",
            VotingError::VotingStillOngoing => "Voting is still ongoing",

            VotingError::InvalidAddress => "Address invalid",
            VotingError::AlreadyRegistered => "Already registered",
            VotingError::RoleConflict => "Voter cannot be a candidate",
            VotingError::VoterNotRegistered => "You are not registered",
            VotingError::InvalidCandidate => "Invalid candidate id",
            VotingError::InvalidPageLimit => "Limit must be greater than zero",
            VotingError::InvalidEndTime => "End time must be in the future",
            VotingError::ElectionNotFound => "Election not found",

            VotingError::AlreadyVoted => "Already voted",
        }
    }
}
