use authorization::OwnerCapability;
use soroban_sdk::{contracttype, Address, String};

/// Handle of an election inside the registry
pub type ElectionId = u32;

/// Lifecycle of an election. Only ever moves forward.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ElectionStatus {
    Created,
    Active,
    Closed,
}

/// One voting campaign
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Election {
    pub id: ElectionId,
    pub owner: OwnerCapability,
    /// Content hash returned by the metadata store, kept verbatim
    pub metadata_uri: String,
    pub status: ElectionStatus,
    pub created_at: u64,
    /// Absolute ledger time at which voting ends; 0 until started
    pub voting_end_time: u64,
    pub candidate_count: u32,
    pub voter_count: u32,
    pub votes_cast: u32,
}

impl Election {
    /// Status as seen at ledger time `now`. An Active election whose
    /// deadline has passed is Closed without any further call.
    pub fn status_at(&self, now: u64) -> ElectionStatus {
        match self.status {
            ElectionStatus::Active if now >= self.voting_end_time => ElectionStatus::Closed,
            status => status,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VoterRecord {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_candidate: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CandidateRecord {
    pub is_registered: bool,
    pub candidate_id: u32,
    pub total_votes: u32,
}

/// One row of a progress or result page
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateTally {
    pub candidate_id: u32,
    pub candidate: Address,
    pub total_votes: u32,
}
