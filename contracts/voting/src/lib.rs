#![no_std]
//! Election contracts.
//!
//! `VotingFactory` is the registry: it creates elections and keeps the
//! append-only catalogue of their handles. Every other entry point drives one
//! election's state machine, addressed by its handle:
//!
//! ```text
//! Created --start_voting--> Active --deadline / close_voting--> Closed
//! ```
//!
//! Voters and candidates can only be registered while `Created`, votes are
//! only accepted while `Active`, and final results are only readable once
//! `Closed`. The election closes by itself when the ledger time reaches the
//! end time given to `start_voting`.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod election;
mod events;
mod registry;
mod storage;
mod types;

pub use shared::{ErrorKind, VotingError};
pub use types::{
    CandidateRecord, CandidateTally, Election, ElectionId, ElectionStatus, VoterRecord,
};

#[contract]
pub struct VotingFactory;

#[contractimpl]
impl VotingFactory {
    // ── Registry ─────────────────────────────────────────────────────────────

    /// Create a new election owned by `caller`.
    ///
    /// # Arguments
    /// * `caller`       – Organizer; becomes the election owner
    /// * `metadata_uri` – Content hash of the title/description object,
    ///                    stored verbatim
    pub fn create_voting(env: Env, caller: Address, metadata_uri: String) -> ElectionId {
        registry::create_voting(&env, caller, metadata_uri)
    }

    /// All election handles in creation order.
    pub fn get_deployed_votings(env: Env) -> Vec<ElectionId> {
        registry::get_deployed_votings(&env)
    }

    pub fn voting_count(env: Env) -> u32 {
        registry::voting_count(&env)
    }

    // ── Registration (owner only) ────────────────────────────────────────────

    pub fn register_voter(
        env: Env,
        election_id: ElectionId,
        caller: Address,
        voter: Address,
    ) -> Result<(), VotingError> {
        election::register_voter(&env, election_id, &caller, &voter)
    }

    /// Returns the assigned candidate id.
    pub fn register_candidate(
        env: Env,
        election_id: ElectionId,
        caller: Address,
        candidate: Address,
    ) -> Result<u32, VotingError> {
        election::register_candidate(&env, election_id, &caller, &candidate)
    }

    // ── Lifecycle (owner only) ───────────────────────────────────────────────

    /// Open voting until the absolute ledger timestamp `end_time`.
    pub fn start_voting(
        env: Env,
        election_id: ElectionId,
        caller: Address,
        end_time: u64,
    ) -> Result<(), VotingError> {
        election::start_voting(&env, election_id, &caller, end_time)
    }

    /// Close voting ahead of the deadline.
    pub fn close_voting(
        env: Env,
        election_id: ElectionId,
        caller: Address,
    ) -> Result<(), VotingError> {
        election::close_voting(&env, election_id, &caller)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn cast_vote(
        env: Env,
        election_id: ElectionId,
        voter: Address,
        candidate_id: u32,
    ) -> Result<(), VotingError> {
        election::cast_vote(&env, election_id, &voter, candidate_id)
    }

    // ── Progress & Results ───────────────────────────────────────────────────

    /// Page of running tallies in registration order. Only while Active.
    pub fn show_progress(
        env: Env,
        election_id: ElectionId,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<CandidateTally>, VotingError> {
        election::show_progress(&env, election_id, offset, limit)
    }

    /// Page of final tallies in registration order. Only once Closed.
    pub fn show_result(
        env: Env,
        election_id: ElectionId,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<CandidateTally>, VotingError> {
        election::show_result(&env, election_id, offset, limit)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Election header; `status` is the lifecycle status at the current
    /// ledger time.
    pub fn get_election(env: Env, election_id: ElectionId) -> Result<Election, VotingError> {
        election::election(&env, election_id)
    }

    pub fn owner(env: Env, election_id: ElectionId) -> Result<Address, VotingError> {
        let election = storage::load_election(&env, election_id)?;
        Ok(election.owner.holder().clone())
    }

    pub fn metadata_uri(env: Env, election_id: ElectionId) -> Result<String, VotingError> {
        let election = storage::load_election(&env, election_id)?;
        Ok(election.metadata_uri)
    }

    /// Voting deadline, or 0 before voting has started.
    pub fn voting_end_time(env: Env, election_id: ElectionId) -> Result<u64, VotingError> {
        let election = storage::load_election(&env, election_id)?;
        Ok(election.voting_end_time)
    }

    pub fn is_voting_started(env: Env, election_id: ElectionId) -> Result<bool, VotingError> {
        let election = storage::load_election(&env, election_id)?;
        Ok(election.status != ElectionStatus::Created)
    }

    /// Lifecycle status at the current ledger time.
    pub fn status(env: Env, election_id: ElectionId) -> Result<ElectionStatus, VotingError> {
        election::status(&env, election_id)
    }

    pub fn get_voter(
        env: Env,
        election_id: ElectionId,
        voter: Address,
    ) -> Result<VoterRecord, VotingError> {
        election::voter(&env, election_id, &voter)
    }

    pub fn get_candidate(
        env: Env,
        election_id: ElectionId,
        candidate: Address,
    ) -> Result<CandidateRecord, VotingError> {
        election::candidate(&env, election_id, &candidate)
    }

    pub fn get_candidate_by_id(
        env: Env,
        election_id: ElectionId,
        candidate_id: u32,
    ) -> Result<Address, VotingError> {
        election::candidate_by_id(&env, election_id, candidate_id)
    }

    pub fn candidate_count(env: Env, election_id: ElectionId) -> Result<u32, VotingError> {
        let election = storage::load_election(&env, election_id)?;
        Ok(election.candidate_count)
    }
}
