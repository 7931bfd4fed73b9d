use soroban_sdk::{Address, Env, String, Vec};

use authorization::{verify_owner, verify_participant, AuthError, OwnerCapability};
use shared::constants::UNSET_END_TIME;
use shared::{page_range, validate_end_time, validate_page_limit, validate_participant, VotingError};

use crate::events;
use crate::storage;
use crate::types::{
    CandidateRecord, CandidateTally, Election, ElectionId, ElectionStatus, VoterRecord,
};

// Every mutating operation below runs all of its checks against loaded
// copies first and writes storage only after the last check has passed.

fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

fn unauthorized(_: AuthError) -> VotingError {
    VotingError::Unauthorized
}

/// Load an election and require that `caller` owns it.
fn load_owned(env: &Env, id: ElectionId, caller: &Address) -> Result<Election, VotingError> {
    let election = storage::load_election(env, id)?;
    verify_owner(caller, &election.owner).map_err(unauthorized)?;
    Ok(election)
}

fn require_created(election: &Election, now: u64) -> Result<(), VotingError> {
    match election.status_at(now) {
        ElectionStatus::Created => Ok(()),
        ElectionStatus::Active | ElectionStatus::Closed => Err(VotingError::VotingAlreadyStarted),
    }
}

fn require_active(election: &Election, now: u64) -> Result<(), VotingError> {
    match election.status_at(now) {
        ElectionStatus::Created => Err(VotingError::VotingNotStarted),
        ElectionStatus::Active => Ok(()),
        ElectionStatus::Closed => Err(VotingError::VotingEnded),
    }
}

fn require_closed(election: &Election, now: u64) -> Result<(), VotingError> {
    match election.status_at(now) {
        ElectionStatus::Created => Err(VotingError::VotingNotStarted),
        ElectionStatus::Active => Err(VotingError::VotingStillOngoing),
        ElectionStatus::Closed => Ok(()),
    }
}

/// Checks shared by voter and candidate registration.
fn require_registration_open(
    env: &Env,
    election: &Election,
    address: &Address,
) -> Result<(), VotingError> {
    require_created(election, now(env))?;
    validate_participant(env, address)
}

// ── Creation ─────────────────────────────────────────────────────────────────

/// Create a fresh election in the `Created` state. Only the registry calls this.
pub fn create(env: &Env, id: ElectionId, owner: Address, metadata_uri: String) -> Election {
    let election = Election {
        id,
        owner: OwnerCapability::new(owner),
        metadata_uri,
        status: ElectionStatus::Created,
        created_at: now(env),
        voting_end_time: UNSET_END_TIME,
        candidate_count: 0,
        voter_count: 0,
        votes_cast: 0,
    };
    storage::save_election(env, &election);
    events::voting_created(env, id, election.owner.holder(), &election.metadata_uri);
    election
}

// ── Registration ─────────────────────────────────────────────────────────────

pub fn register_voter(
    env: &Env,
    id: ElectionId,
    caller: &Address,
    voter: &Address,
) -> Result<(), VotingError> {
    let mut election = load_owned(env, id, caller)?;
    require_registration_open(env, &election, voter)?;
    if storage::is_voter(env, id, voter) {
        return Err(VotingError::AlreadyRegistered);
    }
    if storage::is_candidate(env, id, voter) {
        return Err(VotingError::RoleConflict);
    }

    let record = VoterRecord {
        is_registered: true,
        has_voted: false,
        voted_candidate: None,
    };
    election.voter_count += 1;
    storage::save_voter(env, id, voter, &record);
    storage::save_election(env, &election);

    events::voter_registered(env, id, voter);
    Ok(())
}

/// Register a candidate and return its id, which is also its position in
/// result pages.
pub fn register_candidate(
    env: &Env,
    id: ElectionId,
    caller: &Address,
    candidate: &Address,
) -> Result<u32, VotingError> {
    let mut election = load_owned(env, id, caller)?;
    require_registration_open(env, &election, candidate)?;
    if storage::is_candidate(env, id, candidate) {
        return Err(VotingError::AlreadyRegistered);
    }
    if storage::is_voter(env, id, candidate) {
        return Err(VotingError::RoleConflict);
    }

    let candidate_id = election.candidate_count;
    let record = CandidateRecord {
        is_registered: true,
        candidate_id,
        total_votes: 0,
    };
    election.candidate_count += 1;
    storage::save_candidate(env, id, candidate, &record);
    storage::push_candidate(env, id, candidate_id, candidate);
    storage::save_election(env, &election);

    events::candidate_registered(env, id, candidate, candidate_id);
    Ok(candidate_id)
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

/// Open voting until the absolute ledger time `end_time`.
pub fn start_voting(
    env: &Env,
    id: ElectionId,
    caller: &Address,
    end_time: u64,
) -> Result<(), VotingError> {
    let mut election = load_owned(env, id, caller)?;
    let now = now(env);
    require_created(&election, now)?;
    validate_end_time(now, end_time)?;

    election.status = ElectionStatus::Active;
    election.voting_end_time = end_time;
    storage::save_election(env, &election);

    events::voting_started(env, id, end_time);
    Ok(())
}

/// End voting before its deadline. The deadline moves to the current ledger
/// time, so the election reads as Closed through the same predicate that
/// handles natural expiry.
pub fn close_voting(env: &Env, id: ElectionId, caller: &Address) -> Result<(), VotingError> {
    let mut election = load_owned(env, id, caller)?;
    let now = now(env);
    require_active(&election, now)?;

    election.status = ElectionStatus::Closed;
    election.voting_end_time = now;
    storage::save_election(env, &election);

    events::voting_closed(env, id, now);
    Ok(())
}

// ── Voting ───────────────────────────────────────────────────────────────────

pub fn cast_vote(
    env: &Env,
    id: ElectionId,
    voter: &Address,
    candidate_id: u32,
) -> Result<(), VotingError> {
    verify_participant(voter);

    let mut election = storage::load_election(env, id)?;
    require_active(&election, now(env))?;

    let mut ballot = storage::get_voter(env, id, voter).ok_or(VotingError::VoterNotRegistered)?;
    if ballot.has_voted {
        return Err(VotingError::AlreadyVoted);
    }

    let candidate =
        storage::get_candidate_at(env, id, candidate_id).ok_or(VotingError::InvalidCandidate)?;
    let mut tally =
        storage::get_candidate(env, id, &candidate).ok_or(VotingError::InvalidCandidate)?;

    ballot.has_voted = true;
    ballot.voted_candidate = Some(candidate_id);
    tally.total_votes += 1;
    election.votes_cast += 1;
    storage::save_voter(env, id, voter, &ballot);
    storage::save_candidate(env, id, &candidate, &tally);
    storage::save_election(env, &election);

    events::vote_cast(env, id, voter, candidate_id);
    Ok(())
}

// ── Progress & Results ───────────────────────────────────────────────────────

// Every slot in the window exists: candidate ids are dense arena indices.
fn read_tallies(
    env: &Env,
    election: &Election,
    offset: u32,
    limit: u32,
) -> Result<Vec<CandidateTally>, VotingError> {
    let mut page = Vec::new(env);
    for candidate_id in page_range(election.candidate_count, offset, limit) {
        let candidate = storage::get_candidate_at(env, election.id, candidate_id)
            .ok_or(VotingError::InvalidCandidate)?;
        let record = storage::get_candidate(env, election.id, &candidate)
            .ok_or(VotingError::InvalidCandidate)?;
        page.push_back(CandidateTally {
            candidate_id,
            candidate,
            total_votes: record.total_votes,
        });
    }
    Ok(page)
}

/// Running tallies while voting is open.
pub fn show_progress(
    env: &Env,
    id: ElectionId,
    offset: u32,
    limit: u32,
) -> Result<Vec<CandidateTally>, VotingError> {
    let election = storage::load_election(env, id)?;
    require_active(&election, now(env))?;
    validate_page_limit(limit)?;
    read_tallies(env, &election, offset, limit)
}

/// Final tallies once voting is closed.
pub fn show_result(
    env: &Env,
    id: ElectionId,
    offset: u32,
    limit: u32,
) -> Result<Vec<CandidateTally>, VotingError> {
    let election = storage::load_election(env, id)?;
    require_closed(&election, now(env))?;
    validate_page_limit(limit)?;
    read_tallies(env, &election, offset, limit)
}

// ── Read Accessors ───────────────────────────────────────────────────────────

/// Election header with `status` resolved at the current ledger time.
pub fn election(env: &Env, id: ElectionId) -> Result<Election, VotingError> {
    let mut election = storage::load_election(env, id)?;
    election.status = election.status_at(now(env));
    Ok(election)
}

pub fn status(env: &Env, id: ElectionId) -> Result<ElectionStatus, VotingError> {
    let election = storage::load_election(env, id)?;
    Ok(election.status_at(now(env)))
}

/// Voter record for `address`; unregistered addresses read as the default
/// record.
pub fn voter(env: &Env, id: ElectionId, address: &Address) -> Result<VoterRecord, VotingError> {
    storage::load_election(env, id)?;
    Ok(storage::get_voter(env, id, address).unwrap_or_default())
}

pub fn candidate(
    env: &Env,
    id: ElectionId,
    address: &Address,
) -> Result<CandidateRecord, VotingError> {
    storage::load_election(env, id)?;
    Ok(storage::get_candidate(env, id, address).unwrap_or_default())
}

pub fn candidate_by_id(env: &Env, id: ElectionId, candidate_id: u32) -> Result<Address, VotingError> {
    storage::load_election(env, id)?;
    storage::get_candidate_at(env, id, candidate_id).ok_or(VotingError::InvalidCandidate)
}
