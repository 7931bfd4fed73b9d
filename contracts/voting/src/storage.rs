use soroban_sdk::{contracttype, Address, Env};

use shared::constants::{
    INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO, RECORD_TTL_THRESHOLD,
};
use shared::VotingError;

use crate::types::{CandidateRecord, Election, ElectionId, VoterRecord};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ElectionCount,
    Election(ElectionId),
    Voter(ElectionId, Address),
    Candidate(ElectionId, Address),
    // (election_id, candidate_id) -> candidate address, in registration order
    CandidateAt(ElectionId, u32),
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}

// ── Registry ─────────────────────────────────────────────────────────────────

pub fn get_election_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ElectionCount)
        .unwrap_or(0)
}

pub fn set_election_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ElectionCount, &count);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

// ── Elections ────────────────────────────────────────────────────────────────

pub fn load_election(env: &Env, id: ElectionId) -> Result<Election, VotingError> {
    env.storage()
        .persistent()
        .get(&DataKey::Election(id))
        .ok_or(VotingError::ElectionNotFound)
}

pub fn save_election(env: &Env, election: &Election) {
    let key = DataKey::Election(election.id);
    env.storage().persistent().set(&key, election);
    bump(env, &key);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, id: ElectionId, voter: &Address) -> Option<VoterRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(id, voter.clone()))
}

pub fn is_voter(env: &Env, id: ElectionId, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(id, address.clone()))
}

pub fn save_voter(env: &Env, id: ElectionId, voter: &Address, record: &VoterRecord) {
    let key = DataKey::Voter(id, voter.clone());
    env.storage().persistent().set(&key, record);
    bump(env, &key);
}

// ── Candidates ───────────────────────────────────────────────────────────────

pub fn get_candidate(env: &Env, id: ElectionId, candidate: &Address) -> Option<CandidateRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Candidate(id, candidate.clone()))
}

pub fn is_candidate(env: &Env, id: ElectionId, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Candidate(id, address.clone()))
}

pub fn save_candidate(env: &Env, id: ElectionId, candidate: &Address, record: &CandidateRecord) {
    let key = DataKey::Candidate(id, candidate.clone());
    env.storage().persistent().set(&key, record);
    bump(env, &key);
}

pub fn get_candidate_at(env: &Env, id: ElectionId, candidate_id: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::CandidateAt(id, candidate_id))
}

pub fn push_candidate(env: &Env, id: ElectionId, candidate_id: u32, candidate: &Address) {
    let key = DataKey::CandidateAt(id, candidate_id);
    env.storage().persistent().set(&key, candidate);
    bump(env, &key);
}
