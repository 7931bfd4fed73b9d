use soroban_sdk::{symbol_short, Address, Env, String};

use crate::types::ElectionId;

pub fn voting_created(env: &Env, id: ElectionId, owner: &Address, metadata_uri: &String) {
    env.events().publish(
        (symbol_short!("created"), id),
        (owner.clone(), metadata_uri.clone()),
    );
}

pub fn voter_registered(env: &Env, id: ElectionId, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"), id), voter.clone());
}

pub fn candidate_registered(env: &Env, id: ElectionId, candidate: &Address, candidate_id: u32) {
    env.events().publish(
        (symbol_short!("cand_reg"), id),
        (candidate.clone(), candidate_id),
    );
}

pub fn voting_started(env: &Env, id: ElectionId, end_time: u64) {
    env.events()
        .publish((symbol_short!("started"), id), end_time);
}

pub fn voting_closed(env: &Env, id: ElectionId, closed_at: u64) {
    env.events()
        .publish((symbol_short!("closed"), id), closed_at);
}

pub fn vote_cast(env: &Env, id: ElectionId, voter: &Address, candidate_id: u32) {
    env.events().publish(
        (symbol_short!("voted"), id),
        (voter.clone(), candidate_id),
    );
}
