use soroban_sdk::{Address, Env, String, Vec};

use crate::election;
use crate::storage;
use crate::types::ElectionId;

/// Create an election owned by `caller` and append its handle to the
/// catalogue. Handles are dense and issued in creation order.
pub fn create_voting(env: &Env, caller: Address, metadata_uri: String) -> ElectionId {
    caller.require_auth();

    let id = storage::get_election_count(env);
    election::create(env, id, caller, metadata_uri);
    storage::set_election_count(env, id + 1);
    id
}

/// Every handle ever issued, oldest first.
pub fn get_deployed_votings(env: &Env) -> Vec<ElectionId> {
    let mut deployed = Vec::new(env);
    for id in 0..storage::get_election_count(env) {
        deployed.push_back(id);
    }
    deployed
}

pub fn voting_count(env: &Env) -> u32 {
    storage::get_election_count(env)
}
