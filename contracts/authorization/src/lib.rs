//! Authorization Module for the voting contracts
//!
//! Each election is administered by exactly one address. Instead of a role
//! table, the owner is held in an `OwnerCapability` value that is stored with
//! the election and checked by equality at the top of every owner-gated
//! operation.
//!
//! ## Features
//! - Single-owner capability with an immutable holder
//! - Identity verification through Soroban's built-in auth
//! - Self-action checks for participants acting on their own behalf

#![no_std]

use soroban_sdk::{contracttype, Address};

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    Unauthorized,
}

/// The right to administer one election
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerCapability {
    pub holder: Address,
}

impl OwnerCapability {
    /// Grant the capability to `holder`. There is no transfer path.
    pub fn new(holder: Address) -> Self {
        Self { holder }
    }

    /// Address holding the capability
    pub fn holder(&self) -> &Address {
        &self.holder
    }

    /// Check if `address` holds this capability
    pub fn is_held_by(&self, address: &Address) -> bool {
        self.holder == *address
    }

    /// Require that `caller` holds this capability (no signature check)
    pub fn authorize(&self, caller: &Address) -> Result<(), AuthError> {
        if self.is_held_by(caller) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

/// Verify the caller's identity, then require that it holds `capability`.
/// This is the pattern for every owner-gated operation.
pub fn verify_owner(caller: &Address, capability: &OwnerCapability) -> Result<(), AuthError> {
    caller.require_auth();
    capability.authorize(caller)
}

/// Verify that a participant is signing for itself.
pub fn verify_participant(participant: &Address) {
    participant.require_auth();
}
