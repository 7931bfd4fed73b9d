#![no_std]
//! # Shared Voting Contracts Library
//!
//! Reusable errors, constants, validation helpers and pagination for the
//! voting contracts.
//!
//! ## Modules
//!
//! - `errors` - `VotingError` and its `ErrorKind` classification
//! - `constants` - Storage TTLs and election defaults
//! - `validation` - Precondition helpers returning `VotingError`
//! - `pagination` - Offset/limit windows over indexed sequences
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::VotingError;
//! use shared::validation::validate_page_limit;
//! use shared::pagination::page_range;
//! ```

pub mod constants;
pub mod errors;
pub mod pagination;
pub mod validation;

// Re-export commonly used items
pub use errors::{ErrorKind, VotingError};
pub use pagination::page_range;
pub use validation::{validate_end_time, validate_page_limit, validate_participant};
