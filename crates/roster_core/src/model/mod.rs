//! Domain model for user lists and mention autocomplete.
//!
//! # Responsibility
//! - Define canonical records consumed by ranking and sorting helpers.
//! - Keep broadcast targets out of the user id namespace.
//!
//! # Invariants
//! - Every real user is identified by a stable `UserId`.
//! - Presence is consumed as an already-reduced status.

pub mod option;
pub mod presence;
pub mod user;
pub mod user_group;
