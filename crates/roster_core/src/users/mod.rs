//! User-list helpers for member lists and pickers.
//!
//! # Responsibility
//! - Filter and sort plain user lists.
//! - Order and bucket users by presence status.
//!
//! # Invariants
//! - Helpers never mutate their input; sorted output is a new list.
//! - All orderings are stable.

pub mod list;
pub mod status;
