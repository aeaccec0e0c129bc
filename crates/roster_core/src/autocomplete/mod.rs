//! Mention autocomplete for users, broadcast targets and user groups.
//!
//! # Responsibility
//! - Rank users for `@`-mention popups from typed filter text.
//! - Keep ranking pure; callers own user lists and mute state.
//!
//! # See also
//! - `tiers` for the individual match strategies.

pub mod groups;
pub mod ranker;
pub mod tiers;
