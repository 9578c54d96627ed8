//! Stateless per-item formatting helpers used while rendering.
//!
//! # Responsibility
//! - Derive project slugs from titles.
//! - Render project periods as display strings.

pub mod duration;
pub mod slug;
