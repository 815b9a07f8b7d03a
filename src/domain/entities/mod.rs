//! Core domain entities.
//!
//! Entities are plain data structures. Creation inputs get their own struct
//! (`NewShortLink`) so that store-assigned fields such as `click_count` and
//! `created_at` cannot be supplied by callers.

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
