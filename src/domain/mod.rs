//! Domain layer containing business entities and logic.
//!
//! Defines the short link entity, the storage contract, and the click
//! tracking pipeline, independent of HTTP and database concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves an identifier through
//!    [`crate::application::services::LinkService`]
//! 2. A [`click_event::ClickEvent`] is pushed onto a bounded channel
//! 3. [`click_worker::run_click_worker`] drains it with retry logic
//! 4. The counter is incremented via [`repositories::LinkRepository::increment_clicks`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
