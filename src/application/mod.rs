//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules,
//! and expose a small API to the HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Create, resolve, and delete short links
//! - [`services::stats_service::StatsService`] - Top links by click count
//! - [`services::auth_service::AuthService`] - Admin credential verification

pub mod services;
