//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation, and business rules, and
//! give HTTP handlers and the admin CLI a store-agnostic API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and deletion

pub mod services;
