//! Server-rendered pages for link management.
//!
//! Uses Askama templates for rendering.
//!
//! # Modules
//!
//! - [`forms`] - Form payloads and their validation
//! - [`handlers`] - Page handlers
//! - [`routes`] - Page route configuration
//! - [`templates`] - Templates and view data

pub mod forms;
pub mod handlers;
pub mod routes;
pub mod templates;
