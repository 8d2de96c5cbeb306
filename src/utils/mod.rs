//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`url_validator`] - Destination URL validation
//! - [`base_url`] - Public base URL extraction from HTTP headers

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
