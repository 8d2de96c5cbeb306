//! Core domain entities.
//!
//! The service stores a single record type, [`Link`]. [`NewLink`] carries the
//! caller-supplied part of a record into the store on creation.

pub mod link;

pub use link::{Link, NewLink};
