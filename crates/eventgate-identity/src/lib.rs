//! Identity primitives shared across eventgate crates.
//!
//! This crate provides:
//! - [`Address`] for caller, manager, and credential-collection identities
//! - [`Timestamp`] for journal record times
//! - Pattern validation with a shared [`ValidationError`]
//!
//! Addresses are 20-byte hex identities in `0x` notation, normalized to
//! lowercase on parse so that equality and map ordering are stable.

#![deny(missing_docs)]

/// Identifier newtypes (addresses, timestamps).
pub mod identifiers;
/// Validation errors for identity primitives.
pub mod validation;

pub use identifiers::{Address, Timestamp};
pub use validation::ValidationError;
