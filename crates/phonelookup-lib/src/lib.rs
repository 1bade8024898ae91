//! Phone number lookup library entry points.
//!
//! This crate exposes helpers to load the phone segment directory into
//! memory and resolve an 11-digit phone number to its carrier and
//! geography record. Higher-level consumers (the HTTP service) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod directory;
pub mod error;
pub mod lookup;

pub use directory::{PhoneDirectory, PhoneNumberInfo};
pub use error::{Error, Result};
pub use lookup::{lookup_phone_number, LookupOutcome, LookupRejection};
