//! vCard 3.0 output (RFC 2426).
//!
//! Converts Portable Contacts records into vCard text:
//!
//! ```rust
//! use pococard_rfc::rfc::poco::{AttributeValue, ContactRecord};
//! use pococard_rfc::rfc::vcard::serialize_records;
//!
//! let records = vec![
//!     ContactRecord::new().with("displayName", AttributeValue::scalar("Ada")),
//!     ContactRecord::new().with("displayName", AttributeValue::scalar("Grace")),
//! ];
//!
//! let output = serialize_records(&records);
//! assert!(output.contains("END:VCARD\nBEGIN:VCARD"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Field tables and vCard names
//! - [`build`] - Mapping, encoding, folding, and serialization

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

pub use build::{RecordSerializer, serialize_record, serialize_records};
